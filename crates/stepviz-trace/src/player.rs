//! Playback cursor over a materialized step sequence.
//!
//! Every tracer returns its steps as one fully materialized, immutable
//! sequence precisely so a player can index into it at random: forward,
//! backward, or driven by an auto-play timer. [`StepPlayer`] is the pure
//! cursor state behind that scrubbing -- the rendering layer owns the
//! timer and draws `steps[player.current()]`; the player owns nothing but
//! the position.

use serde::{Deserialize, Serialize};

/// Cursor over a step sequence of known length.
///
/// The cursor starts unset (no step shown) until the first `restart` or
/// `step_forward`. All movement saturates at the sequence bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepPlayer {
    len: usize,
    cursor: Option<usize>,
}

impl StepPlayer {
    /// Creates a player over `len` steps with the cursor unset.
    pub fn new(len: usize) -> Self {
        StepPlayer { len, cursor: None }
    }

    /// Number of steps in the sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence has no steps.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The current step index, or `None` before playback starts.
    pub fn current(&self) -> Option<usize> {
        self.cursor
    }

    /// Moves the cursor to the first step (no-op on an empty sequence).
    pub fn restart(&mut self) {
        self.cursor = if self.len > 0 { Some(0) } else { None };
    }

    /// Clears the cursor back to the unset state.
    pub fn rewind(&mut self) {
        self.cursor = None;
    }

    /// Advances one step. Returns `false` when already on the last step
    /// (or the sequence is empty) -- the auto-play timer stops on `false`.
    pub fn step_forward(&mut self) -> bool {
        match self.cursor {
            None if self.len > 0 => {
                self.cursor = Some(0);
                true
            }
            Some(i) if i + 1 < self.len => {
                self.cursor = Some(i + 1);
                true
            }
            _ => false,
        }
    }

    /// Moves back one step. Returns `false` on the first step or when the
    /// cursor is unset.
    pub fn step_back(&mut self) -> bool {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                true
            }
            _ => false,
        }
    }

    /// Jumps directly to `index`. Returns `false` (cursor unchanged) when
    /// the index is out of range.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.cursor = Some(index);
            true
        } else {
            false
        }
    }

    /// Returns `true` once the cursor rests on the last step. An empty
    /// sequence is always at its end.
    pub fn at_end(&self) -> bool {
        if self.len == 0 {
            return true;
        }
        self.cursor == Some(self.len - 1)
    }

    /// Percent of the sequence played, for the progress bar: step i of n
    /// is `(i + 1) / n * 100`. Zero while the cursor is unset.
    pub fn progress(&self) -> f64 {
        match self.cursor {
            Some(i) if self.len > 0 => (i + 1) as f64 / self.len as f64 * 100.0,
            _ => 0.0,
        }
    }
}
