//! Binary search tracer.
//!
//! Records one [`BinarySearchStep`] per midpoint probe. The array itself is
//! never copied into the steps -- it is immutable for the duration of the
//! search, so the player indexes into the caller's array while the steps
//! carry only the moving bounds.
//!
//! Precondition: the input array is sorted ascending. The tracer does not
//! verify this; probe results on an unsorted array are meaningless.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::TraceError;

/// Outcome of comparing the probed value against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    Equal,
    Less,
    Greater,
}

/// One midpoint probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinarySearchStep {
    /// Inclusive lower bound of the live search window.
    pub left: usize,
    /// Inclusive upper bound of the live search window.
    pub right: usize,
    /// The probed index.
    pub mid: usize,
    /// How `array[mid]` compared against the target.
    pub comparison: Comparison,
    /// Whether this probe located the target.
    pub found: bool,
    /// Human-readable narration for the step panel.
    pub description: String,
}

/// The complete result of a binary search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinarySearchTrace {
    /// One step per probe, plus one terminal "not found" step on a miss.
    pub steps: Vec<BinarySearchStep>,
    /// Index of the target, or `None` when absent.
    pub found_index: Option<usize>,
    /// Whether the target was located.
    pub found: bool,
}

/// Runs binary search for `target` over an ascending `array`, recording
/// every probe.
///
/// On a miss, one extra terminal step is appended (a copy of the last
/// probe's bounds with a "not found" description) so the player has a
/// final frame to rest on. An empty array produces an empty step list.
pub fn run(array: &[i32], target: i32) -> BinarySearchTrace {
    let mut steps: Vec<BinarySearchStep> = Vec::new();
    let mut left: i64 = 0;
    let mut right: i64 = array.len() as i64 - 1;
    let mut found_index: Option<usize> = None;
    let mut found = false;

    while left <= right {
        let mid = (left + right) / 2;
        let mid_value = array[mid as usize];

        if mid_value == target {
            found = true;
            found_index = Some(mid as usize);
            steps.push(BinarySearchStep {
                left: left as usize,
                right: right as usize,
                mid: mid as usize,
                comparison: Comparison::Equal,
                found: true,
                description: format!("Found {} at index {}", target, mid),
            });
            break;
        } else if mid_value < target {
            steps.push(BinarySearchStep {
                left: left as usize,
                right: right as usize,
                mid: mid as usize,
                comparison: Comparison::Less,
                found: false,
                description: format!("{} < {}, search right half", mid_value, target),
            });
            left = mid + 1;
        } else {
            steps.push(BinarySearchStep {
                left: left as usize,
                right: right as usize,
                mid: mid as usize,
                comparison: Comparison::Greater,
                found: false,
                description: format!("{} > {}, search left half", mid_value, target),
            });
            right = mid - 1;
        }
    }

    if !found {
        if let Some(last) = steps.last().cloned() {
            steps.push(BinarySearchStep {
                description: format!("{} not found in array", target),
                found: false,
                ..last
            });
        }
    }

    BinarySearchTrace {
        steps,
        found_index,
        found,
    }
}

/// Generates `size` distinct integers in `[1, max_value]`, ascending.
///
/// Samples without replacement by rejection from a seeded ChaCha8 RNG, so
/// the same seed always yields the same array. Fails fast with
/// [`TraceError::InvalidSampleRange`] when the range cannot supply `size`
/// distinct values -- rejection sampling would otherwise never terminate.
pub fn generate_sorted_array(
    size: usize,
    max_value: i32,
    seed: u64,
) -> Result<Vec<i32>, TraceError> {
    let available = max_value.max(0) as usize;
    if size > available {
        return Err(TraceError::InvalidSampleRange { size, max_value });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut values = std::collections::BTreeSet::new();
    while values.len() < size {
        values.insert(rng.gen_range(1..=max_value));
    }
    Ok(values.into_iter().collect())
}
