//! Quicksort tracer (Lomuto partition, last element as pivot).
//!
//! Sorts a private working copy of the input in place, recording a
//! [`QuickSortStep`] for every comparison, swap, and partition event. The
//! array mutates between events, so every step carries a full snapshot of
//! its contents plus the cumulative set of indices already in their final
//! position -- that set is what lets the UI shade sorted regions as the
//! run progresses.

use indexmap::IndexSet;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A pair of highlighted indices (or empty). Two slots cover every event
/// the tracer emits, so the pair lives inline without a heap allocation.
pub type IndexPair = SmallVec<[usize; 2]>;

/// One recorded event in the quicksort run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickSortStep {
    /// Full snapshot of the working array at this instant.
    pub array: Vec<i32>,
    /// Low end of the active partition range.
    pub low: usize,
    /// High end of the active partition range.
    pub high: usize,
    /// Index of the pivot this step refers to, when one is in play.
    pub pivot_index: Option<usize>,
    /// The two indices being compared, or empty.
    pub comparing: IndexPair,
    /// The two indices being exchanged, or empty.
    pub swapping: IndexPair,
    /// Indices already fixed in their final sorted position, cumulative.
    pub sorted: Vec<usize>,
    /// Human-readable narration for the step panel.
    pub description: String,
}

/// The complete result of a quicksort run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickSortTrace {
    pub steps: Vec<QuickSortStep>,
    /// The fully sorted array. The caller's input is never mutated.
    pub sorted_array: Vec<i32>,
}

/// Working state for one run: the mutating array, the cumulative sorted
/// set, and the step log.
struct SortRun {
    array: Vec<i32>,
    sorted: IndexSet<usize>,
    steps: Vec<QuickSortStep>,
}

impl SortRun {
    /// Appends a step with a snapshot of the current array and sorted set.
    fn record(
        &mut self,
        low: usize,
        high: usize,
        pivot_index: Option<usize>,
        comparing: IndexPair,
        swapping: IndexPair,
        description: String,
    ) {
        self.steps.push(QuickSortStep {
            array: self.array.clone(),
            low,
            high,
            pivot_index,
            comparing,
            swapping,
            sorted: self.sorted.iter().copied().collect(),
            description,
        });
    }

    /// Lomuto partition over `[low, high]` with `array[high]` as pivot.
    /// Returns the pivot's final resting index.
    fn partition(&mut self, low: usize, high: usize) -> usize {
        let pivot = self.array[high];
        self.record(
            low,
            high,
            Some(high),
            IndexPair::new(),
            IndexPair::new(),
            format!("Partitioning [{}-{}], pivot = {}", low, high, pivot),
        );

        // Next slot for a value <= pivot; everything left of it already is.
        let mut boundary = low;

        for j in low..high {
            self.record(
                low,
                high,
                Some(high),
                IndexPair::from_slice(&[j, high]),
                IndexPair::new(),
                format!("Comparing {} with pivot {}", self.array[j], pivot),
            );

            if self.array[j] <= pivot {
                let dest = boundary;
                boundary += 1;
                if dest != j {
                    self.record(
                        low,
                        high,
                        Some(high),
                        IndexPair::new(),
                        IndexPair::from_slice(&[dest, j]),
                        format!(
                            "{} <= {}, swapping {} and {}",
                            self.array[j], pivot, self.array[dest], self.array[j]
                        ),
                    );
                    self.array.swap(dest, j);
                } else {
                    self.record(
                        low,
                        high,
                        Some(high),
                        IndexPair::new(),
                        IndexPair::new(),
                        format!("{} <= {}, no swap needed", self.array[j], pivot),
                    );
                }
            } else {
                self.record(
                    low,
                    high,
                    Some(high),
                    IndexPair::new(),
                    IndexPair::new(),
                    format!("{} > {}, no action", self.array[j], pivot),
                );
            }
        }

        let pivot_final = boundary;
        if pivot_final != high {
            self.record(
                low,
                high,
                Some(high),
                IndexPair::new(),
                IndexPair::from_slice(&[pivot_final, high]),
                format!("Placing pivot {} at position {}", pivot, pivot_final),
            );
            self.array.swap(pivot_final, high);
        }

        self.sorted.insert(pivot_final);
        self.record(
            low,
            high,
            Some(pivot_final),
            IndexPair::new(),
            IndexPair::new(),
            format!("Pivot {} is now in its final sorted position", pivot),
        );

        pivot_final
    }

    /// Recursive driver. Callers guarantee `low <= high`; an empty range is
    /// handled by the callers never making that call.
    fn sort_range(&mut self, low: usize, high: usize) {
        if low < high {
            let pivot = self.partition(low, high);
            if pivot > low {
                self.sort_range(low, pivot - 1);
            }
            if pivot + 1 <= high {
                self.sort_range(pivot + 1, high);
            }
        } else {
            // low == high: a one-element range is already in place.
            self.sorted.insert(low);
            self.record(
                low,
                high,
                Some(low),
                IndexPair::new(),
                IndexPair::new(),
                format!("Single element {} is sorted", self.array[low]),
            );
        }
    }
}

/// Runs quicksort over a copy of `array`, recording every event.
///
/// An empty input yields an empty step list and an empty sorted array.
pub fn run(array: &[i32]) -> QuickSortTrace {
    let mut run = SortRun {
        array: array.to_vec(),
        sorted: IndexSet::new(),
        steps: Vec::new(),
    };

    if !run.array.is_empty() {
        let last = run.array.len() - 1;
        run.record(
            0,
            last,
            None,
            IndexPair::new(),
            IndexPair::new(),
            format!("Starting QuickSort on array of {} elements", run.array.len()),
        );
        run.sort_range(0, last);

        for i in 0..run.array.len() {
            run.sorted.insert(i);
        }
        run.record(
            0,
            last,
            None,
            IndexPair::new(),
            IndexPair::new(),
            "Array is now fully sorted".to_string(),
        );
    }

    QuickSortTrace {
        steps: run.steps,
        sorted_array: run.array,
    }
}

/// Generates `size` integers in `[1, max_value]`, duplicates allowed,
/// from a seeded ChaCha8 RNG. `max_value` below 1 is treated as 1.
pub fn generate_random_array(size: usize, max_value: i32, seed: u64) -> Vec<i32> {
    let upper = max_value.max(1);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(1..=upper)).collect()
}
