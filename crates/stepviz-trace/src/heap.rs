//! Binary min-heap priority queue for the shortest-path tracer.
//!
//! [`MinHeap`] is a value-semantics container: one owned, growable vec of
//! `(key, priority)` entries, with sift-up/sift-down maintaining the heap
//! invariant. Among entries with equal priority the extraction order is
//! arbitrary (whichever sibling the sift comparison picks first), but for a
//! fixed insertion order it is deterministic.

/// One `(key, priority)` pair in the heap.
#[derive(Debug, Clone, PartialEq)]
pub struct HeapEntry<K> {
    pub key: K,
    pub priority: f64,
}

/// Binary min-heap ordered by `priority`.
#[derive(Debug, Clone)]
pub struct MinHeap<K> {
    entries: Vec<HeapEntry<K>>,
}

impl<K> Default for MinHeap<K> {
    fn default() -> Self {
        MinHeap { entries: Vec::new() }
    }
}

impl<K: PartialEq> MinHeap<K> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        MinHeap::default()
    }

    /// Returns `true` if the heap holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserts a key at the given priority. O(log n): append then sift up.
    pub fn insert(&mut self, key: K, priority: f64) {
        self.entries.push(HeapEntry { key, priority });
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the entry with the smallest priority, or `None`
    /// if the heap is empty. O(log n): the last entry replaces the root and
    /// sifts down.
    pub fn extract_min(&mut self) -> Option<HeapEntry<K>> {
        if self.entries.is_empty() {
            return None;
        }
        let min = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    /// Lowers the priority of `key` to `new_priority` if that is strictly
    /// smaller than its current priority; no-op otherwise (including when
    /// the key is absent).
    ///
    /// The key is located by linear scan. A true O(log n) decrease-key needs
    /// an index map; at the scale this queue serves (a few dozen nodes) the
    /// scan is a deliberate simplification, and the shortest-path tracer
    /// side-steps it entirely by inserting duplicates and discarding stale
    /// entries on extraction.
    pub fn decrease_key(&mut self, key: &K, new_priority: f64) {
        if let Some(idx) = self.entries.iter().position(|e| &e.key == key) {
            if new_priority < self.entries[idx].priority {
                self.entries[idx].priority = new_priority;
                self.sift_up(idx);
            }
        }
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[parent].priority > self.entries[idx].priority {
                self.entries.swap(parent, idx);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;

            if left < self.entries.len()
                && self.entries[left].priority < self.entries[smallest].priority
            {
                smallest = left;
            }
            if right < self.entries.len()
                && self.entries[right].priority < self.entries[smallest].priority
            {
                smallest = right;
            }

            if smallest == idx {
                break;
            }
            self.entries.swap(idx, smallest);
            idx = smallest;
        }
    }
}
