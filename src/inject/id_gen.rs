use std::collections::HashSet;

use rand::rngs::ThreadRng;
use rand::{Rng, thread_rng};

/// Exclusive upper bound of the numeric suffix.
pub const DEFAULT_ID_UPPER_BOUND: u64 = 100_000_000;

/// Resource-id prefix Android uses for newly declared ids.
pub const ID_PREFIX: &str = "@+id/";

const MAX_DRAWS: u32 = 1024;

/// Draws `@+id/<tag>_<n>` identifiers from a uniform random source.
///
/// Without uniqueness tracking collisions are possible, only unlikely.
/// With it, every id issued or registered during the run is remembered and
/// a colliding draw is retried.
pub struct IdGenerator<R: Rng = ThreadRng> {
    rng: R,
    upper_bound: u64,
    issued: Option<HashSet<String>>,
}

impl IdGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(thread_rng())
    }
}

impl Default for IdGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> IdGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            upper_bound: DEFAULT_ID_UPPER_BOUND,
            issued: None,
        }
    }

    /// Set the exclusive bound of the numeric suffix. Zero is clamped to one.
    pub fn with_upper_bound(mut self, upper_bound: u64) -> Self {
        self.upper_bound = upper_bound.max(1);
        self
    }

    pub fn with_uniqueness(mut self, enabled: bool) -> Self {
        self.issued = enabled.then(HashSet::new);
        self
    }

    pub fn tracks_uniqueness(&self) -> bool {
        self.issued.is_some()
    }

    /// Record an id that already exists so it is never issued.
    /// No-op unless uniqueness tracking is on.
    pub fn reserve(&mut self, id: &str) {
        if let Some(issued) = self.issued.as_mut() {
            issued.insert(id.to_string());
        }
    }

    /// Generate a fresh id for an element with the given tag.
    ///
    /// In unique mode, gives up after a bounded number of redraws and
    /// returns the last candidate, so a tiny id space cannot hang the run.
    pub fn next_id(&mut self, tag: &str) -> String {
        let max_attempts = if self.issued.is_some() { MAX_DRAWS } else { 1 };

        let mut candidate = self.draw(tag);
        for _ in 1..max_attempts {
            if !self.is_taken(&candidate) {
                break;
            }
            candidate = self.draw(tag);
        }

        self.reserve(&candidate);
        candidate
    }

    fn draw(&mut self, tag: &str) -> String {
        let n = self.rng.gen_range(0..self.upper_bound);
        format!("{}{}_{}", ID_PREFIX, tag, n)
    }

    fn is_taken(&self, id: &str) -> bool {
        self.issued.as_ref().is_some_and(|set| set.contains(id))
    }
}
