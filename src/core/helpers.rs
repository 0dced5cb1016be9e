use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};

/// Source of "now" for timestamps and relative-time rendering.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hand-driven clock. Clones share the same instant.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: Rc::new(Cell::new(start)) }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        self.now.set(instant);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// Next id for a collection numbered `len + 1`.
///
/// Falls back to `max + 1` when `len + 1` is already taken, which only happens
/// once the stored ids stop being a dense `1..=len` sequence.
pub fn next_sequential_id(existing: &[u64]) -> u64 {
    let candidate = existing.len() as u64 + 1;
    if !existing.contains(&candidate) {
        return candidate;
    }
    let fallback = existing.iter().copied().max().unwrap_or(0) + 1;
    tracing::warn!(candidate, fallback, "sequential id already taken, using max id + 1");
    fallback
}

/// Next id as `max + 1`, or 1 for an empty collection.
pub fn next_max_id<I: IntoIterator<Item = u64>>(existing: I) -> u64 {
    existing.into_iter().max().map_or(1, |max| max + 1)
}

/// First character of a name, uppercased. Used for avatars.
pub fn initial_of(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
