//! Value sources feeding tree construction and lazy growth

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Node payload produced by the default sources
pub type Value = i64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("empty value range: {low}..{high}")]
    Empty { low: Value, high: Value },
}

/// An endless supply of node values.
///
/// Implementations never run dry: the builder and the growing node both pull
/// from a source without checking for exhaustion.
pub trait ValueSource {
    type Value;

    /// Produce the next value.
    fn next_value(&mut self) -> Self::Value;
}

impl<S: ValueSource + ?Sized> ValueSource for &mut S {
    type Value = S::Value;

    fn next_value(&mut self) -> Self::Value {
        (**self).next_value()
    }
}

impl<S: ValueSource + ?Sized> ValueSource for Box<S> {
    type Value = S::Value;

    fn next_value(&mut self) -> Self::Value {
        (**self).next_value()
    }
}

/// Half-open integer range `[low, high)` for random draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    low: Value,
    high: Value,
}

impl ValueRange {
    pub const DEFAULT_LOW: Value = 1;
    pub const DEFAULT_HIGH: Value = 100;

    pub fn new(low: Value, high: Value) -> Result<Self, RangeError> {
        if low >= high {
            return Err(RangeError::Empty { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> Value {
        self.low
    }

    pub fn high(&self) -> Value {
        self.high
    }

    pub fn contains(&self, value: Value) -> bool {
        (self.low..self.high).contains(&value)
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            low: Self::DEFAULT_LOW,
            high: Self::DEFAULT_HIGH,
        }
    }
}

/// Uniform random integers drawn from a [`ValueRange`]
#[derive(Debug, Clone)]
pub struct RandomValues {
    rng: StdRng,
    range: ValueRange,
}

impl RandomValues {
    /// Seeded from the operating system
    pub fn new(range: ValueRange) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            range,
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64, range: ValueRange) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            range,
        }
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }
}

impl Default for RandomValues {
    fn default() -> Self {
        Self::new(ValueRange::default())
    }
}

impl ValueSource for RandomValues {
    type Value = Value;

    fn next_value(&mut self) -> Value {
        self.rng.random_range(self.range.low..self.range.high)
    }
}

/// A finite, non-empty sequence repeated forever
#[derive(Debug, Clone)]
pub struct CycleValues<T> {
    items: Vec<T>,
    next: usize,
}

impl<T: Clone> CycleValues<T> {
    /// Returns `None` for an empty sequence, which cannot be cycled.
    pub fn new(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self { items, next: 0 })
    }
}

impl<T: Clone> ValueSource for CycleValues<T> {
    type Value = T;

    fn next_value(&mut self) -> T {
        let value = self.items[self.next].clone();
        self.next = (self.next + 1) % self.items.len();
        value
    }
}

/// Pick the source for a build.
///
/// Supplied values are cycled. Missing or empty values fall back to random
/// draws from `range`, seeded with `seed` when one is given.
pub fn source_for(
    values: Option<Vec<Value>>,
    range: ValueRange,
    seed: Option<u64>,
) -> Box<dyn ValueSource<Value = Value>> {
    if let Some(cycle) = values.and_then(CycleValues::new) {
        tracing::debug!(len = cycle.items.len(), "cycling supplied values");
        return Box::new(cycle);
    }

    match seed {
        Some(seed) => {
            tracing::debug!(seed, low = range.low, high = range.high, "seeded random values");
            Box::new(RandomValues::seeded(seed, range))
        }
        None => Box::new(RandomValues::new(range)),
    }
}
