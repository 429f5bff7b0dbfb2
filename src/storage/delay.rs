//! Simulated latency configuration for the deferred adapter forms

use crate::error::{StorageError, StorageResult};
use crate::storage::constants::{DEFAULT_DELAY_MAX_MS, DEFAULT_DELAY_MIN_MS};
use rand::Rng;
use std::time::Duration;

/// Latency applied before a deferred operation settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delay {
    /// Always wait exactly this long
    Fixed(Duration),
    /// Wait a uniformly random duration in `[min, max]`
    Range {
        /// Shortest delay
        min: Duration,
        /// Longest delay, inclusive
        max: Duration,
    },
}

impl Delay {
    /// Build a randomized delay from millisecond bounds
    pub fn range(min_ms: u64, max_ms: u64) -> StorageResult<Self> {
        if min_ms > max_ms {
            return Err(StorageError::InvalidDelay { min_ms, max_ms });
        }
        Ok(Delay::Range {
            min: Duration::from_millis(min_ms),
            max: Duration::from_millis(max_ms),
        })
    }

    /// Build a fixed delay from milliseconds
    pub fn fixed(ms: u64) -> Self {
        Delay::Fixed(Duration::from_millis(ms))
    }

    /// A zero delay; deferred operations settle on the next timer tick
    pub fn immediate() -> Self {
        Delay::Fixed(Duration::ZERO)
    }

    /// Draw the duration for one operation
    pub fn sample(&self) -> Duration {
        match *self {
            Delay::Fixed(duration) => duration,
            Delay::Range { min, max } if min >= max => min,
            Delay::Range { min, max } => {
                let millis = rand::rng().random_range(min.as_millis()..=max.as_millis());
                Duration::from_millis(u64::try_from(millis).unwrap_or(u64::MAX))
            }
        }
    }
}

impl Default for Delay {
    fn default() -> Self {
        Delay::Range {
            min: Duration::from_millis(DEFAULT_DELAY_MIN_MS),
            max: Duration::from_millis(DEFAULT_DELAY_MAX_MS),
        }
    }
}

/// Construction-time configuration of a mock adapter
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Latency of the deferred forms
    pub delay: Delay,
}

impl MockConfig {
    /// Configuration with the given latency
    pub fn with_delay(delay: Delay) -> Self {
        Self { delay }
    }
}
