//! Exponential backoff generator
//!
//! A lazy, restartable sequence of jittered wait durations. Each call to
//! [`ExponentialBackoff::next`] yields `min(base^i, maximum) + rand() *
//! jitter` seconds; the exponent advances only while the pre-jitter value
//! is below the maximum, so the sequence saturates instead of growing
//! without bound.

use rand::Rng;

use tricorn_domain::{TricornError, TricornResult};

/// Default exponent base.
pub const DEFAULT_BASE: f64 = 2.0;
/// Default saturation ceiling in seconds.
pub const DEFAULT_MAXIMUM: f64 = 64.0;
/// Default jitter multiplier applied to a uniform `[0, 1)` sample.
pub const DEFAULT_JITTER: f64 = 1.0;

/// A restartable jittered exponential backoff sequence.
///
/// Distinct generators share no state; the executor creates a fresh one
/// per logical request so retry histories never leak between calls.
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    base: f64,
    maximum: f64,
    jitter: f64,
    initial_increment: u32,
    increment: u32,
}

impl ExponentialBackoff {
    /// Create a generator, validating that all parameters are finite.
    pub fn new(base: f64, maximum: f64, jitter: f64, initial_increment: u32) -> TricornResult<Self> {
        if !base.is_finite() || !maximum.is_finite() || !jitter.is_finite() {
            return Err(TricornError::Config(format!(
                "backoff parameters must be finite, got base={base} maximum={maximum} jitter={jitter}"
            )));
        }
        Ok(Self { base, maximum, jitter, initial_increment, increment: initial_increment })
    }

    /// A generator capped at `maximum` seconds with default base and
    /// jitter.
    pub fn capped(maximum: f64) -> TricornResult<Self> {
        Self::new(DEFAULT_BASE, maximum, DEFAULT_JITTER, 0)
    }

    /// The next wait duration in seconds.
    pub fn next(&mut self) -> f64 {
        let raw = self.base.powi(self.increment as i32);
        let wait = if raw.is_finite() { raw.min(self.maximum) } else { self.maximum };
        if wait < self.maximum {
            self.increment += 1;
        }
        wait + rand::thread_rng().gen::<f64>() * self.jitter
    }

    /// Restore the sequence to its initial increment.
    pub fn reset(&mut self) {
        self.increment = self.initial_increment;
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            maximum: DEFAULT_MAXIMUM,
            jitter: DEFAULT_JITTER,
            initial_increment: 0,
            increment: 0,
        }
    }
}
