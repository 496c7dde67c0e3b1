use crate::utils::Float;
use std::time::Instant;

/// Implements performance timer functionality.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Creates a new instance of `Timer`.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed seconds.
    pub fn elapsed_secs(&self) -> u64 {
        (Instant::now() - self.start).as_secs()
    }

    /// Returns elapsed seconds as floating point number.
    pub fn elapsed_secs_as_float(&self) -> Float {
        (Instant::now() - self.start).as_secs_f64() as Float
    }

    /// Returns elapsed milliseconds.
    pub fn elapsed_millis(&self) -> u128 {
        (Instant::now() - self.start).as_millis()
    }
}
