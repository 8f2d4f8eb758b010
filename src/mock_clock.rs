use crate::clock::AudioClock;
use std::sync::{Arc, Mutex};

/// Manually driven clock for deterministic tests. Clones share the same
/// underlying time, so one handle can advance the clock while another is
/// owned by a scheduler.
#[derive(Clone)]
pub struct MockClock {
    time: Arc<Mutex<f64>>,
}

impl MockClock {
    pub fn new() -> Self {
        MockClock {
            time: Arc::new(Mutex::new(0.0)),
        }
    }

    pub fn set(&self, seconds: f64) {
        *self.time.lock().unwrap() = seconds;
    }

    pub fn advance(&self, seconds: f64) {
        *self.time.lock().unwrap() += seconds;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioClock for MockClock {
    fn now(&self) -> f64 {
        *self.time.lock().unwrap()
    }
}
