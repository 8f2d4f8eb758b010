use crate::scheduler::{beat_duration, DEFAULT_BPM, DEFAULT_SUBDIVISION};
use std::sync::{Arc, Mutex};

/// Beats grouped per bar for display bookkeeping (4/4 assumption).
pub const BEATS_PER_BAR: u64 = 4;

pub struct BeatState {
    beat_count: u64,
    last_beat_time: f64,
    beat_duration: f64,
    running: bool,
}

impl Default for BeatState {
    fn default() -> Self {
        BeatState {
            beat_count: 0,
            last_beat_time: 0.0,
            beat_duration: beat_duration(DEFAULT_BPM, DEFAULT_SUBDIVISION),
            running: false,
        }
    }
}

impl BeatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one dispatched beat.
    pub fn record_beat(&mut self, time: f64, duration: f64) {
        self.beat_count += 1;
        self.last_beat_time = time;
        self.beat_duration = duration;
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn beat_count(&self) -> u64 {
        self.beat_count
    }

    pub fn last_beat_time(&self) -> f64 {
        self.last_beat_time
    }

    pub fn beat_duration(&self) -> f64 {
        self.beat_duration
    }

    /// 1-based beat position within the current bar.
    pub fn current_beat(&self) -> u64 {
        if self.beat_count == 0 {
            1
        } else {
            (self.beat_count - 1) % BEATS_PER_BAR + 1
        }
    }

    /// 1-based bar number.
    pub fn current_bar(&self) -> u64 {
        if self.beat_count == 0 {
            1
        } else {
            (self.beat_count - 1) / BEATS_PER_BAR + 1
        }
    }
}

pub type SharedState = Arc<Mutex<BeatState>>;

pub fn create_shared_state() -> SharedState {
    Arc::new(Mutex::new(BeatState::new()))
}
