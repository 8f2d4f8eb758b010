//! Lookahead beat scheduling
//!
//! [`BeatScheduler`] owns a cursor pointing at the next beat not yet
//! dispatched and a fixed beat duration. Each catch-up cycle dispatches
//! every beat that falls within the lookahead window ahead of the clock,
//! so timer jitter between polls never skips or delays a beat.

use crate::clock::AudioClock;
use log::{info, trace};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub const DEFAULT_BPM: f64 = 120.0;
pub const DEFAULT_SUBDIVISION: u32 = 1;

/// How far ahead of the clock beats are dispatched, in seconds.
pub const LOOKAHEAD_SECS: f64 = 0.2;

/// Delay between successive catch-up cycles.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Callback invoked once per beat with `(beat_time, beat_duration)`,
/// both in seconds.
pub type BeatCallback = Box<dyn FnMut(f64, f64) + Send + 'static>;

/// Seconds per beat at the given tempo and subdivision.
pub fn beat_duration(bpm: f64, subdivision: u32) -> f64 {
    60.0 / bpm / f64::from(subdivision)
}

pub struct BeatScheduler<C: AudioClock> {
    clock: C,
    callback: BeatCallback,
    next_beat_time: f64,
    beat_duration: f64,
    lookahead: f64,
}

impl<C: AudioClock> BeatScheduler<C> {
    /// Creates a scheduler at the default tempo: 120 BPM, one beat per
    /// subdivision, 0.5s per beat.
    pub fn new(clock: C, callback: BeatCallback) -> Self {
        Self::with_tempo(clock, DEFAULT_BPM, DEFAULT_SUBDIVISION, callback)
    }

    pub fn with_tempo(clock: C, bpm: f64, subdivision: u32, callback: BeatCallback) -> Self {
        Self::with_timing(clock, bpm, subdivision, LOOKAHEAD_SECS, callback)
    }

    pub fn with_timing(
        clock: C,
        bpm: f64,
        subdivision: u32,
        lookahead_secs: f64,
        callback: BeatCallback,
    ) -> Self {
        BeatScheduler {
            clock,
            callback,
            next_beat_time: 0.0,
            beat_duration: beat_duration(bpm, subdivision),
            lookahead: lookahead_secs,
        }
    }

    pub fn beat_duration(&self) -> f64 {
        self.beat_duration
    }

    /// Timestamp of the next beat not yet dispatched.
    pub fn next_beat_time(&self) -> f64 {
        self.next_beat_time
    }

    /// One catch-up cycle: dispatches every beat earlier than
    /// `clock.now() + lookahead`, advancing the cursor by exactly one
    /// beat duration per dispatch. A clock that has jumped far ahead is
    /// caught up in a single synchronous burst.
    pub fn run_cycle(&mut self) {
        let target_time = self.clock.now() + self.lookahead;
        while self.next_beat_time < target_time {
            trace!("Dispatching beat at {:.3}s", self.next_beat_time);
            (self.callback)(self.next_beat_time, self.beat_duration);
            self.next_beat_time += self.beat_duration;
        }
    }
}

impl<C: AudioClock + Send + 'static> BeatScheduler<C> {
    /// Drives `run_cycle` on a dedicated thread, sleeping `poll_interval`
    /// between cycles, until the returned handle is stopped.
    pub fn spawn(self, poll_interval: Duration) -> SchedulerHandle {
        let running = Arc::new(AtomicBool::new(true));
        let thread_running = Arc::clone(&running);
        let mut scheduler = self;

        let thread_handle = thread::spawn(move || {
            info!("Beat scheduler thread started");
            while thread_running.load(Ordering::SeqCst) {
                scheduler.run_cycle();
                thread::sleep(poll_interval);
            }
            info!("Beat scheduler thread stopped");
        });

        SchedulerHandle {
            running,
            thread_handle: Some(thread_handle),
        }
    }
}

/// Handle to a running scheduler thread. Dropping the handle without
/// calling [`stop`](SchedulerHandle::stop) leaves the thread running
/// until the process exits.
pub struct SchedulerHandle {
    running: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
}

impl SchedulerHandle {
    /// Stops the polling thread and waits for it to finish. No further
    /// callbacks run after this returns.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }

    pub fn is_running(&self) -> bool {
        self.thread_handle.is_some() && self.running.load(Ordering::SeqCst)
    }
}
