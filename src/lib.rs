//! Lookahead beat scheduling against a monotonic audio clock
//!
//! BeatClock repeatedly invokes a caller-supplied callback at fixed
//! musical-beat intervals, dispatching each beat shortly before its
//! scheduled time so that polling jitter never skips or delays one.
//!
//! The main components are:
//! - [`BeatScheduler`] for the catch-up loop and its polling thread
//! - [`AudioClock`] with [`SystemClock`] for real time and [`MockClock`]
//!   for deterministic tests
//! - [`EventLoop`](event_loop::EventLoop) and [`BeatState`] for consuming
//!   beat events off a channel

pub mod cli;
pub mod clock;
pub mod event_loop;
pub mod logging;
pub mod mock_clock;
pub mod scheduler;
pub mod state;
pub mod ui;

pub use clock::{AudioClock, SystemClock};
pub use mock_clock::MockClock;
pub use scheduler::{BeatCallback, BeatScheduler, SchedulerHandle};
pub use state::{create_shared_state, BeatState, SharedState};
