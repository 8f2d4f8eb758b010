// ui.rs

use crate::state::{SharedState, BEATS_PER_BAR};
use indicatif::ProgressDrawTarget;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::thread;
use std::time::Duration;

pub fn create_beat_progress() -> ProgressBar {
    let pb = ProgressBar::new(BEATS_PER_BAR);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{prefix:.bold} [{bar:40.cyan}] {pos}/{len}")
            .unwrap()
            .progress_chars("⣀⣤⣦⣶⣷⣿ "),
    );
    pb.set_prefix("Beat");
    pb
}

pub fn create_clock_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{prefix:.bold.dim} {spinner} {wide_msg}")
            .unwrap(),
    );
    pb.set_prefix("Clock");
    pb
}

/// Renders the shared beat state to stderr on a 100ms refresh, forever.
pub fn run_beat_display(shared_state: SharedState) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let multi_progress = MultiProgress::with_draw_target(ProgressDrawTarget::stderr());
        let beat_pb = multi_progress.add(create_beat_progress());
        let clock_pb = multi_progress.add(create_clock_spinner());

        loop {
            thread::sleep(Duration::from_millis(100));
            let state = shared_state.lock().unwrap();

            beat_pb.set_position(state.current_beat());
            let status = if state.is_running() {
                "running"
            } else {
                "idle"
            };
            clock_pb.set_message(format!(
                "Bar {} | {} beats | last at {:.2}s | {}",
                state.current_bar(),
                state.beat_count(),
                state.last_beat_time(),
                status
            ));
            clock_pb.tick();
        }
    })
}
