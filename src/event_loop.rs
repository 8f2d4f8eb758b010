// event_loop.rs

use crate::state::SharedState;
use crossbeam::channel::Receiver;
use log::{debug, error, info};

/// Messages flowing from the scheduler callback into the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineMessage {
    Beat { time: f64, duration: f64 },
}

pub struct EventLoop {
    shared_state: SharedState,
    beat_rx: Receiver<EngineMessage>,
}

impl EventLoop {
    pub fn new(shared_state: SharedState, beat_rx: Receiver<EngineMessage>) -> Self {
        EventLoop {
            shared_state,
            beat_rx,
        }
    }

    /// Blocks on the beat channel, folding each event into the shared
    /// state. Exits when every sender has been dropped.
    pub fn run(&self) {
        loop {
            match self.beat_rx.recv() {
                Ok(EngineMessage::Beat { time, duration }) => {
                    let mut state = self.shared_state.lock().unwrap();
                    state.record_beat(time, duration);
                    debug!(
                        "Beat recorded: count={}, time={:.3}s, bar={}, beat={}",
                        state.beat_count(),
                        state.last_beat_time(),
                        state.current_bar(),
                        state.current_beat()
                    );
                }
                Err(e) => {
                    error!("Beat channel closed: {}", e);
                    break;
                }
            }
        }
        info!("Event loop exited");
    }
}
