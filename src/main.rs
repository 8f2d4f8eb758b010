use beatclockrs::{
    cli::{validate_timing, Args},
    event_loop::{EngineMessage, EventLoop},
    scheduler::{BeatScheduler, SchedulerHandle},
    ui::run_beat_display,
    SharedState, SystemClock,
};
use clap::Parser;
use crossbeam::channel::{self, Receiver, Sender};
use std::{thread, time::Duration};

fn main() {
    initialize_logging();
    let args = Args::parse();

    if let Err(error_msg) = validate_timing(&args) {
        log::error!("{}", error_msg);
        eprintln!("{}", error_msg);
        std::process::exit(1);
    }

    let shared_state = beatclockrs::create_shared_state();
    let (beat_tx, beat_rx) = channel::unbounded();

    start_event_loop(shared_state.clone(), beat_rx);
    let _scheduler_handle = start_scheduler(&args, beat_tx);

    if let Ok(mut state) = shared_state.lock() {
        state.set_running(true);
    }

    run_beat_display(shared_state);
    run_application_loop();
}

fn initialize_logging() {
    beatclockrs::logging::init_logger().expect("Logger initialization failed");
    log::info!("Application starting");
}

fn start_event_loop(shared_state: SharedState, beat_rx: Receiver<EngineMessage>) {
    thread::spawn(move || {
        let event_loop = EventLoop::new(shared_state, beat_rx);
        event_loop.run();
    });
}

fn start_scheduler(args: &Args, beat_tx: Sender<EngineMessage>) -> SchedulerHandle {
    log::info!(
        "Starting beat scheduler: {} BPM, subdivision {}, lookahead {}ms, poll {}ms",
        args.bpm,
        args.subdivision,
        args.lookahead_ms,
        args.poll_interval_ms
    );

    let scheduler = BeatScheduler::with_timing(
        SystemClock::new(),
        args.bpm,
        args.subdivision,
        args.lookahead_ms as f64 / 1000.0,
        Box::new(move |time, duration| {
            let _ = beat_tx.send(EngineMessage::Beat { time, duration });
        }),
    );

    scheduler.spawn(Duration::from_millis(args.poll_interval_ms))
}

fn run_application_loop() {
    loop {
        thread::sleep(Duration::from_secs(1));
    }
}
