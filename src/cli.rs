use crate::scheduler::{DEFAULT_BPM, DEFAULT_SUBDIVISION, LOOKAHEAD_SECS, POLL_INTERVAL};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Tempo in beats per minute
    #[arg(short, long, default_value_t = DEFAULT_BPM)]
    pub bpm: f64,

    /// Subdivisions per beat (2 schedules eighth notes at the given tempo)
    #[arg(long, default_value_t = DEFAULT_SUBDIVISION)]
    pub subdivision: u32,

    /// How far ahead of the clock beats are dispatched, in milliseconds
    #[arg(long, default_value_t = (LOOKAHEAD_SECS * 1000.0) as u64)]
    pub lookahead_ms: u64,

    /// Delay between catch-up cycles, in milliseconds
    #[arg(long, default_value_t = POLL_INTERVAL.as_millis() as u64)]
    pub poll_interval_ms: u64,
}

pub fn validate_timing(args: &Args) -> Result<(), String> {
    if !args.bpm.is_finite() || args.bpm <= 0.0 {
        return Err(format!(
            "Error: tempo must be a positive number of BPM, got {}",
            args.bpm
        ));
    }
    if args.subdivision == 0 {
        return Err("Error: subdivision must be at least 1".to_string());
    }
    if args.poll_interval_ms == 0 {
        return Err("Error: poll interval must be at least 1ms".to_string());
    }
    Ok(())
}
