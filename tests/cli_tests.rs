#[cfg(test)]
mod tests {
    use beatclockrs::cli::{validate_timing, Args};
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["test"]);
        assert_eq!(args.bpm, 120.0);
        assert_eq!(args.subdivision, 1);
        assert_eq!(args.lookahead_ms, 200);
        assert_eq!(args.poll_interval_ms, 100);
    }

    #[test]
    fn test_args_with_tempo() {
        let args = Args::parse_from(["test", "--bpm", "90.5"]);
        assert_eq!(args.bpm, 90.5);
    }

    #[test]
    fn test_args_with_timing_overrides() {
        let args = Args::parse_from([
            "test",
            "--subdivision",
            "2",
            "--lookahead-ms",
            "300",
            "--poll-interval-ms",
            "50",
        ]);
        assert_eq!(args.subdivision, 2);
        assert_eq!(args.lookahead_ms, 300);
        assert_eq!(args.poll_interval_ms, 50);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let args = Args::parse_from(["test"]);
        assert!(validate_timing(&args).is_ok());
    }

    #[test]
    fn test_validate_rejects_nonpositive_tempo() {
        let mut args = Args::parse_from(["test"]);
        args.bpm = 0.0;
        assert!(validate_timing(&args).is_err());

        args.bpm = -10.0;
        assert!(validate_timing(&args).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_subdivision() {
        let mut args = Args::parse_from(["test"]);
        args.subdivision = 0;
        assert!(validate_timing(&args).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_poll_interval() {
        let mut args = Args::parse_from(["test"]);
        args.poll_interval_ms = 0;
        assert!(validate_timing(&args).is_err());
    }
}
