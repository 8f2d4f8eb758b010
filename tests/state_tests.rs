use beatclockrs::state::{BeatState, BEATS_PER_BAR};
use beatclockrs::create_shared_state;
use std::thread;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_initialization() {
        let state = BeatState::new();
        assert_eq!(state.beat_count(), 0);
        assert_eq!(state.last_beat_time(), 0.0);
        assert_eq!(state.beat_duration(), 0.5);
        assert_eq!(state.current_beat(), 1);
        assert_eq!(state.current_bar(), 1);
        assert!(!state.is_running());
    }

    #[test]
    fn test_beat_bookkeeping_within_a_bar() {
        let mut state = BeatState::new();

        for expected_beat in 1..=BEATS_PER_BAR {
            state.record_beat((expected_beat - 1) as f64 * 0.5, 0.5);
            assert_eq!(state.current_beat(), expected_beat);
            assert_eq!(state.current_bar(), 1);
        }
    }

    #[test]
    fn test_bar_advances_after_four_beats() {
        let mut state = BeatState::new();

        for i in 0..5 {
            state.record_beat(f64::from(i) * 0.5, 0.5);
        }

        assert_eq!(state.beat_count(), 5);
        assert_eq!(state.current_beat(), 1);
        assert_eq!(state.current_bar(), 2);
        assert_eq!(state.last_beat_time(), 2.0);
    }

    #[test]
    fn test_running_flag() {
        let mut state = BeatState::new();
        assert!(!state.is_running());

        state.set_running(true);
        assert!(state.is_running());

        state.set_running(false);
        assert!(!state.is_running());
    }

    #[test]
    fn test_shared_state_across_threads() {
        let shared_state = create_shared_state();
        let writer_state = shared_state.clone();

        let handle = thread::spawn(move || {
            let mut state = writer_state.lock().unwrap();
            state.record_beat(0.0, 0.5);
            state.record_beat(0.5, 0.5);
            state.set_running(true);
        });
        handle.join().expect("Writer thread panicked");

        let state = shared_state.lock().unwrap();
        assert_eq!(state.beat_count(), 2);
        assert_eq!(state.last_beat_time(), 0.5);
        assert!(state.is_running());
    }
}
