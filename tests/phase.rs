mod tests {
    use embassy_time::Duration;
    use toastbot_browning_control::phase::{BrowningPhase, PhaseTracker, PhaseTrackerConfig};

    const TARGET_L: f32 = 55.0;

    fn tracker() -> PhaseTracker {
        PhaseTracker::new(PhaseTrackerConfig::default())
    }

    #[test]
    fn test_starts_goldening() {
        assert_eq!(tracker().phase(), BrowningPhase::Goldening);
    }

    #[test]
    fn test_holds_goldening_while_light() {
        let mut tracker = tracker();
        let change = tracker.update(88.0, TARGET_L, Duration::from_secs(30));
        assert_eq!(change, None);
        assert_eq!(tracker.phase(), BrowningPhase::Goldening);
    }

    #[test]
    fn test_enters_browning_on_threshold_crossing() {
        let mut tracker = tracker();
        let change = tracker.update(70.0, TARGET_L, Duration::from_secs(60));
        assert_eq!(change, Some(BrowningPhase::Browning));
    }

    #[test]
    fn test_enters_browning_on_time_ceiling() {
        let mut tracker = tracker();
        // Still light, but the goldening stage has run out of time
        let change = tracker.update(85.0, TARGET_L, Duration::from_secs(286));
        assert_eq!(change, Some(BrowningPhase::Browning));
    }

    #[test]
    fn test_done_at_target() {
        let mut tracker = tracker();
        tracker.update(70.0, TARGET_L, Duration::from_secs(60));
        let change = tracker.update(54.5, TARGET_L, Duration::from_secs(200));
        assert_eq!(change, Some(BrowningPhase::Done));
    }

    #[test]
    fn test_one_transition_per_update() {
        let mut tracker = tracker();
        // A reading already below target still passes through browning
        let change = tracker.update(40.0, TARGET_L, Duration::from_secs(10));
        assert_eq!(change, Some(BrowningPhase::Browning));
        let change = tracker.update(40.0, TARGET_L, Duration::from_secs(11));
        assert_eq!(change, Some(BrowningPhase::Done));
    }

    #[test]
    fn test_done_is_terminal() {
        let mut tracker = tracker();
        tracker.update(70.0, TARGET_L, Duration::from_secs(60));
        tracker.update(50.0, TARGET_L, Duration::from_secs(200));
        assert_eq!(tracker.phase(), BrowningPhase::Done);

        assert_eq!(tracker.update(90.0, TARGET_L, Duration::from_secs(201)), None);
        assert_eq!(tracker.update(10.0, TARGET_L, Duration::from_secs(202)), None);
        assert_eq!(tracker.phase(), BrowningPhase::Done);
    }

    #[test]
    fn test_reset_returns_to_goldening() {
        let mut tracker = tracker();
        tracker.update(70.0, TARGET_L, Duration::from_secs(60));
        tracker.update(50.0, TARGET_L, Duration::from_secs(200));
        tracker.reset();
        assert_eq!(tracker.phase(), BrowningPhase::Goldening);
    }
}
