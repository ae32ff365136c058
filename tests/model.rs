mod tests {
    use embassy_time::Duration;
    use toastbot_browning_control::model::{BrowningModel, BrowningModelConfig};
    use toastbot_browning_control::phase::BrowningPhase;

    fn default_model() -> BrowningModel {
        BrowningModel::new(BrowningModelConfig::default())
    }

    #[test]
    fn test_starts_at_untoasted_lightness() {
        let model = default_model();
        let config = BrowningModelConfig::default();
        let l = model.predict(Duration::from_secs(0), BrowningPhase::Goldening);
        assert!((l - config.start_l).abs() < 1e-3);
    }

    #[test]
    fn test_goldening_decreases() {
        let model = default_model();
        let early = model.predict(Duration::from_secs(30), BrowningPhase::Goldening);
        let mid = model.predict(Duration::from_secs(120), BrowningPhase::Goldening);
        let late = model.predict(Duration::from_secs(285), BrowningPhase::Goldening);
        assert!(early > mid);
        assert!(mid > late);
    }

    #[test]
    fn test_continuous_at_handoff() {
        let model = default_model();
        let ceiling = BrowningModelConfig::default().goldening_ceiling;
        let end_of_goldening = model.predict(ceiling, BrowningPhase::Goldening);
        let start_of_browning = model.predict(ceiling, BrowningPhase::Browning);
        assert!((end_of_goldening - start_of_browning).abs() < 1e-3);
    }

    #[test]
    fn test_browning_is_linear_decline() {
        let model = default_model();
        let config = BrowningModelConfig::default();
        let ceiling = config.goldening_ceiling;
        let handoff = model.predict(ceiling, BrowningPhase::Browning);
        let later = model.predict(ceiling + Duration::from_secs(100), BrowningPhase::Browning);
        assert!((handoff - later - config.browning_slope * 100.0).abs() < 1e-2);
    }

    #[test]
    fn test_early_browning_holds_at_handoff() {
        // A threshold crossing can enter browning ahead of the nominal
        // ceiling; the expectation holds at the handoff value until the
        // nominal timeline catches up.
        let model = default_model();
        let ceiling = BrowningModelConfig::default().goldening_ceiling;
        let early = model.predict(Duration::from_secs(100), BrowningPhase::Browning);
        let handoff = model.predict(ceiling, BrowningPhase::Browning);
        assert!((early - handoff).abs() < 1e-3);
    }

    #[test]
    fn test_constant_model_is_flat() {
        let model = BrowningModel::new(BrowningModelConfig::constant(80.0));
        for phase in [
            BrowningPhase::Goldening,
            BrowningPhase::Browning,
            BrowningPhase::Done,
        ] {
            assert_eq!(model.predict(Duration::from_secs(0), phase), 80.0);
            assert_eq!(model.predict(Duration::from_secs(1000), phase), 80.0);
        }
    }

    #[test]
    fn test_time_to_reach() {
        let model = default_model();
        // 11 L* to go at 0.055 L*/s is 200 s
        let estimate = model.time_to_reach(60.0, 49.0);
        let millis = estimate.as_millis() as i64;
        assert!((millis - 200_000).abs() <= 5);
    }

    #[test]
    fn test_time_to_reach_floor() {
        let model = default_model();
        let config = BrowningModelConfig::default();
        // Nearly there: the estimate must not collapse below the floor
        assert_eq!(model.time_to_reach(49.5, 49.0), config.min_remaining);
        assert_eq!(model.time_to_reach(40.0, 49.0), config.min_remaining);
    }
}
