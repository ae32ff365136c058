mod tests {
    use toastbot_browning_control::color::{ColorSample, to_lab};

    const BLACK: ColorSample = ColorSample { r: 0, g: 0, b: 0 };
    const WHITE: ColorSample = ColorSample {
        r: 255,
        g: 255,
        b: 255,
    };

    fn gray(value: u8) -> ColorSample {
        ColorSample {
            r: value,
            g: value,
            b: value,
        }
    }

    #[test]
    fn test_white_reference() {
        let lab = to_lab(WHITE);
        assert!((lab.l - 100.0).abs() < 0.5);
        assert!(lab.a.abs() < 0.5);
        assert!(lab.b.abs() < 0.5);
    }

    #[test]
    fn test_black_is_degenerate_zero() {
        let lab = to_lab(BLACK);
        assert_eq!(lab.l, 0.0);
        assert_eq!(lab.a, 0.0);
        assert_eq!(lab.b, 0.0);
    }

    #[test]
    fn test_mid_gray() {
        // sRGB 128 sits near L* 53.6, not 50: the transfer function is
        // not a straight line.
        let lab = to_lab(gray(128));
        assert!((lab.l - 53.6).abs() < 0.5);
        assert!(lab.a.abs() < 0.1);
        assert!(lab.b.abs() < 0.1);
    }

    #[test]
    fn test_deterministic() {
        let sample = ColorSample {
            r: 190,
            g: 120,
            b: 65,
        };
        assert_eq!(to_lab(sample), to_lab(sample));
    }

    #[test]
    fn test_lightness_stays_in_range() {
        for value in [1u8, 5, 33, 77, 129, 200, 254, 255] {
            let lab = to_lab(gray(value));
            assert!(lab.l >= 0.0 && lab.l <= 100.0, "L* out of range for {}", value);
        }
    }

    #[test]
    fn test_gray_ramp_monotonic() {
        let mut previous = to_lab(gray(10)).l;
        for value in [60u8, 110, 160, 210, 255] {
            let l = to_lab(gray(value)).l;
            assert!(l > previous, "L* not increasing at {}", value);
            previous = l;
        }
    }

    #[test]
    fn test_toast_shades_darken() {
        // Reference browns from light to dark toast
        let light = to_lab(ColorSample {
            r: 235,
            g: 175,
            b: 105,
        });
        let medium = to_lab(ColorSample {
            r: 190,
            g: 120,
            b: 65,
        });
        let dark = to_lab(ColorSample {
            r: 145,
            g: 75,
            b: 30,
        });
        assert!(light.l > medium.l);
        assert!(medium.l > dark.l);
    }

    #[test]
    fn test_delta_e() {
        let white = to_lab(WHITE);
        assert_eq!(white.delta_e(white), 0.0);
        assert!((white.delta_e(to_lab(BLACK)) - 100.0).abs() < 1.0);
    }
}
