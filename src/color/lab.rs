//! sRGB to CIE L*a*b* conversion
//!
//! Fixed-parameter analytic transform: the official sRGB transfer function
//! (IEC 61966-2-1, not the gamma-2.2 approximation), the D65 RGB→XYZ matrix
//! and the CIE 1931 2° observer. The unit-scaled white point convention is
//! used throughout the crate.

use super::ColorSample;

const D65_WHITE_POINT: [f32; 3] = [0.95047, 1.0, 1.08883];
const EPSILON: f32 = 0.008_856_452; // 216/24389
const KAPPA: f32 = 903.3; // 24389/27

/// A color in CIE L*a*b* space.
///
/// `l` is perceptual lightness (0 = black, 100 = white); `a` and `b` are
/// the chromatic axes. Values are immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Lab {
    /// CIE76 color difference to another value.
    pub fn delta_e(self, other: Lab) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        libm::sqrtf(dl * dl + da * da + db * db)
    }
}

/// Convert one sRGB channel in [0, 1] to linear light.
fn srgb_to_linear(channel: f32) -> f32 {
    if channel <= 0.04045 {
        channel / 12.92
    } else {
        libm::powf((channel + 0.055) / 1.055, 2.4)
    }
}

fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        libm::cbrtf(t)
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// Convert a raw sensor sample to CIE L*a*b*.
///
/// Pure and deterministic. An all-zero sample (sensor saturated dark, no
/// light reaching the diode) maps to `Lab { 0, 0, 0 }` directly.
pub fn to_lab(sample: ColorSample) -> Lab {
    if sample.r == 0 && sample.g == 0 && sample.b == 0 {
        return Lab {
            l: 0.0,
            a: 0.0,
            b: 0.0,
        };
    }

    let r = srgb_to_linear(f32::from(sample.r) / 255.0);
    let g = srgb_to_linear(f32::from(sample.g) / 255.0);
    let b = srgb_to_linear(f32::from(sample.b) / 255.0);

    let x = 0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b;
    let y = 0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b;
    let z = 0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b;

    let fx = lab_f(x / D65_WHITE_POINT[0]);
    let fy = lab_f(y / D65_WHITE_POINT[1]);
    let fz = lab_f(z / D65_WHITE_POINT[2]);

    Lab {
        l: (116.0 * fy - 16.0).clamp(0.0, 100.0),
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}
