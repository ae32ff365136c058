mod lab;

pub use lab::{Lab, to_lab};
use smart_leds::RGB8;

/// Raw reading from one color sensor, in sensor-native 0-255 counts.
///
/// Adapters for 16-bit sensors quantize before handing samples to the
/// control loop.
pub type ColorSample = RGB8;
