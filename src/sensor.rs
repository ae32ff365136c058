//! Sensor acquisition and aggregation
//!
//! Multiple color sensors share one multiplexed bus; a channel must be
//! selected before it is read, and the select-read pair is one
//! non-interleaved unit. Readings that fail or look like bus noise are
//! excluded from the cycle mean rather than zero-filled: a zero substitute
//! would drag the average down and trigger a false "done".

#[cfg(feature = "esp32-log")]
use esp_println::println;

use heapless::Vec;

use crate::color::{ColorSample, to_lab};

/// Error for a single channel acquisition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorError {
    /// Channel select on the multiplexer failed
    SelectFailed,
    /// Failed to read from the sensor
    ReadFailed,
    /// Sensor did not answer within the per-read deadline
    Timeout,
    /// Sample matched a known bus artifact
    Implausible,
}

/// Every configured sensor failed this cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoValidSensors;

/// Combined lightness estimate for one control cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AggregateReading {
    /// Mean L* over the sensors that answered
    pub mean_l: f32,
    /// How many sensors contributed to the mean
    pub valid_count: u8,
}

/// Multiplexed color sensor bus
///
/// Implement this trait to support different acquisition hardware.
/// Implementations must bound each read with a timeout and report stuck
/// hardware as [`SensorError::Timeout`]; a read is never allowed to stall
/// the control cycle.
pub trait SensorBus {
    /// Route the shared bus to one sensor channel.
    fn select(&mut self, channel: u8) -> Result<(), SensorError>;

    /// Read the currently selected sensor.
    fn read(&mut self) -> Result<ColorSample, SensorError>;
}

/// Reads every configured channel each cycle and combines the results.
///
/// Owns the bus exclusively, so select-then-read pairs cannot interleave.
pub struct SensorAggregator<B, const SENSORS: usize> {
    bus: B,
}

impl<B: SensorBus, const SENSORS: usize> SensorAggregator<B, SENSORS> {
    pub const fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Sample every channel in fixed order and average the valid ones.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn sample_all(&mut self) -> Result<AggregateReading, NoValidSensors> {
        let mut lightness: Vec<f32, SENSORS> = Vec::new();

        for channel in 0..SENSORS as u8 {
            match self.read_channel(channel) {
                Ok(sample) => {
                    let _ = lightness.push(to_lab(sample).l);
                }
                Err(_error) => {
                    #[cfg(feature = "esp32-log")]
                    println!(
                        "[SensorAggregator.sample_all] channel {} dropped: {:?}",
                        channel, _error
                    );
                }
            }
        }

        if lightness.is_empty() {
            return Err(NoValidSensors);
        }

        let sum: f32 = lightness.iter().sum();
        Ok(AggregateReading {
            mean_l: sum / lightness.len() as f32,
            valid_count: lightness.len() as u8,
        })
    }

    /// Get a reference to the underlying bus.
    pub const fn bus(&self) -> &B {
        &self.bus
    }

    /// Get a mutable reference to the underlying bus.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    fn read_channel(&mut self, channel: u8) -> Result<ColorSample, SensorError> {
        self.bus.select(channel)?;
        let sample = self.bus.read()?;
        if is_bus_artifact(sample) {
            return Err(SensorError::Implausible);
        }
        Ok(sample)
    }
}

/// An absent or wedged I2C device reads back as all-ones.
fn is_bus_artifact(sample: ColorSample) -> bool {
    sample.r == u8::MAX && sample.g == u8::MAX && sample.b == u8::MAX
}
