#![no_std]

pub mod color;
pub mod intent;
pub mod mailbox;
pub mod model;
pub mod phase;
pub mod power;
pub mod scheduler;
pub mod sensor;
pub mod session;
pub mod shade;

pub use intent::{
    IntentMailbox, IntentProcessor, IntentReceiver, IntentSender, SessionIntent,
};
pub use model::{BrowningModel, BrowningModelConfig};
pub use phase::{BrowningPhase, PhaseTracker, PhaseTrackerConfig};
pub use power::{PowerController, PowerLevel};
pub use scheduler::{CycleResult, CycleScheduler, DEFAULT_CYCLE_DURATION};
pub use sensor::{AggregateReading, NoValidSensors, SensorAggregator, SensorBus, SensorError};
pub use session::{CycleOutput, SessionConfig, SessionStatus, ToastSession};
pub use shade::{SHADE_COUNT, ShadeTarget};

pub use color::{ColorSample, Lab, to_lab};
pub use embassy_time::{Duration, Instant};

/// Abstract heater driver trait
///
/// Implement this trait to support different actuation hardware.
/// The control loop is generic over this trait.
pub trait HeaterDriver {
    /// Apply one duty preset uniformly to the heating elements.
    ///
    /// Writes are fire-and-forget and must be idempotent: reapplying the
    /// level that is already active is a no-op in effect.
    fn set_power(&mut self, level: PowerLevel);

    /// Drive the toast-ready line.
    fn set_ready(&mut self, ready: bool);
}
