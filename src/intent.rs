//! Session intents from the user interface
//!
//! Handles validation of raw UI input before it reaches the session.
//! The UI collaborator delivers a bare shade index; anything outside the
//! shade table is discarded here and the previous target stays active.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::mailbox::{Mailbox, Receiver, Sender};
use crate::shade::ShadeTarget;

/// Request to change the running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionIntent {
    /// Start (or restart) toasting toward the shade with this raw id
    SelectShade(u8),
    /// Stop heating and clear the session without signalling ready
    Abort,
}

/// Validated command for the session to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    StartRun(ShadeTarget),
    Abort,
}

/// Type alias for the intent mailbox
pub type IntentMailbox = Mailbox<SessionIntent>;

/// Type alias for intent sender
pub type IntentSender<'a> = Sender<'a, SessionIntent>;

/// Type alias for intent receiver
pub type IntentReceiver<'a> = Receiver<'a, SessionIntent>;

/// Validates pending intents and hands the session a command.
pub struct IntentProcessor<'a> {
    intents: IntentReceiver<'a>,
}

impl<'a> IntentProcessor<'a> {
    /// Create a new intent processor
    pub const fn new(intents: IntentReceiver<'a>) -> Self {
        Self { intents }
    }

    /// Take the pending intent, if any (non-blocking).
    ///
    /// An out-of-range shade id is dropped here; the session never sees it
    /// and keeps its previous target.
    pub fn take_pending(&mut self) -> Option<SessionCommand> {
        match self.intents.take()? {
            SessionIntent::SelectShade(raw) => match ShadeTarget::from_raw(raw) {
                Some(target) => Some(SessionCommand::StartRun(target)),
                None => {
                    #[cfg(feature = "esp32-log")]
                    println!("[IntentProcessor.take_pending] invalid shade id {}", raw);
                    None
                }
            },
            SessionIntent::Abort => Some(SessionCommand::Abort),
        }
    }
}
