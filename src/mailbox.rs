//! Latest-value mailbox for cross-task handoff
//!
//! A single-slot cell built on `critical-section`, safe to publish into
//! from another task or interrupt. Writers replace any pending value and
//! the reader drains the slot between control cycles, so a value is either
//! consumed whole or superseded, never observed torn and never applied
//! mid-cycle.

use core::cell::RefCell;

use critical_section::Mutex;

/// A single-value, thread-safe slot.
///
/// Unlike a queue, stale values are not worth keeping: the newest
/// published value wins.
pub struct Mailbox<T> {
    inner: Mutex<RefCell<Option<T>>>,
}

impl<T> Mailbox<T> {
    /// Create a new empty mailbox.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Get a sender handle for this mailbox.
    ///
    /// Multiple senders can coexist; the latest publish wins.
    pub const fn sender(&self) -> Sender<'_, T> {
        Sender { mailbox: self }
    }

    /// Get a receiver handle for this mailbox.
    pub const fn receiver(&self) -> Receiver<'_, T> {
        Receiver { mailbox: self }
    }

    /// Publish a value, replacing any pending one.
    ///
    /// Returns the value that was superseded, if any.
    pub fn publish(&self, value: T) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().replace(value))
    }

    /// Take the pending value, leaving the slot empty.
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().take())
    }
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`Mailbox`].
///
/// This is a lightweight reference that can be cloned and passed around.
#[derive(Clone, Copy)]
pub struct Sender<'a, T> {
    mailbox: &'a Mailbox<T>,
}

impl<T> Sender<'_, T> {
    /// Publish a value, replacing any pending one.
    pub fn publish(&self, value: T) -> Option<T> {
        self.mailbox.publish(value)
    }
}

/// A receiver handle for a [`Mailbox`].
///
/// This is a lightweight reference that can be cloned and passed around.
#[derive(Clone, Copy)]
pub struct Receiver<'a, T> {
    mailbox: &'a Mailbox<T>,
}

impl<T> Receiver<'_, T> {
    /// Take the pending value, leaving the slot empty.
    pub fn take(&self) -> Option<T> {
        self.mailbox.take()
    }
}
