//! The seam between the scanner and the dispatcher.
//!
//! The matrix is an [`InputDevice`]: it produces raw [`KeyEvent`]s. The
//! keyboard is an [`InputProcessor`]: it consumes events and emits finished
//! reports. [`crate::run`] drives the pair strictly sequentially.

use crate::event::KeyEvent;

/// A source of key events.
pub trait InputDevice {
    /// Wait for and return the next key transition.
    async fn read_event(&mut self) -> KeyEvent;
}

/// A consumer of key events.
///
/// Processing one event may emit zero, one, or (for macro replays) many
/// reports before it returns.
pub trait InputProcessor {
    /// Process one key transition.
    async fn process(&mut self, event: KeyEvent);
}
