//! Firmware core for a scanned-matrix USB keyboard.
//!
//! The crate is a pipeline: [`matrix::Matrix`] scans row/column pins into
//! [`event::KeyEvent`]s, [`keyboard::Keyboard`] translates them through the
//! key table, applies the ghost guard and the macro/command state machine,
//! and pushes finished HID reports onto a channel that a
//! [`hid::RunnableHidWriter`] drains toward the host.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// Include the fmt module first so the logging macros are visible everywhere.
#[macro_use]
mod fmt;

pub mod config;
pub mod event;
pub mod hid;
pub mod input_device;
pub mod keyboard;
pub mod keycode;
pub mod keymap;
pub mod layout;
pub mod matrix;
pub mod recorder;
pub mod usb;

use embassy_futures::join::join;

use crate::hid::RunnableHidWriter;
use crate::input_device::{InputDevice, InputProcessor};

/// Capacity of the report channel between the dispatcher and the HID writer.
pub const REPORT_CHANNEL_SIZE: usize = 8;

/// Run the keyboard: scan, dispatch, and write reports, forever.
///
/// Scanning and dispatch are strictly sequential: the next row scan begins
/// only after the previous event is fully processed. Only the HID writer
/// runs alongside.
pub async fn run<D: InputDevice, P: InputProcessor, W: RunnableHidWriter>(
    device: &mut D,
    processor: &mut P,
    writer: &mut W,
) -> ! {
    let pipeline = async {
        loop {
            let event = device.read_event().await;
            processor.process(event).await;
        }
    };
    join(pipeline, writer.run_writer()).await;
    unreachable!("keyboard tasks never return")
}
