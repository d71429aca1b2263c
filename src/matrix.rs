//! Matrix scanning and edge detection.
//!
//! The scanner drives one row output low at a time, waits for the bus to
//! settle, samples the column inputs (active low, inverted into an
//! active-high mask) and releases the row before moving on. Edges are
//! derived by diffing the fresh column mask against the previous scan of the
//! same row; for each row scan all key-up events are emitted before any
//! key-down event, each group in increasing column order.
//!
//! Returning rows to high impedance between scans is the pin
//! configuration's concern (open-drain outputs); this module only toggles
//! the logic level.

use embassy_time::Timer;
use embedded_hal::digital::{InputPin, OutputPin};
use heapless::Deque;

use crate::event::KeyEvent;
use crate::input_device::InputDevice;

/// Bus settle time after selecting or releasing a row, in microseconds.
pub const SETTLE_TIME_US: u64 = 30;

/// Key-down edges: bits newly set in `current`.
pub const fn key_down_mask(current: u8, previous: u8) -> u8 {
    current & !previous
}

/// Key-up edges: bits newly cleared in `current`.
pub const fn key_up_mask(current: u8, previous: u8) -> u8 {
    previous & !current
}

/// Row/column scanner over HAL pins.
///
/// `INPUT_PIN_NUM` columns (at most 8, the column mask is a byte) and
/// `OUTPUT_PIN_NUM` rows. Rows are scanned strictly sequentially, resuming
/// from the saved scan position between events.
pub struct Matrix<In: InputPin, Out: OutputPin, const INPUT_PIN_NUM: usize, const OUTPUT_PIN_NUM: usize> {
    /// Column input pins, pulled up, active low.
    input_pins: [In; INPUT_PIN_NUM],
    /// Row drive pins, active low.
    output_pins: [Out; OUTPUT_PIN_NUM],
    /// Column mask of the previous scan, per row. Exists only to derive edges.
    prev_masks: [u8; OUTPUT_PIN_NUM],
    /// Next row to scan.
    scan_pos: usize,
    /// Edges from the current row scan not yet handed out.
    pending: Deque<KeyEvent, 16>,
}

impl<In: InputPin, Out: OutputPin, const INPUT_PIN_NUM: usize, const OUTPUT_PIN_NUM: usize>
    Matrix<In, Out, INPUT_PIN_NUM, OUTPUT_PIN_NUM>
{
    /// Create a matrix from column input pins and row output pins.
    pub fn new(input_pins: [In; INPUT_PIN_NUM], output_pins: [Out; OUTPUT_PIN_NUM]) -> Self {
        Self {
            input_pins,
            output_pins,
            prev_masks: [0; OUTPUT_PIN_NUM],
            scan_pos: 0,
            pending: Deque::new(),
        }
    }

    /// Drive the given row active (low) and let the bus settle.
    async fn select_row(&mut self, row: usize) {
        if let Some(out_pin) = self.output_pins.get_mut(row) {
            out_pin.set_low().ok();
        }
        Timer::after_micros(SETTLE_TIME_US).await;
    }

    /// Release all rows and let the bus settle.
    async fn unselect_rows(&mut self) {
        for out_pin in self.output_pins.iter_mut() {
            out_pin.set_high().ok();
        }
        Timer::after_micros(SETTLE_TIME_US).await;
    }

    /// Sample the column bus into an active-high mask (closed switch → 1).
    fn read_columns(&mut self) -> u8 {
        let mut mask = 0;
        for (col, in_pin) in self.input_pins.iter_mut().enumerate() {
            if in_pin.is_low().ok().unwrap_or_default() {
                mask |= 1 << col;
            }
        }
        mask
    }

    /// Scan one row: select → settle → read → unselect → settle.
    async fn scan_row(&mut self, row: usize) -> u8 {
        self.select_row(row).await;
        let current = self.read_columns();
        self.unselect_rows().await;
        current
    }
}

impl<In: InputPin, Out: OutputPin, const INPUT_PIN_NUM: usize, const OUTPUT_PIN_NUM: usize> InputDevice
    for Matrix<In, Out, INPUT_PIN_NUM, OUTPUT_PIN_NUM>
{
    async fn read_event(&mut self) -> KeyEvent {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return event;
            }

            let row = self.scan_pos;
            self.scan_pos = (row + 1) % OUTPUT_PIN_NUM;

            let current = self.scan_row(row).await;
            let previous = self.prev_masks[row];
            if current == previous {
                continue;
            }
            self.prev_masks[row] = current;

            // Ups strictly before downs within one row scan.
            let ups = key_up_mask(current, previous);
            let downs = key_down_mask(current, previous);
            for col in 0..INPUT_PIN_NUM {
                if ups & (1 << col) != 0 {
                    self.pending.push_back(KeyEvent::key(row as u8, col as u8, false)).ok();
                }
            }
            for col in 0..INPUT_PIN_NUM {
                if downs & (1 << col) != 0 {
                    self.pending.push_back(KeyEvent::key(row as u8, col as u8, true)).ok();
                }
            }
        }
    }
}
