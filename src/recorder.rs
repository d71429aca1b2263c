//! Macro engine buffers: the global snapshot log and the nine sequence slots.
//!
//! All buffers saturate silently. A full buffer keeps its contents, drops the
//! new snapshot, and counts the drop; live reporting is never affected.

use heapless::Vec;

use crate::keyboard::KeyState;

/// Number of recordable sequence slots, selected by digits 1-9.
pub const NUM_SEQUENCES: usize = 9;
/// Snapshots one sequence slot can hold.
pub const SEQUENCE_CAPACITY: usize = 10;
/// Snapshots the global log can hold.
pub const LOG_CAPACITY: usize = 100;

/// Snapshot storage for the macro engine.
///
/// Slots are addressed by their digit value (1-9). An out-of-range slot is a
/// no-op for writes and an empty slice for reads; the dispatcher only passes
/// validated digits, so that path is never hot.
pub struct MacroRecorder {
    log: Vec<KeyState, LOG_CAPACITY>,
    slots: [Vec<KeyState, SEQUENCE_CAPACITY>; NUM_SEQUENCES],
    dropped_log: u32,
    dropped_slots: [u32; NUM_SEQUENCES],
}

impl Default for MacroRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MacroRecorder {
    pub const fn new() -> Self {
        Self {
            log: Vec::new(),
            slots: [const { Vec::new() }; NUM_SEQUENCES],
            dropped_log: 0,
            dropped_slots: [0; NUM_SEQUENCES],
        }
    }

    fn slot_index(slot: u8) -> Option<usize> {
        if (1..=NUM_SEQUENCES as u8).contains(&slot) {
            Some(slot as usize - 1)
        } else {
            None
        }
    }

    /// Append a snapshot to the global log.
    pub fn log(&mut self, snapshot: KeyState) {
        if self.log.push(snapshot).is_err() {
            self.dropped_log = self.dropped_log.saturating_add(1);
        }
    }

    /// Append a snapshot to one sequence slot.
    pub fn record(&mut self, slot: u8, snapshot: KeyState) {
        if let Some(index) = Self::slot_index(slot) {
            if self.slots[index].push(snapshot).is_err() {
                self.dropped_slots[index] = self.dropped_slots[index].saturating_add(1);
            }
        }
    }

    /// Empty one sequence slot before a fresh recording.
    pub fn clear_slot(&mut self, slot: u8) {
        if let Some(index) = Self::slot_index(slot) {
            self.slots[index].clear();
            self.dropped_slots[index] = 0;
        }
    }

    /// Empty the global log. Sequence slots are untouched.
    pub fn reset_log(&mut self) {
        self.log.clear();
        self.dropped_log = 0;
    }

    /// Global log contents in capture order.
    pub fn log_entries(&self) -> &[KeyState] {
        &self.log
    }

    /// One sequence slot's contents in capture order.
    pub fn slot_entries(&self, slot: u8) -> &[KeyState] {
        match Self::slot_index(slot) {
            Some(index) => &self.slots[index],
            None => &[],
        }
    }

    /// Snapshots dropped from the global log since the last reset.
    pub fn dropped_log(&self) -> u32 {
        self.dropped_log
    }

    /// Snapshots dropped from one slot since its last re-arm.
    pub fn dropped_slot(&self, slot: u8) -> u32 {
        match Self::slot_index(slot) {
            Some(index) => self.dropped_slots[index],
            None => 0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::keycode::KC_A;

    fn snapshot(code: u8) -> KeyState {
        let mut state = KeyState::new();
        state.add_key(code);
        state
    }

    #[test]
    fn log_saturates_and_counts_drops() {
        let mut recorder = MacroRecorder::new();
        for i in 0..LOG_CAPACITY + 7 {
            recorder.log(snapshot(KC_A + (i % 4) as u8));
        }
        assert_eq!(recorder.log_entries().len(), LOG_CAPACITY);
        assert_eq!(recorder.dropped_log(), 7);
        recorder.reset_log();
        assert!(recorder.log_entries().is_empty());
        assert_eq!(recorder.dropped_log(), 0);
    }

    #[test]
    fn slot_saturates_and_rearm_clears() {
        let mut recorder = MacroRecorder::new();
        for _ in 0..SEQUENCE_CAPACITY + 3 {
            recorder.record(3, snapshot(KC_A));
        }
        assert_eq!(recorder.slot_entries(3).len(), SEQUENCE_CAPACITY);
        assert_eq!(recorder.dropped_slot(3), 3);
        // Other slots are independent.
        assert!(recorder.slot_entries(1).is_empty());
        recorder.clear_slot(3);
        assert!(recorder.slot_entries(3).is_empty());
        assert_eq!(recorder.dropped_slot(3), 0);
    }

    #[test]
    fn out_of_range_slots_are_inert() {
        let mut recorder = MacroRecorder::new();
        recorder.record(0, snapshot(KC_A));
        recorder.record(10, snapshot(KC_A));
        assert!(recorder.slot_entries(0).is_empty());
        assert!(recorder.slot_entries(10).is_empty());
        assert_eq!(recorder.dropped_slot(0), 0);
    }
}
