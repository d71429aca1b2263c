//! The code table: immutable (row, col) → logical key code lookup.

use crate::keycode::KC_NO;

/// One matrix position: the logical key code paired with a display name for
/// the debug/trace channel.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyDef {
    pub code: u8,
    pub name: &'static str,
}

/// An unmapped matrix position.
pub const KEY_NONE: KeyDef = KeyDef {
    code: KC_NO,
    name: "",
};

/// Immutable key table covering the same coordinate space as the scanner.
///
/// The geometry is fixed at build time; an out-of-range (row, col) is a
/// programming error, not a recoverable condition.
pub struct KeyMap<const ROW: usize, const COL: usize> {
    keys: [[KeyDef; COL]; ROW],
}

impl<const ROW: usize, const COL: usize> KeyMap<ROW, COL> {
    pub const fn new(keys: [[KeyDef; COL]; ROW]) -> Self {
        Self { keys }
    }

    /// Logical key code at (row, col). `0` means no key is wired there.
    pub fn code_of(&self, row: u8, col: u8) -> u8 {
        self.keys[row as usize][col as usize].code
    }

    /// Display name at (row, col), for the trace channel only.
    pub fn name_of(&self, row: u8, col: u8) -> &'static str {
        self.keys[row as usize][col as usize].name
    }
}
