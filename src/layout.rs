//! Reference layout: a 12×8 matrix wiring of a compact 60%-style board.
//!
//! Each physical keyboard row is split across two electrical rows so the
//! column bus stays within 8 bits. Anchors relied on elsewhere: `A` at
//! (4, 0), left shift at (10, 0), sys-req (PrintScreen) at (1, 6).

use crate::keycode::*;
use crate::keymap::{KEY_NONE, KeyDef, KeyMap};

/// Electrical rows in the reference matrix.
pub const NUM_ROWS: usize = 12;
/// Columns in the reference matrix.
pub const NUM_COLS: usize = 8;

const fn k(code: u8, name: &'static str) -> KeyDef {
    KeyDef { code, name }
}

const ___: KeyDef = KEY_NONE;

/// The reference key table.
#[rustfmt::skip]
pub const fn default_keymap() -> KeyMap<NUM_ROWS, NUM_COLS> {
    KeyMap::new([
        [k(KC_GRAVE, "`"), k(KC_1, "1"), k(KC_2, "2"), k(KC_3, "3"), k(KC_4, "4"), k(KC_5, "5"), k(KC_6, "6"), k(KC_7, "7")],
        [k(KC_8, "8"), k(KC_9, "9"), k(KC_0, "0"), k(KC_MINUS, "-"), k(KC_EQUAL, "="), k(KC_BACKSPACE, "BKSP"), k(KC_PRINT_SCREEN, "SYSRQ"), k(KC_ESCAPE, "ESC")],
        [k(KC_TAB, "TAB"), k(KC_Q, "Q"), k(KC_W, "W"), k(KC_E, "E"), k(KC_R, "R"), k(KC_T, "T"), k(KC_Y, "Y"), k(KC_U, "U")],
        [k(KC_I, "I"), k(KC_O, "O"), k(KC_P, "P"), k(KC_LEFT_BRACKET, "["), k(KC_RIGHT_BRACKET, "]"), k(KC_BACKSLASH, "\\"), k(KC_DELETE, "DEL"), ___],
        [k(KC_A, "A"), k(KC_S, "S"), k(KC_D, "D"), k(KC_F, "F"), k(KC_G, "G"), k(KC_H, "H"), k(KC_J, "J"), k(KC_K, "K")],
        [k(KC_L, "L"), k(KC_SEMICOLON, ";"), k(KC_QUOTE, "'"), k(KC_ENTER, "ENTER"), ___, ___, ___, ___],
        [k(KC_Z, "Z"), k(KC_X, "X"), k(KC_C, "C"), k(KC_V, "V"), k(KC_B, "B"), k(KC_N, "N"), k(KC_M, "M"), k(KC_COMMA, ",")],
        [k(KC_DOT, "."), k(KC_SLASH, "/"), k(KC_UP, "UP"), ___, ___, ___, ___, ___],
        [k(KC_SPACE, "SPACE"), k(KC_LEFT, "LEFT"), k(KC_DOWN, "DOWN"), k(KC_RIGHT, "RIGHT"), ___, ___, ___, ___],
        [k(KC_F1, "F1"), k(KC_F2, "F2"), k(KC_F3, "F3"), k(KC_F4, "F4"), k(KC_F5, "F5"), k(KC_F6, "F6"), k(KC_F7, "F7"), k(KC_F8, "F8")],
        [k(KM_LSHIFT, "LSHIFT"), k(KM_RSHIFT, "RSHIFT"), k(KM_LCTRL, "LCTRL"), k(KM_LALT, "LALT"), ___, ___, ___, ___],
        [k(KC_F9, "F9"), k(KC_F10, "F10"), k(KC_F11, "F11"), k(KC_F12, "F12"), k(KC_HOME, "HOME"), k(KC_END, "END"), k(KC_PAGE_UP, "PGUP"), k(KC_PAGE_DOWN, "PGDN")],
    ])
}
