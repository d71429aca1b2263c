//! Logical key codes.
//!
//! A logical key code is a single byte. The high bit marks the value as a
//! *modifier selector*: the low 7 bits index [`MODIFIER_BITS`] instead of
//! naming a key. Value `0` is the "no key here" sentinel. Callers may always
//! test the high bit before consulting the modifier table.
//!
//! Non-modifier values use the USB HID keyboard usage IDs directly, so a
//! held code can be copied into an HID report unchanged.

/// High bit marking a code as a modifier selector.
pub const MODIFIER_FLAG: u8 = 0x80;

/// The "no key at this position" sentinel.
pub const KC_NO: u8 = 0x00;

/// USB HID modifier byte bits, indexed by the low 7 bits of a
/// modifier-flagged code: left-shift, right-shift, left-ctrl, left-alt.
pub const MODIFIER_BITS: [u8; 4] = [0x02, 0x20, 0x01, 0x04];

/// Build a modifier-flagged code from a [`MODIFIER_BITS`] index.
pub const fn modifier(index: u8) -> u8 {
    MODIFIER_FLAG | index
}

/// True if the code selects a modifier rather than a key.
pub const fn is_modifier(code: u8) -> bool {
    code & MODIFIER_FLAG != 0
}

/// The USB modifier bit for a modifier-flagged code.
///
/// Feeding a non-modifier code or an out-of-range selector is a programming
/// error: the selector space is fixed by the keymap at build time.
pub const fn modifier_bit(code: u8) -> u8 {
    MODIFIER_BITS[(code & !MODIFIER_FLAG) as usize]
}

/// Map a digit key code (`1`..`9`) to its sequence slot number.
pub const fn digit_slot(code: u8) -> Option<u8> {
    if code >= KC_1 && code <= KC_9 {
        Some(code - KC_1 + 1)
    } else {
        None
    }
}

pub const KC_A: u8 = 0x04;
pub const KC_B: u8 = 0x05;
pub const KC_C: u8 = 0x06;
pub const KC_D: u8 = 0x07;
pub const KC_E: u8 = 0x08;
pub const KC_F: u8 = 0x09;
pub const KC_G: u8 = 0x0A;
pub const KC_H: u8 = 0x0B;
pub const KC_I: u8 = 0x0C;
pub const KC_J: u8 = 0x0D;
pub const KC_K: u8 = 0x0E;
pub const KC_L: u8 = 0x0F;
pub const KC_M: u8 = 0x10;
pub const KC_N: u8 = 0x11;
pub const KC_O: u8 = 0x12;
pub const KC_P: u8 = 0x13;
pub const KC_Q: u8 = 0x14;
pub const KC_R: u8 = 0x15;
pub const KC_S: u8 = 0x16;
pub const KC_T: u8 = 0x17;
pub const KC_U: u8 = 0x18;
pub const KC_V: u8 = 0x19;
pub const KC_W: u8 = 0x1A;
pub const KC_X: u8 = 0x1B;
pub const KC_Y: u8 = 0x1C;
pub const KC_Z: u8 = 0x1D;
pub const KC_1: u8 = 0x1E;
pub const KC_2: u8 = 0x1F;
pub const KC_3: u8 = 0x20;
pub const KC_4: u8 = 0x21;
pub const KC_5: u8 = 0x22;
pub const KC_6: u8 = 0x23;
pub const KC_7: u8 = 0x24;
pub const KC_8: u8 = 0x25;
pub const KC_9: u8 = 0x26;
pub const KC_0: u8 = 0x27;
pub const KC_ENTER: u8 = 0x28;
pub const KC_ESCAPE: u8 = 0x29;
pub const KC_BACKSPACE: u8 = 0x2A;
pub const KC_TAB: u8 = 0x2B;
pub const KC_SPACE: u8 = 0x2C;
pub const KC_MINUS: u8 = 0x2D;
pub const KC_EQUAL: u8 = 0x2E;
pub const KC_LEFT_BRACKET: u8 = 0x2F;
pub const KC_RIGHT_BRACKET: u8 = 0x30;
pub const KC_BACKSLASH: u8 = 0x31;
pub const KC_SEMICOLON: u8 = 0x33;
pub const KC_QUOTE: u8 = 0x34;
pub const KC_GRAVE: u8 = 0x35;
pub const KC_COMMA: u8 = 0x36;
pub const KC_DOT: u8 = 0x37;
pub const KC_SLASH: u8 = 0x38;
pub const KC_F1: u8 = 0x3A;
pub const KC_F2: u8 = 0x3B;
pub const KC_F3: u8 = 0x3C;
pub const KC_F4: u8 = 0x3D;
pub const KC_F5: u8 = 0x3E;
pub const KC_F6: u8 = 0x3F;
pub const KC_F7: u8 = 0x40;
pub const KC_F8: u8 = 0x41;
pub const KC_F9: u8 = 0x42;
pub const KC_F10: u8 = 0x43;
pub const KC_F11: u8 = 0x44;
pub const KC_F12: u8 = 0x45;
/// PrintScreen doubles as the system-request key on the reference layout.
pub const KC_PRINT_SCREEN: u8 = 0x46;
pub const KC_HOME: u8 = 0x4A;
pub const KC_PAGE_UP: u8 = 0x4B;
pub const KC_DELETE: u8 = 0x4C;
pub const KC_END: u8 = 0x4D;
pub const KC_PAGE_DOWN: u8 = 0x4E;
pub const KC_RIGHT: u8 = 0x4F;
pub const KC_LEFT: u8 = 0x50;
pub const KC_DOWN: u8 = 0x51;
pub const KC_UP: u8 = 0x52;

/// Modifier-flagged codes for the four physical modifiers.
pub const KM_LSHIFT: u8 = modifier(0);
pub const KM_RSHIFT: u8 = modifier(1);
pub const KM_LCTRL: u8 = modifier(2);
pub const KM_LALT: u8 = modifier(3);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn modifier_flag_encoding() {
        assert!(is_modifier(KM_LSHIFT));
        assert!(is_modifier(KM_LALT));
        assert!(!is_modifier(KC_A));
        assert!(!is_modifier(KC_NO));
        assert_eq!(modifier_bit(KM_LSHIFT), 0x02);
        assert_eq!(modifier_bit(KM_RSHIFT), 0x20);
        assert_eq!(modifier_bit(KM_LCTRL), 0x01);
        assert_eq!(modifier_bit(KM_LALT), 0x04);
    }

    #[test]
    fn digit_slots() {
        assert_eq!(digit_slot(KC_1), Some(1));
        assert_eq!(digit_slot(KC_9), Some(9));
        assert_eq!(digit_slot(KC_0), None);
        assert_eq!(digit_slot(KC_A), None);
        assert_eq!(digit_slot(KM_LSHIFT), None);
    }
}
