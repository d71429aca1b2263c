//! Build-time configuration structs.

use crate::keycode::{KC_D, KC_P, KC_PRINT_SCREEN, KC_R};

/// Logical key codes that drive the command-mode state machine.
///
/// The sys-req code arms command mode; the other three are interpreted as
/// commands while it is armed. Digits 1–9 are always slot selectors and are
/// not configurable.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandKeys {
    pub sys_req: u8,
    pub program: u8,
    pub dump: u8,
    pub reset: u8,
}

impl Default for CommandKeys {
    fn default() -> Self {
        Self {
            sys_req: KC_PRINT_SCREEN,
            program: KC_P,
            dump: KC_D,
            reset: KC_R,
        }
    }
}

/// USB device identity used by [`crate::usb::new_usb_builder`].
#[derive(Clone, Copy, Debug)]
pub struct KeyboardUsbConfig<'a> {
    pub vid: u16,
    pub pid: u16,
    pub manufacturer: &'a str,
    pub product_name: &'a str,
    pub serial_number: &'a str,
}

impl Default for KeyboardUsbConfig<'static> {
    fn default() -> Self {
        Self {
            vid: 0x4c4b,
            pid: 0x4643,
            manufacturer: "gridkey",
            product_name: "gridkey keyboard",
            serial_number: "0",
        }
    }
}
