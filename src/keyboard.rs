//! Key-state aggregation and the dispatch state machine.

use crate::config::CommandKeys;
use crate::event::KeyEvent;
use crate::hid::{KeyboardReport, ReportSender};
use crate::input_device::InputProcessor;
use crate::keycode::{self, KC_NO};
use crate::keymap::KeyMap;
use crate::recorder::MacroRecorder;

/// Held-key slots in a report (6-key rollover).
pub const MAX_HELD_KEYS: usize = 6;

/// Once this many non-modifier keys are held, further key-down events are
/// suppressed to avoid ghost keys on a diode-less matrix. The count is
/// global, not per row, which mis-scans true 3-key rollovers; this matches
/// the original controller and is kept as-is.
pub const GHOST_KEY_THRESHOLD: usize = 2;

/// The currently-held non-modifier keys plus the live modifier bitmask.
///
/// This is the payload of every outgoing report and the unit the macro
/// engine snapshots. A zero slot is free; each code appears at most once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyState {
    pub modifiers: u8,
    pub keys: [u8; MAX_HELD_KEYS],
}

impl KeyState {
    pub const fn new() -> Self {
        Self {
            modifiers: 0,
            keys: [KC_NO; MAX_HELD_KEYS],
        }
    }

    /// Number of non-modifier keys currently held.
    pub fn held_count(&self) -> usize {
        self.keys.iter().filter(|&&code| code != KC_NO).count()
    }

    /// Add a held key. Duplicates are left alone; a full set drops the key
    /// silently (returns false).
    pub fn add_key(&mut self, code: u8) -> bool {
        if self.keys.contains(&code) {
            return true;
        }
        for slot in self.keys.iter_mut() {
            if *slot == KC_NO {
                *slot = code;
                return true;
            }
        }
        false
    }

    /// Remove a held key. Returns false if it was not held.
    pub fn remove_key(&mut self, code: u8) -> bool {
        for slot in self.keys.iter_mut() {
            if *slot == code {
                *slot = KC_NO;
                return true;
            }
        }
        false
    }

    /// Set the modifier bit selected by a modifier-flagged code. Idempotent.
    pub fn set_modifier(&mut self, code: u8) {
        self.modifiers |= keycode::modifier_bit(code);
    }

    /// Clear the modifier bit selected by a modifier-flagged code.
    pub fn clear_modifier(&mut self, code: u8) {
        self.modifiers &= !keycode::modifier_bit(code);
    }

    /// The HID report for this state.
    pub fn as_report(&self) -> KeyboardReport {
        KeyboardReport {
            modifier: self.modifiers,
            reserved: 0,
            leds: 0,
            keycodes: self.keys,
        }
    }
}

/// Dispatch mode. `Recording` handles keys exactly like `Idle` and
/// additionally appends every emitted snapshot to the named slot; it has no
/// stop transition of its own, only re-arming sys-req ends it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Mode {
    Idle,
    SysReqArmed,
    ProgramArmed,
    Recording(u8),
}

/// The dispatcher: translates events through the key table, runs the
/// command-mode state machine, mutates [`KeyState`] and emits reports.
pub struct Keyboard<'a, const ROW: usize, const COL: usize> {
    keymap: &'a KeyMap<ROW, COL>,
    commands: CommandKeys,
    state: KeyState,
    mode: Mode,
    recorder: MacroRecorder,
    report_sender: ReportSender<'a>,
}

impl<'a, const ROW: usize, const COL: usize> Keyboard<'a, ROW, COL> {
    pub fn new(keymap: &'a KeyMap<ROW, COL>, report_sender: ReportSender<'a>, commands: CommandKeys) -> Self {
        Self {
            keymap,
            commands,
            state: KeyState::new(),
            mode: Mode::Idle,
            recorder: MacroRecorder::new(),
            report_sender,
        }
    }

    /// Macro-engine buffers, for diagnostics and tests.
    pub fn recorder(&self) -> &MacroRecorder {
        &self.recorder
    }

    async fn send_report(&self, report: KeyboardReport) {
        self.report_sender.send(report).await;
    }

    /// Emit the current key state and feed the macro engine. Every emitted
    /// snapshot goes to the global log; while recording it also goes to the
    /// active slot.
    async fn emit(&mut self) {
        let snapshot = self.state;
        self.send_report(snapshot.as_report()).await;
        self.recorder.log(snapshot);
        if let Mode::Recording(slot) = self.mode {
            self.recorder.record(slot, snapshot);
        }
    }

    /// Replay the global log in capture order. Replayed reports bypass the
    /// dispatch pipeline entirely, so a macro can never trigger a macro.
    async fn dump_log(&self) {
        info!("dumping log ({} snapshots)", self.recorder.log_entries().len());
        for snapshot in self.recorder.log_entries() {
            self.send_report(snapshot.as_report()).await;
        }
    }

    /// Replay one sequence slot in capture order.
    async fn play_sequence(&self, slot: u8) {
        info!("playing sequence {} ({} snapshots)", slot, self.recorder.slot_entries(slot).len());
        for snapshot in self.recorder.slot_entries(slot) {
            self.send_report(snapshot.as_report()).await;
        }
    }

    /// Interpret a key-down as a command while sys-req is armed. Command
    /// keys never touch the key state and never emit their own report.
    async fn handle_command(&mut self, code: u8) {
        if code == self.commands.program {
            self.mode = Mode::ProgramArmed;
        } else if code == self.commands.dump {
            self.dump_log().await;
        } else if code == self.commands.reset {
            info!("resetting log");
            self.recorder.reset_log();
        } else if let Some(slot) = keycode::digit_slot(code) {
            self.play_sequence(slot).await;
        } else {
            debug!("unknown command key 0x{:02x}", code);
        }
    }

    async fn on_key_down(&mut self, code: u8) {
        // Ghost guard: with two keys already held, no further key-down is
        // dispatched at all, command and modifier keys included. Key-ups
        // still pass, so the count can recover.
        if self.state.held_count() >= GHOST_KEY_THRESHOLD {
            debug!("ghost guard: key-down 0x{:02x} suppressed", code);
            return;
        }

        match self.mode {
            Mode::SysReqArmed => self.handle_command(code).await,
            Mode::ProgramArmed => {
                if let Some(slot) = keycode::digit_slot(code) {
                    info!("recording sequence {}", slot);
                    self.recorder.clear_slot(slot);
                    self.mode = Mode::Recording(slot);
                } else {
                    // Any non-digit cancels slot selection; the key is consumed.
                    self.mode = Mode::Idle;
                }
            }
            Mode::Idle | Mode::Recording(_) => {
                if code == self.commands.sys_req {
                    // Arming command mode also ends any active recording.
                    self.mode = Mode::SysReqArmed;
                    return;
                }
                if keycode::is_modifier(code) {
                    self.state.set_modifier(code);
                } else if !self.state.add_key(code) {
                    debug!("held-key set full, dropping 0x{:02x}", code);
                }
                self.emit().await;
            }
        }
    }

    async fn on_key_up(&mut self, code: u8) {
        if code == self.commands.sys_req {
            // The sys-req sentinel only disarms command mode, never reports.
            if self.mode == Mode::SysReqArmed {
                self.mode = Mode::Idle;
            }
            return;
        }
        if keycode::is_modifier(code) {
            self.state.clear_modifier(code);
            self.emit().await;
        } else if self.state.remove_key(code) {
            // Releases of keys that never entered the held set (consumed
            // command keys, ghost-guarded downs) stay silent.
            self.emit().await;
        }
    }
}

impl<const ROW: usize, const COL: usize> InputProcessor for Keyboard<'_, ROW, COL> {
    async fn process(&mut self, event: KeyEvent) {
        let code = self.keymap.code_of(event.row, event.col);
        if code == KC_NO {
            return;
        }
        trace!(
            "key {} {} at ({},{})",
            self.keymap.name_of(event.row, event.col),
            if event.pressed { "down" } else { "up" },
            event.row,
            event.col
        );
        if event.pressed {
            self.on_key_down(code).await;
        } else {
            self.on_key_up(code).await;
        }
    }
}
