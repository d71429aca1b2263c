#![allow(dead_code)]

use core::future::Future;
use core::pin::pin;
use core::task::{Context, Poll, Waker};

use embassy_futures::join::join;
use embassy_time::{Duration, MockDriver};
use gridkey::config::CommandKeys;
use gridkey::event::KeyEvent;
use gridkey::hid::ReportChannel;
use gridkey::input_device::InputProcessor;
use gridkey::keyboard::Keyboard;
use gridkey::layout::{default_keymap, NUM_COLS, NUM_ROWS};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

// Matrix positions of the keys the tests use, from the default layout.
pub const K_A: (u8, u8) = (4, 0);
pub const K_S: (u8, u8) = (4, 1);
pub const K_D: (u8, u8) = (4, 2);
pub const K_P: (u8, u8) = (3, 2);
pub const K_R: (u8, u8) = (2, 4);
pub const K_1: (u8, u8) = (0, 1);
pub const K_2: (u8, u8) = (0, 2);
pub const K_LSHIFT: (u8, u8) = (10, 0);
pub const K_SYSRQ: (u8, u8) = (1, 6);

/// Drive a future to completion, advancing the mock clock whenever it stalls
/// so timer-based code runs instantly.
pub fn test_block_on<F: Future>(fut: F) -> F::Output {
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(output) = fut.as_mut().poll(&mut cx) {
            return output;
        }
        MockDriver::get().advance(Duration::from_millis(1));
    }
}

pub fn create_test_keyboard(channel: &ReportChannel) -> Keyboard<'_, NUM_ROWS, NUM_COLS> {
    // Box::leak is acceptable in tests
    let keymap = Box::leak(Box::new(default_keymap()));
    Keyboard::new(keymap, channel.sender(), CommandKeys::default())
}

/// Feed a key sequence through the dispatcher and verify every emitted
/// report, in order, against `(modifier, keycodes)` pairs. Fails if any
/// report beyond the expected ones shows up.
pub fn run_key_sequence_test<const ROW: usize, const COL: usize>(
    keyboard: &mut Keyboard<'_, ROW, COL>,
    channel: &ReportChannel,
    key_sequence: &[(u8, u8, bool)],
    expected_reports: &[(u8, [u8; 6])],
) {
    test_block_on(async {
        join(
            async {
                for &(row, col, pressed) in key_sequence {
                    keyboard.process(KeyEvent::key(row, col, pressed)).await;
                }
            },
            async {
                for (index, &(modifier, keycodes)) in expected_reports.iter().enumerate() {
                    let report = channel.receive().await;
                    assert_eq!(report.modifier, modifier, "report #{index}: wrong modifier");
                    assert_eq!(report.keycodes, keycodes, "report #{index}: wrong keycodes");
                }
            },
        )
        .await;
    });
    assert!(channel.try_receive().is_err(), "received more reports than expected");
}
