mod common;

use common::test_block_on;
use embedded_hal_mock::eh1::digital::{Mock, State, Transaction};
use gridkey::event::KeyEvent;
use gridkey::input_device::InputDevice;
use gridkey::matrix::Matrix;

/// One scan pass over a single-row matrix: drive the row low, then release it.
fn row_pass() -> [Transaction; 2] {
    [Transaction::set(State::Low), Transaction::set(State::High)]
}

// A 1-row, 2-column matrix scripted through four scan passes:
//   pass 1: idle            -> no events
//   pass 2: both pressed    -> down(0,0), down(0,1)
//   pass 3: col 0 released  -> up(0,0)
//   pass 4: col 0 re-pressed, col 1 released -> up(0,1) before down(0,0)
#[test]
fn scan_emits_edges_ups_before_downs() {
    // Inputs are active low: High = released, Low = pressed.
    let col0 = Mock::new(&[
        Transaction::get(State::High),
        Transaction::get(State::Low),
        Transaction::get(State::High),
        Transaction::get(State::Low),
    ]);
    let col1 = Mock::new(&[
        Transaction::get(State::High),
        Transaction::get(State::Low),
        Transaction::get(State::Low),
        Transaction::get(State::High),
    ]);
    let row0 = Mock::new(&row_pass().into_iter().cycle().take(8).collect::<Vec<_>>());

    let mut col0_check = col0.clone();
    let mut col1_check = col1.clone();
    let mut row0_check = row0.clone();

    let mut matrix: Matrix<_, _, 2, 1> = Matrix::new([col0, col1], [row0]);

    let events: [KeyEvent; 5] = test_block_on(async {
        [
            matrix.read_event().await,
            matrix.read_event().await,
            matrix.read_event().await,
            matrix.read_event().await,
            matrix.read_event().await,
        ]
    });

    assert_eq!(
        events,
        [
            KeyEvent::key(0, 0, true),
            KeyEvent::key(0, 1, true),
            KeyEvent::key(0, 0, false),
            // Pass 4 changes both columns; the release is handed out first.
            KeyEvent::key(0, 1, false),
            KeyEvent::key(0, 0, true),
        ]
    );

    col0_check.done();
    col1_check.done();
    row0_check.done();
}

// Holding a chord steady across passes produces no repeated edges.
#[test]
fn stable_state_is_silent() {
    let col0 = Mock::new(&[
        Transaction::get(State::Low),
        Transaction::get(State::Low),
        Transaction::get(State::Low),
        Transaction::get(State::High),
    ]);
    let row0 = Mock::new(&row_pass().into_iter().cycle().take(8).collect::<Vec<_>>());

    let mut col0_check = col0.clone();
    let mut row0_check = row0.clone();

    let mut matrix: Matrix<_, _, 1, 1> = Matrix::new([col0], [row0]);

    let (first, second) = test_block_on(async { (matrix.read_event().await, matrix.read_event().await) });

    // Passes 2 and 3 repeat the held state and are skipped entirely.
    assert_eq!(first, KeyEvent::key(0, 0, true));
    assert_eq!(second, KeyEvent::key(0, 0, false));

    col0_check.done();
    row0_check.done();
}
