//! Compile-time pad configuration.
//!
//! Edit this file to change the timing or the key bindings, then reflash.
//! Gestures left out of a button's table do nothing.

use pad_core::{ActionSpec, Combo, Gesture, GestureConfig, Keycode, TimingConfig};

/// Number of buttons wired to the board (see the pin table in the crate docs).
pub const BUTTON_COUNT: usize = 4;

/// Button sampling period.
pub const POLL_INTERVAL_MS: u64 = 10;

pub const DOUBLE_PRESS_WINDOW_MS: u64 = 300;
pub const LONG_PRESS_THRESHOLD_MS: u64 = 500;

/// Gesture timing, rejected at compile time if either value is zero.
pub const TIMING: TimingConfig =
    match TimingConfig::from_millis(DOUBLE_PRESS_WINDOW_MS, LONG_PRESS_THRESHOLD_MS) {
        Ok(timing) => timing,
        Err(_) => panic!("gesture timing values must be positive"),
    };

/// Fired gestures queued between the poll task and the action task.
pub const GESTURE_QUEUE_DEPTH: usize = 16;

const CTRL: Keycode = Keycode::CONTROL;
const SHIFT: Keycode = Keycode::SHIFT;

const TOGGLE_TERMINAL: Combo = Combo::new(&[CTRL, Keycode::GRAVE_ACCENT]);
const NEW_TERMINAL: Combo = Combo::new(&[CTRL, SHIFT, Keycode::GRAVE_ACCENT]);
const COPY: Combo = Combo::new(&[CTRL, Keycode::C]);
const PASTE: Combo = Combo::new(&[CTRL, Keycode::V]);
const SELECT_ALL: Combo = Combo::new(&[CTRL, Keycode::A]);

static SELECT_ALL_COPY: [Combo; 2] = [SELECT_ALL, COPY];
static INTERRUPT_AND_CLEAR: [Combo; 3] = [
    COPY,
    Combo::new(&[CTRL, Keycode::L]),
    Combo::new(&[Keycode::UP_ARROW]),
];

/// Per-button gesture bindings, indexed by button.
pub static BUTTONS: [GestureConfig; BUTTON_COUNT] = [
    GestureConfig::EMPTY
        .with(Gesture::Press, ActionSpec::Combo(TOGGLE_TERMINAL))
        .with(Gesture::DoublePress, ActionSpec::Combo(NEW_TERMINAL)),
    GestureConfig::EMPTY
        .with(Gesture::Press, ActionSpec::Combo(COPY))
        .with(Gesture::DoublePress, ActionSpec::Combo(PASTE))
        .with(Gesture::LongPress, ActionSpec::Sequence(&SELECT_ALL_COPY)),
    GestureConfig::EMPTY
        .with(Gesture::Press, ActionSpec::Combo(Combo::new(&[Keycode::ENTER])))
        .with(Gesture::LongPress, ActionSpec::Sequence(&INTERRUPT_AND_CLEAR)),
    GestureConfig::EMPTY.with(Gesture::Press, ActionSpec::Combo(Combo::new(&[Keycode::ESCAPE]))),
];
