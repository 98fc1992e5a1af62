//! Per-button gesture recognition.
//!
//! A [`GestureDetector`] is fed one `(is_pressed, now)` sample per tick and
//! turns the stream into at most one [`Gesture`] per sample:
//!
//! ```text
//!            press                release (no long press)
//!   Idle ───────────► Pressed ───────────────────────► WaitDouble
//!    ▲                 │  │ held ≥ threshold              │   │
//!    │   release       │  └─► long_press (once)           │   │ press
//!    ├─────────────────┘      (after long_press)          │   ▼
//!    │◄──────────── press (wait ≥ window) ────────────────┘ DoublePressed
//!    │◄──────────── double_press (release) ───────────────────────┘
//! ```
//!
//! Thresholds are inclusive: a hold of exactly `long_press_threshold` fires a
//! long press, and a wait of exactly `double_press_window` fires a press.
//! A release first seen after the threshold has passed still counts as a
//! long press: it fires on that sample and the detector returns to idle.

use crate::action::Gesture;
use crate::timing::{Instant, TimingConfig};

/// Detector state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureState {
    /// Released, nothing pending.
    #[default]
    Idle,
    /// Held down, first press.
    Pressed,
    /// Released after a short press, waiting to see if a second press comes.
    WaitDouble,
    /// Held down for the second time.
    DoublePressed,
}

/// Gesture state machine for one button.
#[derive(Debug, Clone)]
pub struct GestureDetector {
    timing: TimingConfig,
    state: GestureState,
    press_time: Instant,
    release_time: Instant,
    long_press_fired: bool,
}

impl GestureDetector {
    /// Create an idle detector.
    #[must_use]
    pub const fn new(timing: TimingConfig) -> Self {
        Self {
            timing,
            state: GestureState::Idle,
            press_time: Instant::ZERO,
            release_time: Instant::ZERO,
            long_press_fired: false,
        }
    }

    /// Current state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> GestureState {
        self.state
    }

    /// Whether the detector is idle with nothing pending.
    #[inline]
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state == GestureState::Idle
    }

    /// Timing this detector was built with.
    #[inline]
    #[must_use]
    pub const fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Drop any gesture in progress and return to idle without firing.
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.long_press_fired = false;
    }

    /// Feed one sample.
    ///
    /// `now` should not go backwards; if it does, elapsed times saturate to
    /// zero.
    pub fn update(&mut self, is_pressed: bool, now: Instant) -> Option<Gesture> {
        let (next, fired) = self.step(is_pressed, now);

        #[cfg(feature = "defmt")]
        if let Some(gesture) = fired {
            defmt::trace!("gesture {} ({} -> {})", gesture, self.state, next);
        }

        self.state = next;
        fired
    }

    fn step(&mut self, is_pressed: bool, now: Instant) -> (GestureState, Option<Gesture>) {
        use GestureState::*;

        match (self.state, is_pressed) {
            (Idle, true) => {
                self.press_time = now;
                self.long_press_fired = false;
                (Pressed, None)
            }
            (Idle, false) => (Idle, None),

            (Pressed, true) => {
                let held = now.duration_since(self.press_time);
                if !self.long_press_fired && held >= self.timing.long_press_threshold {
                    self.long_press_fired = true;
                    (Pressed, Some(Gesture::LongPress))
                } else {
                    (Pressed, None)
                }
            }
            (Pressed, false) if self.long_press_fired => (Idle, None),
            // Held past the threshold between two samples
            (Pressed, false)
                if now.duration_since(self.press_time) >= self.timing.long_press_threshold =>
            {
                self.long_press_fired = true;
                (Idle, Some(Gesture::LongPress))
            }
            (Pressed, false) => {
                self.release_time = now;
                (WaitDouble, None)
            }

            (WaitDouble, true) => {
                self.press_time = now;
                (DoublePressed, None)
            }
            (WaitDouble, false) => {
                let waited = now.duration_since(self.release_time);
                if waited >= self.timing.double_press_window {
                    (Idle, Some(Gesture::Press))
                } else {
                    (WaitDouble, None)
                }
            }

            (DoublePressed, true) => (DoublePressed, None),
            (DoublePressed, false) => (Idle, Some(Gesture::DoublePress)),
        }
    }
}

impl Default for GestureDetector {
    fn default() -> Self {
        Self::new(TimingConfig::DEFAULT)
    }
}
