//! All buttons of the pad: one gesture detector per button plus its actions.

use crate::action::{Gesture, GestureConfig};
use crate::dispatch::ActionDispatcher;
use crate::gesture::GestureDetector;
use crate::input::{sample, ButtonInput};
use crate::timing::{Instant, TimingConfig};

/// A gesture fired by one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureEvent {
    pub button: usize,
    pub gesture: Gesture,
}

/// Gesture detection for `N` buttons.
///
/// Detector `i` only ever sees the level of button `i`, and every detector is
/// fed exactly once per [`Pad::update`].
pub struct Pad<'a, const N: usize> {
    detectors: [GestureDetector; N],
    configs: &'a [GestureConfig; N],
}

impl<'a, const N: usize> Pad<'a, N> {
    /// Build idle detectors sharing `timing`, with one action table per button.
    #[must_use]
    pub fn new(timing: TimingConfig, configs: &'a [GestureConfig; N]) -> Self {
        Self {
            detectors: core::array::from_fn(|_| GestureDetector::new(timing)),
            configs,
        }
    }

    /// Feed one tick of button levels, lowest index first.
    ///
    /// Returns every gesture fired during this tick, in button order.
    pub fn update(&mut self, levels: &[bool; N], now: Instant) -> heapless::Vec<GestureEvent, N> {
        let mut events = heapless::Vec::new();
        for (button, (detector, &pressed)) in self.detectors.iter_mut().zip(levels).enumerate() {
            if let Some(gesture) = detector.update(pressed, now) {
                // One gesture per detector per tick, cannot overflow
                let _ = events.push(GestureEvent { button, gesture });
            }
        }
        events
    }

    /// Sample `input` and feed the result to every detector.
    pub fn poll<I: ButtonInput>(
        &mut self,
        input: &mut I,
        now: Instant,
    ) -> heapless::Vec<GestureEvent, N> {
        let levels = sample(input);
        self.update(&levels, now)
    }

    /// Dispatcher for the actions of `button`, if the index is valid.
    #[must_use]
    pub fn dispatcher(&self, button: usize) -> Option<ActionDispatcher<'a>> {
        self.configs.get(button).map(ActionDispatcher::new)
    }

    /// Action tables, indexed by button.
    #[must_use]
    pub fn configs(&self) -> &'a [GestureConfig; N] {
        self.configs
    }

    /// Number of buttons with at least one gesture bound.
    #[must_use]
    pub fn configured_buttons(&self) -> usize {
        self.configs.iter().filter(|c| !c.is_empty()).count()
    }

    /// Detector of `button`, if the index is valid.
    #[must_use]
    pub fn detector(&self, button: usize) -> Option<&GestureDetector> {
        self.detectors.get(button)
    }

    /// Return every detector to idle without firing anything.
    pub fn reset(&mut self) {
        self.detectors.iter_mut().for_each(GestureDetector::reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionSpec;
    use crate::input::{ButtonEdge, EdgeTracker};
    use crate::keys::{Combo, Keycode};

    static CONFIGS: [GestureConfig; 3] = [
        GestureConfig::EMPTY.with(
            Gesture::Press,
            ActionSpec::Combo(Combo::new(&[Keycode::CONTROL, Keycode::GRAVE_ACCENT])),
        ),
        GestureConfig::EMPTY,
        GestureConfig::EMPTY.with(
            Gesture::LongPress,
            ActionSpec::Combo(Combo::new(&[Keycode::ESCAPE])),
        ),
    ];

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_buttons_are_independent() {
        let mut pad = Pad::new(TimingConfig::DEFAULT, &CONFIGS);

        assert!(pad.update(&[true, false, true], at(0)).is_empty());
        assert!(pad.update(&[false, false, true], at(100)).is_empty());
        assert!(pad.update(&[false, false, true], at(399)).is_empty());

        let events = pad.update(&[false, false, true], at(400));
        assert_eq!(
            events.as_slice(),
            &[GestureEvent {
                button: 0,
                gesture: Gesture::Press
            }]
        );

        let events = pad.update(&[false, false, true], at(500));
        assert_eq!(
            events.as_slice(),
            &[GestureEvent {
                button: 2,
                gesture: Gesture::LongPress
            }]
        );
        assert!(pad.update(&[false, false, false], at(510)).is_empty());
    }

    #[test]
    fn test_poll_from_edges() {
        let mut pad = Pad::new(TimingConfig::DEFAULT, &CONFIGS);
        let mut input = EdgeTracker::<3>::new();

        input.apply(ButtonEdge::press(1));
        assert!(pad.poll(&mut input, at(0)).is_empty());
        input.apply(ButtonEdge::release(1));
        assert!(pad.poll(&mut input, at(50)).is_empty());
        input.apply(ButtonEdge::press(1));
        assert!(pad.poll(&mut input, at(100)).is_empty());
        input.apply(ButtonEdge::release(1));

        let events = pad.poll(&mut input, at(150));
        assert_eq!(
            events.as_slice(),
            &[GestureEvent {
                button: 1,
                gesture: Gesture::DoublePress
            }]
        );
    }

    #[test]
    fn test_dispatcher_lookup() {
        let pad = Pad::new(TimingConfig::DEFAULT, &CONFIGS);
        assert!(pad.dispatcher(2).is_some());
        assert!(pad.dispatcher(3).is_none());
        assert_eq!(pad.configured_buttons(), 2);
    }

    #[test]
    fn test_reset_clears_pending() {
        let mut pad = Pad::new(TimingConfig::DEFAULT, &CONFIGS);
        pad.update(&[true, false, false], at(0));
        pad.update(&[false, false, false], at(50));
        pad.reset();
        assert!(pad.detector(0).is_some_and(GestureDetector::is_idle));
        assert!(pad.update(&[false, false, false], at(1_000)).is_empty());
    }
}
