//! Gestures and the actions bound to them.

use crate::keys::Combo;

/// A recognized button gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// Single short press, emitted once the double press window has passed.
    Press,
    /// Two short presses inside the double press window.
    DoublePress,
    /// Button held for at least the long press threshold.
    LongPress,
}

impl Gesture {
    /// Number of gesture kinds.
    pub const COUNT: usize = 3;

    /// Every gesture, in table order.
    pub const ALL: [Gesture; Self::COUNT] = [Self::Press, Self::DoublePress, Self::LongPress];

    /// Canonical configuration name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Press => "press",
            Self::DoublePress => "double_press",
            Self::LongPress => "long_press",
        }
    }

    /// Parse a canonical configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.name() == name)
    }

    const fn index(self) -> usize {
        match self {
            Self::Press => 0,
            Self::DoublePress => 1,
            Self::LongPress => 2,
        }
    }
}

impl core::fmt::Display for Gesture {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// What to type when a gesture fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActionSpec {
    /// One combo, pressed and released.
    Combo(Combo),
    /// Several combos, typed in order with a short pause between them.
    Sequence(&'static [Combo]),
}

impl ActionSpec {
    /// Whether firing this action would type nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Combo(combo) => combo.is_empty(),
            Self::Sequence(combos) => combos.iter().all(Combo::is_empty),
        }
    }
}

/// Per-button table of gesture → action.
///
/// Gestures without an entry do nothing when they fire.
///
/// ```
/// use pad_core::{ActionSpec, Combo, Gesture, GestureConfig, Keycode};
///
/// const COPY: GestureConfig = GestureConfig::EMPTY
///     .with(Gesture::Press, ActionSpec::Combo(Combo::new(&[Keycode::CONTROL, Keycode::C])));
///
/// assert!(COPY.action(Gesture::Press).is_some());
/// assert!(COPY.action(Gesture::LongPress).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureConfig {
    actions: [Option<ActionSpec>; Gesture::COUNT],
}

impl GestureConfig {
    /// No gesture bound.
    pub const EMPTY: Self = Self {
        actions: [None; Gesture::COUNT],
    };

    /// This table with `gesture` bound to `action`, replacing any previous binding.
    #[must_use]
    pub const fn with(mut self, gesture: Gesture, action: ActionSpec) -> Self {
        self.actions[gesture.index()] = Some(action);
        self
    }

    /// Action bound to `gesture`, if any.
    #[must_use]
    pub const fn action(&self, gesture: Gesture) -> Option<&ActionSpec> {
        self.actions[gesture.index()].as_ref()
    }

    /// Whether any gesture is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Keycode;

    #[test]
    fn test_gesture_names_round_trip() {
        for gesture in Gesture::ALL {
            assert_eq!(Gesture::from_name(gesture.name()), Some(gesture));
        }
        assert_eq!(Gesture::from_name("triple_press"), None);
        assert_eq!(Gesture::from_name("Press"), None);
    }

    #[test]
    fn test_config_lookup() {
        let combo = Combo::new(&[Keycode::ENTER]);
        let config = GestureConfig::EMPTY.with(Gesture::DoublePress, ActionSpec::Combo(combo));

        assert_eq!(config.action(Gesture::Press), None);
        assert_eq!(
            config.action(Gesture::DoublePress),
            Some(&ActionSpec::Combo(combo))
        );
        assert!(!config.is_empty());
        assert!(GestureConfig::EMPTY.is_empty());
    }

    #[test]
    fn test_with_replaces_binding() {
        let first = ActionSpec::Combo(Combo::new(&[Keycode::A]));
        let second = ActionSpec::Combo(Combo::new(&[Keycode::B]));
        let config = GestureConfig::EMPTY
            .with(Gesture::Press, first)
            .with(Gesture::Press, second);
        assert_eq!(config.action(Gesture::Press), Some(&second));
    }

    #[test]
    fn test_action_is_empty() {
        static BLANKS: [Combo; 2] = [Combo::EMPTY, Combo::EMPTY];
        assert!(ActionSpec::Combo(Combo::EMPTY).is_empty());
        assert!(ActionSpec::Sequence(&[]).is_empty());
        assert!(ActionSpec::Sequence(&BLANKS).is_empty());
        assert!(!ActionSpec::Combo(Combo::new(&[Keycode::TAB])).is_empty());
    }
}
