//! HID keyboard keycodes, key combinations and key-string parsing.
//!
//! Keycodes are USB HID usage IDs from the Keyboard/Keypad page. Modifier
//! usages (0xE0-0xE7) are folded into the modifier byte of a keyboard report,
//! everything else goes into the six-slot key array.

/// Maximum number of ordinary keys held together in one combo (the key array
/// of a boot keyboard report). Modifiers do not count toward it.
pub const MAX_COMBO_KEYS: usize = 6;

/// A USB HID keyboard usage ID.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Keycode(pub u8);

impl Keycode {
    pub const NONE: Self = Self(0x00);

    pub const A: Self = Self(0x04);
    pub const B: Self = Self(0x05);
    pub const C: Self = Self(0x06);
    pub const D: Self = Self(0x07);
    pub const E: Self = Self(0x08);
    pub const F: Self = Self(0x09);
    pub const G: Self = Self(0x0A);
    pub const H: Self = Self(0x0B);
    pub const I: Self = Self(0x0C);
    pub const J: Self = Self(0x0D);
    pub const K: Self = Self(0x0E);
    pub const L: Self = Self(0x0F);
    pub const M: Self = Self(0x10);
    pub const N: Self = Self(0x11);
    pub const O: Self = Self(0x12);
    pub const P: Self = Self(0x13);
    pub const Q: Self = Self(0x14);
    pub const R: Self = Self(0x15);
    pub const S: Self = Self(0x16);
    pub const T: Self = Self(0x17);
    pub const U: Self = Self(0x18);
    pub const V: Self = Self(0x19);
    pub const W: Self = Self(0x1A);
    pub const X: Self = Self(0x1B);
    pub const Y: Self = Self(0x1C);
    pub const Z: Self = Self(0x1D);

    pub const ONE: Self = Self(0x1E);
    pub const TWO: Self = Self(0x1F);
    pub const THREE: Self = Self(0x20);
    pub const FOUR: Self = Self(0x21);
    pub const FIVE: Self = Self(0x22);
    pub const SIX: Self = Self(0x23);
    pub const SEVEN: Self = Self(0x24);
    pub const EIGHT: Self = Self(0x25);
    pub const NINE: Self = Self(0x26);
    pub const ZERO: Self = Self(0x27);

    pub const ENTER: Self = Self(0x28);
    pub const ESCAPE: Self = Self(0x29);
    pub const BACKSPACE: Self = Self(0x2A);
    pub const TAB: Self = Self(0x2B);
    pub const SPACE: Self = Self(0x2C);
    pub const MINUS: Self = Self(0x2D);
    pub const EQUALS: Self = Self(0x2E);
    pub const LEFT_BRACKET: Self = Self(0x2F);
    pub const RIGHT_BRACKET: Self = Self(0x30);
    pub const BACKSLASH: Self = Self(0x31);
    pub const SEMICOLON: Self = Self(0x33);
    pub const QUOTE: Self = Self(0x34);
    pub const GRAVE_ACCENT: Self = Self(0x35);
    pub const COMMA: Self = Self(0x36);
    pub const PERIOD: Self = Self(0x37);
    pub const FORWARD_SLASH: Self = Self(0x38);
    pub const CAPS_LOCK: Self = Self(0x39);

    pub const F1: Self = Self(0x3A);
    pub const F2: Self = Self(0x3B);
    pub const F3: Self = Self(0x3C);
    pub const F4: Self = Self(0x3D);
    pub const F5: Self = Self(0x3E);
    pub const F6: Self = Self(0x3F);
    pub const F7: Self = Self(0x40);
    pub const F8: Self = Self(0x41);
    pub const F9: Self = Self(0x42);
    pub const F10: Self = Self(0x43);
    pub const F11: Self = Self(0x44);
    pub const F12: Self = Self(0x45);

    pub const PRINT_SCREEN: Self = Self(0x46);
    pub const SCROLL_LOCK: Self = Self(0x47);
    pub const PAUSE: Self = Self(0x48);
    pub const INSERT: Self = Self(0x49);
    pub const HOME: Self = Self(0x4A);
    pub const PAGE_UP: Self = Self(0x4B);
    pub const DELETE: Self = Self(0x4C);
    pub const END: Self = Self(0x4D);
    pub const PAGE_DOWN: Self = Self(0x4E);
    pub const RIGHT_ARROW: Self = Self(0x4F);
    pub const LEFT_ARROW: Self = Self(0x50);
    pub const DOWN_ARROW: Self = Self(0x51);
    pub const UP_ARROW: Self = Self(0x52);

    pub const LEFT_CONTROL: Self = Self(0xE0);
    pub const LEFT_SHIFT: Self = Self(0xE1);
    pub const LEFT_ALT: Self = Self(0xE2);
    pub const LEFT_GUI: Self = Self(0xE3);
    pub const RIGHT_CONTROL: Self = Self(0xE4);
    pub const RIGHT_SHIFT: Self = Self(0xE5);
    pub const RIGHT_ALT: Self = Self(0xE6);
    pub const RIGHT_GUI: Self = Self(0xE7);

    // Short names for the left-hand modifiers
    pub const CONTROL: Self = Self::LEFT_CONTROL;
    pub const SHIFT: Self = Self::LEFT_SHIFT;
    pub const ALT: Self = Self::LEFT_ALT;
    pub const GUI: Self = Self::LEFT_GUI;

    /// The raw usage ID.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Whether this usage is one of the eight modifier keys.
    #[inline]
    #[must_use]
    pub const fn is_modifier(self) -> bool {
        self.0 >= 0xE0 && self.0 <= 0xE7
    }

    /// Bit in the report's modifier byte, or 0 for ordinary keys.
    #[inline]
    #[must_use]
    pub const fn modifier_bit(self) -> u8 {
        if self.is_modifier() {
            1 << (self.0 - 0xE0)
        } else {
            0
        }
    }
}

/// A set of keys pressed and released together.
///
/// Holds up to [`MAX_COMBO_KEYS`] ordinary keys plus any of the eight
/// modifiers, in insertion order. Modifiers live in the report's modifier
/// byte and do not use a key slot. Duplicates are ignored, ordinary keys past
/// the limit are dropped by [`Combo::new`] and rejected by [`Combo::push`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Combo {
    keys: [Keycode; COMBO_CAPACITY],
    len: u8,
}

/// Every modifier plus a full key array.
const COMBO_CAPACITY: usize = MAX_COMBO_KEYS + 8;

impl Combo {
    /// A combo with no keys. Firing it does nothing.
    pub const EMPTY: Self = Self {
        keys: [Keycode::NONE; COMBO_CAPACITY],
        len: 0,
    };

    /// Build a combo from a slice of keys (usable in `const` tables).
    #[must_use]
    pub const fn new(keys: &[Keycode]) -> Self {
        let mut combo = Self::EMPTY;
        let mut i = 0;
        while i < keys.len() {
            let key = keys[i];
            if !combo.contains(key) && (key.is_modifier() || combo.key_count() < MAX_COMBO_KEYS) {
                combo.keys[combo.len as usize] = key;
                combo.len += 1;
            }
            i += 1;
        }
        combo
    }

    /// Whether `key` is part of this combo.
    #[must_use]
    pub const fn contains(&self, key: Keycode) -> bool {
        let mut i = 0;
        while i < self.len as usize {
            if self.keys[i].0 == key.0 {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Add a key.
    ///
    /// # Errors
    ///
    /// Returns the key back if it is an ordinary key and the key array is
    /// already full.
    pub fn push(&mut self, key: Keycode) -> Result<(), Keycode> {
        if self.contains(key) {
            return Ok(());
        }
        if !key.is_modifier() && self.key_count() >= MAX_COMBO_KEYS {
            return Err(key);
        }
        self.keys[self.len as usize] = key;
        self.len += 1;
        Ok(())
    }

    /// The keys, modifiers included, in the order they were added.
    #[inline]
    #[must_use]
    pub fn keys(&self) -> &[Keycode] {
        &self.keys[..self.len as usize]
    }

    /// Number of keys, modifiers included.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of ordinary (non-modifier) keys.
    #[must_use]
    pub const fn key_count(&self) -> usize {
        let mut count = 0;
        let mut i = 0;
        while i < self.len as usize {
            if !self.keys[i].is_modifier() {
                count += 1;
            }
            i += 1;
        }
        count
    }

    /// Modifier byte of a keyboard report holding this combo.
    #[must_use]
    pub fn modifier_bits(&self) -> u8 {
        self.keys().iter().fold(0, |acc, key| acc | key.modifier_bit())
    }

    /// Key array of a keyboard report holding this combo (modifiers excluded).
    #[must_use]
    pub fn key_bytes(&self) -> [u8; MAX_COMBO_KEYS] {
        let mut bytes = [0; MAX_COMBO_KEYS];
        for (slot, key) in bytes
            .iter_mut()
            .zip(self.keys().iter().filter(|key| !key.is_modifier()))
        {
            *slot = key.code();
        }
        bytes
    }
}

impl Default for Combo {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Error type for key-string parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyParseError {
    /// No key names in the string.
    Empty,
    /// A component is not a known key name.
    UnknownKey,
    /// A component before the last one is not a modifier.
    NotAModifier,
    /// More keys than fit in one combo.
    TooManyKeys,
}

impl core::fmt::Display for KeyParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Empty => write!(f, "no keys specified"),
            Self::UnknownKey => write!(f, "unknown key"),
            Self::NotAModifier => write!(f, "only modifiers may precede the final key"),
            Self::TooManyKeys => write!(f, "too many keys for one combo"),
        }
    }
}

const MODIFIER_NAMES: &[(&str, Keycode)] = &[
    ("ctrl", Keycode::CONTROL),
    ("control", Keycode::CONTROL),
    ("alt", Keycode::ALT),
    ("option", Keycode::ALT),
    ("shift", Keycode::SHIFT),
    ("meta", Keycode::GUI),
    ("cmd", Keycode::GUI),
    ("command", Keycode::GUI),
    ("win", Keycode::GUI),
    ("super", Keycode::GUI),
];

const SPECIAL_NAMES: &[(&str, Keycode)] = &[
    ("enter", Keycode::ENTER),
    ("return", Keycode::ENTER),
    ("tab", Keycode::TAB),
    ("esc", Keycode::ESCAPE),
    ("escape", Keycode::ESCAPE),
    ("space", Keycode::SPACE),
    ("spacebar", Keycode::SPACE),
    ("backspace", Keycode::BACKSPACE),
    ("delete", Keycode::DELETE),
    ("del", Keycode::DELETE),
    ("insert", Keycode::INSERT),
    ("ins", Keycode::INSERT),
    ("home", Keycode::HOME),
    ("end", Keycode::END),
    ("pageup", Keycode::PAGE_UP),
    ("pgup", Keycode::PAGE_UP),
    ("pagedown", Keycode::PAGE_DOWN),
    ("pgdn", Keycode::PAGE_DOWN),
    ("up", Keycode::UP_ARROW),
    ("down", Keycode::DOWN_ARROW),
    ("left", Keycode::LEFT_ARROW),
    ("right", Keycode::RIGHT_ARROW),
    ("f1", Keycode::F1),
    ("f2", Keycode::F2),
    ("f3", Keycode::F3),
    ("f4", Keycode::F4),
    ("f5", Keycode::F5),
    ("f6", Keycode::F6),
    ("f7", Keycode::F7),
    ("f8", Keycode::F8),
    ("f9", Keycode::F9),
    ("f10", Keycode::F10),
    ("f11", Keycode::F11),
    ("f12", Keycode::F12),
    ("capslock", Keycode::CAPS_LOCK),
    ("printscreen", Keycode::PRINT_SCREEN),
    ("scrolllock", Keycode::SCROLL_LOCK),
    ("pause", Keycode::PAUSE),
];

fn lookup(table: &[(&str, Keycode)], name: &str) -> Option<Keycode> {
    table
        .iter()
        .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
        .map(|&(_, key)| key)
}

fn single_char_key(c: char) -> Option<Keycode> {
    let c = c.to_ascii_lowercase();
    match c {
        'a'..='z' => Some(Keycode(Keycode::A.0 + (c as u8 - b'a'))),
        '1'..='9' => Some(Keycode(Keycode::ONE.0 + (c as u8 - b'1'))),
        '0' => Some(Keycode::ZERO),
        '-' => Some(Keycode::MINUS),
        '=' => Some(Keycode::EQUALS),
        '[' => Some(Keycode::LEFT_BRACKET),
        ']' => Some(Keycode::RIGHT_BRACKET),
        '\\' => Some(Keycode::BACKSLASH),
        ';' => Some(Keycode::SEMICOLON),
        '\'' => Some(Keycode::QUOTE),
        '`' => Some(Keycode::GRAVE_ACCENT),
        ',' => Some(Keycode::COMMA),
        '.' => Some(Keycode::PERIOD),
        '/' => Some(Keycode::FORWARD_SLASH),
        _ => None,
    }
}

/// Resolve a single key name such as `"a"`, `"enter"` or `"ctrl"`.
///
/// Matching is case-insensitive and ignores surrounding whitespace.
pub fn keycode_from_name(name: &str) -> Result<Keycode, KeyParseError> {
    let name = name.trim();

    if let Some(key) = lookup(MODIFIER_NAMES, name).or_else(|| lookup(SPECIAL_NAMES, name)) {
        return Ok(key);
    }

    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => single_char_key(c).ok_or(KeyParseError::UnknownKey),
        _ => Err(KeyParseError::UnknownKey),
    }
}

/// Parse a key string like `"ctrl+shift+c"` into a [`Combo`].
///
/// Components are separated by `+` and blank components are skipped. Every
/// component except the last one in the string must be a modifier, so a
/// trailing `+` makes the key before it a misplaced non-modifier.
///
/// ```
/// use pad_core::{parse_combo, Keycode};
///
/// let combo = parse_combo("Ctrl + Shift + C").unwrap();
/// assert_eq!(combo.keys(), &[Keycode::CONTROL, Keycode::SHIFT, Keycode::C]);
/// ```
pub fn parse_combo(s: &str) -> Result<Combo, KeyParseError> {
    let last = s.split('+').count() - 1;
    let mut combo = Combo::EMPTY;

    for (position, part) in s.split('+').enumerate() {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let key = keycode_from_name(part)?;
        if position < last && !key.is_modifier() {
            return Err(KeyParseError::NotAModifier);
        }
        combo.push(key).map_err(|_| KeyParseError::TooManyKeys)?;
    }

    if combo.is_empty() {
        return Err(KeyParseError::Empty);
    }
    Ok(combo)
}
