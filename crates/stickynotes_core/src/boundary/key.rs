//! Modifier + key combinations for global hotkeys.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Hotkey that clears every note after confirmation.
pub const CLEAR_ALL_HOTKEY: KeyCombo = KeyCombo {
    ctrl: true,
    shift: true,
    alt: false,
    key: 'D',
};

/// A pressed key together with its held modifiers.
///
/// Equality and hashing ignore ASCII case on `key`, so a combo built from a
/// raw `d` key event matches `Ctrl+Shift+D`.
#[derive(Debug, Clone, Copy)]
pub struct KeyCombo {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub key: char,
}

impl KeyCombo {
    /// Builds a combo for `key` with no modifiers held.
    pub fn plain(key: char) -> Self {
        Self {
            ctrl: false,
            shift: false,
            alt: false,
            key: key.to_ascii_uppercase(),
        }
    }

    /// Parses `Ctrl+Shift+D` style strings; modifier names are
    /// case-insensitive and `Control` is accepted for `Ctrl`.
    pub fn parse(value: &str) -> Result<Self, KeyComboParseError> {
        let mut combo = Self::plain(' ');
        let mut key = None;

        for part in value.split('+').map(str::trim) {
            match part.to_ascii_lowercase().as_str() {
                "" => return Err(KeyComboParseError::Empty),
                "ctrl" | "control" => combo.ctrl = true,
                "shift" => combo.shift = true,
                "alt" | "option" => combo.alt = true,
                _ => {
                    let mut chars = part.chars();
                    let (Some(ch), None) = (chars.next(), chars.next()) else {
                        return Err(KeyComboParseError::UnknownToken(part.to_string()));
                    };
                    if key.replace(ch.to_ascii_uppercase()).is_some() {
                        return Err(KeyComboParseError::MultipleKeys);
                    }
                }
            }
        }

        combo.key = key.ok_or(KeyComboParseError::MissingKey)?;
        Ok(combo)
    }
}

impl PartialEq for KeyCombo {
    fn eq(&self, other: &Self) -> bool {
        self.ctrl == other.ctrl
            && self.shift == other.shift
            && self.alt == other.alt
            && self.key.eq_ignore_ascii_case(&other.key)
    }
}

impl Eq for KeyCombo {}

impl Hash for KeyCombo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ctrl.hash(state);
        self.shift.hash(state);
        self.alt.hash(state);
        self.key.to_ascii_uppercase().hash(state);
    }
}

impl FromStr for KeyCombo {
    type Err = KeyComboParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for KeyCombo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        if self.alt {
            f.write_str("Alt+")?;
        }
        write!(f, "{}", self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyComboParseError {
    Empty,
    MissingKey,
    MultipleKeys,
    UnknownToken(String),
}

impl Display for KeyComboParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "key combination has an empty segment"),
            Self::MissingKey => write!(f, "key combination has no key"),
            Self::MultipleKeys => write!(f, "key combination has more than one key"),
            Self::UnknownToken(token) => write!(f, "unknown key token `{token}`"),
        }
    }
}

impl Error for KeyComboParseError {}

#[cfg(test)]
mod tests {
    use super::{KeyCombo, KeyComboParseError, CLEAR_ALL_HOTKEY};

    #[test]
    fn parse_matches_clear_hotkey_case_insensitively() {
        assert_eq!(KeyCombo::parse("Ctrl+Shift+D").unwrap(), CLEAR_ALL_HOTKEY);
        assert_eq!(KeyCombo::parse("control + shift + d").unwrap(), CLEAR_ALL_HOTKEY);
        assert_eq!(KeyCombo::parse("shift+ctrl+D").unwrap(), CLEAR_ALL_HOTKEY);
    }

    #[test]
    fn lowercase_key_field_matches_and_hashes_like_uppercase() {
        use std::collections::HashSet;

        let raw = KeyCombo {
            ctrl: true,
            shift: true,
            alt: false,
            key: 'd',
        };
        assert_eq!(raw, CLEAR_ALL_HOTKEY);
        assert_ne!(raw, KeyCombo { alt: true, ..raw });

        let mut set = HashSet::new();
        set.insert(CLEAR_ALL_HOTKEY);
        assert!(set.contains(&raw));
    }

    #[test]
    fn display_roundtrips_through_parse() {
        assert_eq!(CLEAR_ALL_HOTKEY.to_string(), "Ctrl+Shift+D");
        let parsed: KeyCombo = CLEAR_ALL_HOTKEY.to_string().parse().unwrap();
        assert_eq!(parsed, CLEAR_ALL_HOTKEY);
    }

    #[test]
    fn parse_rejects_invalid_input() {
        assert_eq!(KeyCombo::parse("Ctrl+Shift"), Err(KeyComboParseError::MissingKey));
        assert_eq!(KeyCombo::parse("Ctrl++D"), Err(KeyComboParseError::Empty));
        assert_eq!(KeyCombo::parse("D+E"), Err(KeyComboParseError::MultipleKeys));
        assert!(matches!(
            KeyCombo::parse("Hyper+D"),
            Err(KeyComboParseError::UnknownToken(_))
        ));
    }
}
