//! Display-mode preference and its persistence.
//!
//! The preference is a single localStorage key holding the literal string
//! "light" or "dark". Storage access is best-effort: when localStorage is
//! unavailable the in-memory mode still applies for the session.

use web_sys::window;

pub const THEME_STORAGE_KEY: &str = "uinsports-theme";

/// The binary display preference.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    /// Returns the mode name as a string (used for the document attribute
    /// and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    /// Parse mode from string. Anything other than exactly "dark" resolves
    /// to light, so a corrupt stored value falls back to the default.
    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Mode::Dark,
            _ => Mode::Light,
        }
    }

    /// The other mode.
    pub fn toggled(&self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }
}

/// Load the persisted mode. Falls back to light when storage is missing,
/// the key is unset, or the value does not parse.
pub fn load_mode() -> Mode {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Mode::from_str(&s))
        .unwrap_or_default()
}

/// Persist the mode. Write failures are swallowed.
pub fn save_mode(mode: Mode) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, mode.as_str());
    }
}

/// Reflect the active mode on the root element as `data-theme`, for
/// stylesheet rules outside the token pipeline.
pub fn apply_document_mode(mode: Mode) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", mode.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        for mode in [Mode::Light, Mode::Dark] {
            assert_eq!(Mode::from_str(mode.as_str()), mode);
        }
    }

    #[test]
    fn test_corrupt_value_falls_back_to_light() {
        assert_eq!(Mode::from_str(""), Mode::Light);
        assert_eq!(Mode::from_str("DARK"), Mode::Light);
        assert_eq!(Mode::from_str("solarized"), Mode::Light);
    }

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(Mode::Light.toggled(), Mode::Dark);
        assert_eq!(Mode::Dark.toggled().toggled(), Mode::Dark);
    }
}
