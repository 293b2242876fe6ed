//! Display theme and color mode value types.
//!
//! String forms match the persisted settings keys of the web client
//! (`"beige"`, `"pastel-blue"`, ..., `"light"`, `"dark"`). Unknown strings
//! fail to parse so that corrupt stored settings fall back to defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Beige,
    PastelBlue,
    PastelPink,
    PastelGreen,
    BrightOrange,
}

impl Theme {
    pub const ALL: &'static [Theme] = &[
        Theme::Beige,
        Theme::PastelBlue,
        Theme::PastelPink,
        Theme::PastelGreen,
        Theme::BrightOrange,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Beige => "beige",
            Theme::PastelBlue => "pastel-blue",
            Theme::PastelPink => "pastel-pink",
            Theme::PastelGreen => "pastel-green",
            Theme::BrightOrange => "bright-orange",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Theme::ALL.iter().copied().find(|t| t.as_str() == name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(ColorMode::Light),
            "dark" => Some(ColorMode::Dark),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_name(theme.as_str()), Some(*theme));
        }
    }

    #[test]
    fn unknown_theme_name_is_rejected() {
        assert_eq!(Theme::from_name("neon"), None);
    }

    #[test]
    fn theme_serializes_kebab_case() {
        let json = serde_json::to_string(&Theme::PastelBlue).unwrap();
        assert_eq!(json, "\"pastel-blue\"");
    }

    #[test]
    fn color_mode_round_trips() {
        assert_eq!(ColorMode::from_name("dark"), Some(ColorMode::Dark));
        assert_eq!(ColorMode::from_name("light"), Some(ColorMode::Light));
        assert_eq!(ColorMode::from_name("dim"), None);
    }

    #[test]
    fn defaults_match_the_web_client() {
        assert_eq!(Theme::default(), Theme::Beige);
        assert_eq!(ColorMode::default(), ColorMode::Light);
    }
}
