//! Player preferences
//!
//! Read from the page query string (`?lang=en&preview=arc`). Not persisted.

use serde::{Deserialize, Serialize};

/// HUD text language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    Chinese,
    English,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::English => "en",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "zh" | "cn" | "chinese" => Some(Language::Chinese),
            "en" | "english" => Some(Language::English),
            _ => None,
        }
    }
}

/// How the aim is previewed while dragging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PreviewMode {
    /// Dashed line from the bird back to the anchor
    #[default]
    Line,
    /// Dots along the predicted flight path
    Arc,
    Off,
}

impl PreviewMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "line" => Some(PreviewMode::Line),
            "arc" | "path" => Some(PreviewMode::Arc),
            "off" | "none" | "0" => Some(PreviewMode::Off),
            _ => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub language: Language,
    pub preview: PreviewMode,
}

impl Settings {
    /// Parse `key=value` pairs from a URL query string
    ///
    /// Unknown keys and unparseable values are ignored (logged) and keep their
    /// defaults. A leading `?` is accepted.
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "lang" => match Language::from_str(value) {
                    Some(language) => settings.language = language,
                    None => log::warn!("Unknown language '{}'", value),
                },
                "preview" => match PreviewMode::from_str(value) {
                    Some(preview) => settings.preview = preview,
                    None => log::warn!("Unknown preview mode '{}'", value),
                },
                _ => {}
            }
        }

        settings
    }
}
