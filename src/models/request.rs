use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylePreset {
    #[default]
    Auto,
    Bold,
    Circular,
    FlatColors,
    Monotone,
    Outline,
}

impl StylePreset {
    pub const ALL: [StylePreset; 6] = [
        StylePreset::Auto,
        StylePreset::Bold,
        StylePreset::Circular,
        StylePreset::FlatColors,
        StylePreset::Monotone,
        StylePreset::Outline,
    ];

    /// Wire name sent to the generation service
    pub fn as_str(&self) -> &'static str {
        match self {
            StylePreset::Auto => "auto",
            StylePreset::Bold => "bold",
            StylePreset::Circular => "circular",
            StylePreset::FlatColors => "flat-colors",
            StylePreset::Monotone => "monotone",
            StylePreset::Outline => "outline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StylePreset::Auto => "Auto",
            StylePreset::Bold => "Bold",
            StylePreset::Circular => "Circular",
            StylePreset::FlatColors => "Flat Colors",
            StylePreset::Monotone => "Monotone",
            StylePreset::Outline => "Outline",
        }
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyle(pub String);

impl fmt::Display for UnknownStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = StylePreset::ALL.iter().map(StylePreset::as_str).collect();
        write!(
            f,
            "Unknown style preset '{}', expected one of: {}",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for UnknownStyle {}

impl FromStr for StylePreset {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StylePreset::ALL
            .iter()
            .copied()
            .find(|preset| preset.as_str() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

/// Body of `POST /api/generate`. Build it through
/// [`crate::validation::prepare_request`] so the prompt and colors are
/// already checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub style: StylePreset,
    pub colors: Vec<String>,
}
