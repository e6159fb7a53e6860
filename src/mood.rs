use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The fixed set of mood presets offered by the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Energetic,
    Relaxed,
    Excited,
    Calm,
    Thoughtful,
    Nostalgic,
}

impl Mood {
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Energetic,
        Mood::Relaxed,
        Mood::Excited,
        Mood::Calm,
        Mood::Thoughtful,
        Mood::Nostalgic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Energetic => "energetic",
            Mood::Relaxed => "relaxed",
            Mood::Excited => "excited",
            Mood::Calm => "calm",
            Mood::Thoughtful => "thoughtful",
            Mood::Nostalgic => "nostalgic",
        }
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "energetic" => Ok(Mood::Energetic),
            "relaxed" => Ok(Mood::Relaxed),
            "excited" => Ok(Mood::Excited),
            "calm" => Ok(Mood::Calm),
            "thoughtful" => Ok(Mood::Thoughtful),
            "nostalgic" => Ok(Mood::Nostalgic),
            other => Err(format!("unknown mood '{other}'")),
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated, non-empty search query derived from a mood selection or a
/// free-text override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodQuery(String);

impl MoodQuery {
    /// Normalizes user input into a query string.
    ///
    /// The input is trimmed; an empty result is rejected. A preset match
    /// (case-insensitive) resolves to its canonical lowercase form, any
    /// other text is passed through verbatim.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::Validation("Mood is required".to_string()));
        }

        match Mood::from_str(trimmed) {
            Ok(mood) => Ok(MoodQuery(mood.as_str().to_string())),
            Err(_) => Ok(MoodQuery(trimmed.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MoodQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
