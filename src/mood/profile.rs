use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::utils;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoodError {
    #[error("unknown mood label '{0}', expected one of: happy, sad, energetic, calm")]
    UnknownMoodLabel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Sad,
    Energetic,
    Calm,
}

/// Target point in (valence, energy) space describing a mood.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodProfile {
    pub mood: Mood,
    pub valence: f64,
    pub energy: f64,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Sad, Mood::Energetic, Mood::Calm];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Energetic => "energetic",
            Mood::Calm => "calm",
        }
    }

    pub fn profile(&self) -> MoodProfile {
        let (valence, energy) = match self {
            Mood::Happy => (0.7, 0.7),
            Mood::Sad => (0.3, 0.3),
            Mood::Energetic => (0.6, 0.8),
            Mood::Calm => (0.5, 0.3),
        };

        MoodProfile {
            mood: *self,
            valence,
            energy,
        }
    }

    /// e.g. `My Happy Playlist`
    pub fn playlist_title(&self) -> String {
        format!("My {} Playlist", utils::capitalize(self.label()))
    }

    pub fn playlist_description(&self) -> String {
        format!("Auto-generated {} mood playlist", self.label())
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Labels match exactly: `"Happy"` or `" happy"` are unknown.
impl FromStr for Mood {
    type Err = MoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.label() == s)
            .ok_or_else(|| MoodError::UnknownMoodLabel(s.to_string()))
    }
}

pub fn profile_for(label: &str) -> Result<MoodProfile, MoodError> {
    label.parse::<Mood>().map(|mood| mood.profile())
}
