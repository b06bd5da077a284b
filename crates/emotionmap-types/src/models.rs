use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound on the reported user estimate.
pub const MAX_USERS_ESTIMATE: i64 = 5000;
/// Markers counted as one "user" in the estimate.
pub const MARKERS_PER_USER: i64 = 12;
/// Baseline added to every user estimate.
pub const BASE_USERS: i64 = 100;
/// Reported district count. Not computed from marker data.
pub const DISTRICTS: i64 = 89;

/// The closed set of emotion labels a marker may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Calm,
    Neutral,
    Sad,
    Angry,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Happy,
        Emotion::Calm,
        Emotion::Neutral,
        Emotion::Sad,
        Emotion::Angry,
    ];

    /// Emotions counted in the `positive` statistic.
    pub const POSITIVE: [Emotion; 2] = [Emotion::Happy, Emotion::Calm];

    /// Parse an exact lowercase label.
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == label)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Calm => "calm",
            Self::Neutral => "neutral",
            Self::Sad => "sad",
            Self::Angry => "angry",
        }
    }

    pub fn is_positive(&self) -> bool {
        Self::POSITIVE.contains(self)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored marker as returned by `GET /api/markers`.
///
/// `emotion` stays a plain string here: the label set is enforced on
/// ingestion, and listings report whatever the store holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: i64,
    pub lat: f64,
    pub lng: f64,
    pub emotion: String,
    pub comment: String,
}

/// A validated marker ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMarker {
    pub lat: f64,
    pub lng: f64,
    pub emotion: Emotion,
    pub comment: String,
}

/// A stored contact-form message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: String,
}

/// A validated, trimmed contact message ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total: i64,
    pub positive: i64,
    pub users: i64,
    pub districts: i64,
}

impl Stats {
    /// Build the statistics block from the two marker counts.
    ///
    /// `users` is a fixed formula over `total`, not a count of real users.
    pub fn from_counts(total: i64, positive: i64) -> Self {
        Self {
            total,
            positive,
            users: (total / MARKERS_PER_USER + BASE_USERS).min(MAX_USERS_ESTIMATE),
            districts: DISTRICTS,
        }
    }
}
