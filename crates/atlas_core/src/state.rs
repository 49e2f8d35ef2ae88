//! Relationship state and its persisted snapshot.
//!
//! The score is the only durable quantity. The tier is recomputed on every
//! read, so a snapshot whose tier label disagrees with its score cannot
//! desynchronize the two.

use crate::tier::{Tier, MAX_SCORE};
use serde::{Deserialize, Deserializer, Serialize};

/// Score a fresh conversation starts at (Neutral).
pub const DEFAULT_SCORE: u8 = 45;

/// Clamp an arbitrary integer onto the affection scale.
pub fn clamp_score(raw: i64) -> u8 {
    raw.clamp(0, MAX_SCORE as i64) as u8
}

/// The entire durable state of one conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelationshipState {
    score: u8,
}

impl Default for RelationshipState {
    fn default() -> Self {
        Self {
            score: DEFAULT_SCORE,
        }
    }
}

impl RelationshipState {
    /// Build a state from any integer, clamping onto `[0, 100]`.
    pub fn new(score: i64) -> Self {
        Self {
            score: clamp_score(score),
        }
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn tier(&self) -> Tier {
        Tier::from_score(self.score)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            affection: self.score as i64,
            sentiment: self.tier().name().to_string(),
        }
    }

    /// Restore from a prior snapshot, or start at `default_score` when there
    /// is none. The stored tier label is ignored.
    pub fn restore(snapshot: Option<&Snapshot>, default_score: u8) -> Self {
        let Some(snapshot) = snapshot else {
            return Self::new(default_score as i64);
        };

        let state = Self::new(snapshot.affection);
        if Tier::parse(&snapshot.sentiment) != Some(state.tier()) {
            tracing::debug!(
                "Snapshot label {:?} disagrees with score {}, using {}",
                snapshot.sentiment,
                state.score,
                state.tier()
            );
        }
        state
    }

    /// Restore from raw JSON. Anything unparseable, including a non-integer
    /// `affection`, falls back to `default_score`.
    pub fn from_json(raw: &str, default_score: u8) -> Self {
        match serde_json::from_str::<Snapshot>(raw) {
            Ok(snapshot) => Self::restore(Some(&snapshot), default_score),
            Err(e) => {
                tracing::warn!("Malformed relationship snapshot ({}), using defaults", e);
                Self::restore(None, default_score)
            }
        }
    }
}

/// Flat persisted form handed to the host after every turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(deserialize_with = "deserialize_affection")]
    pub affection: i64,
    /// Informational only; recomputed on restore.
    #[serde(default)]
    pub sentiment: String,
}

/// Accept any JSON number. Fractions are rounded; values beyond `i64`
/// saturate and are clamped later like any other out-of-range score.
fn deserialize_affection<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let n = serde_json::Number::deserialize(deserializer)?;
    Ok(match n.as_i64() {
        Some(v) => v,
        None => n.as_f64().map(|f| f.round() as i64).unwrap_or(i64::MAX),
    })
}
