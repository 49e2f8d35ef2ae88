//! Relationship tiers.
//!
//! The affection scale `[0, 100]` is partitioned into six contiguous,
//! non-overlapping ranges. A tier is never stored on its own: it is always
//! derived from a score via [`Tier::from_score`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Upper bound of the affection scale.
pub const MAX_SCORE: u8 = 100;

/// How the character currently regards the user, ordered from hostile to devoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// 0-24: outright hostility
    Enemy,
    /// 25-39: cruel, dismissive, avoidant
    Cold,
    /// 40-54: minimal, professional
    Neutral,
    /// 55-74: warm, platonic
    Friendly,
    /// 75-89: conflicted romantic interest
    Pining,
    /// 90-100: in love
    Devoted,
}

impl Tier {
    /// All tiers in ascending order of their lower bound.
    pub const ALL: [Tier; 6] = [
        Tier::Enemy,
        Tier::Cold,
        Tier::Neutral,
        Tier::Friendly,
        Tier::Pining,
        Tier::Devoted,
    ];

    /// Inclusive lower bound of this tier.
    pub const fn min(self) -> u8 {
        match self {
            Tier::Enemy => 0,
            Tier::Cold => 25,
            Tier::Neutral => 40,
            Tier::Friendly => 55,
            Tier::Pining => 75,
            Tier::Devoted => 90,
        }
    }

    /// Inclusive upper bound of this tier.
    pub const fn max(self) -> u8 {
        match self {
            Tier::Enemy => 24,
            Tier::Cold => 39,
            Tier::Neutral => 54,
            Tier::Friendly => 74,
            Tier::Pining => 89,
            Tier::Devoted => MAX_SCORE,
        }
    }

    pub fn range(self) -> RangeInclusive<u8> {
        self.min()..=self.max()
    }

    /// Classify a score. Checks from the highest lower bound downward, so
    /// adjacent boundaries resolve to the higher tier. Scores above
    /// [`MAX_SCORE`] land in `Devoted`; callers clamp before calling.
    pub fn from_score(score: u8) -> Tier {
        Tier::ALL
            .iter()
            .rev()
            .copied()
            .find(|&tier| score >= tier.min())
            .unwrap_or(Tier::Enemy)
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Enemy => "Enemy",
            Tier::Cold => "Cold",
            Tier::Neutral => "Neutral",
            Tier::Friendly => "Friendly",
            Tier::Pining => "Pining",
            Tier::Devoted => "Devoted",
        }
    }

    /// Parse a tier label, ignoring case and surrounding whitespace.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "enemy" => Some(Tier::Enemy),
            "cold" => Some(Tier::Cold),
            "neutral" => Some(Tier::Neutral),
            "friendly" => Some(Tier::Friendly),
            "pining" => Some(Tier::Pining),
            "devoted" => Some(Tier::Devoted),
            _ => None,
        }
    }

    /// Display color associated with this tier.
    pub fn color(self) -> ColorToken {
        match self {
            Tier::Enemy => ColorToken("#ff3333"),
            Tier::Cold => ColorToken("#6699ff"),
            Tier::Neutral => ColorToken::NEUTRAL,
            Tier::Friendly => ColorToken("#66cc66"),
            Tier::Pining => ColorToken("#ff66cc"),
            Tier::Devoted => ColorToken("#ffcc00"),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opaque presentational color, a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorToken(&'static str);

impl ColorToken {
    /// Fallback grey.
    pub const NEUTRAL: ColorToken = ColorToken("#888888");

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Decode into RGB components for terminal rendering.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = self.0.trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .unwrap_or(0x88)
        };
        (channel(0), channel(2), channel(4))
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
