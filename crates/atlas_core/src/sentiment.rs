//! Tier-conditioned keyword tables.
//!
//! Each tier owns two independent lists of weighted patterns: `positive`
//! (reinforcing) and `negative` (eroding). Nothing is shared or inherited
//! between tiers; a phrase only moves the score while the relationship sits
//! at a tier whose table mentions it.
//!
//! Matching is plain case-insensitive substring search, so short phrases
//! also hit inside longer words ("us" matches "because").

use crate::tier::{ColorToken, Tier};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("failed to read keyword file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse keyword file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{tier} table contains a pattern with no usable keyword")]
    EmptyKeyword { tier: Tier },
}

/// A set of phrases sharing one signed weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordPattern {
    pub keywords: Vec<String>,
    pub value: i32,
}

impl KeywordPattern {
    pub fn new(keywords: &[&str], value: i32) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            value,
        }
    }

    /// True if any phrase, lower-cased, occurs in `lowered`. Stops at the
    /// first hit. `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| lowered.contains(k.to_lowercase().as_str()))
    }
}

/// Reinforcing and eroding patterns for a single tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierPatternTable {
    pub positive: Vec<KeywordPattern>,
    pub negative: Vec<KeywordPattern>,
}

impl TierPatternTable {
    fn normalize(&mut self, tier: Tier) -> Result<(), ModelError> {
        for pattern in self.positive.iter_mut().chain(self.negative.iter_mut()) {
            for keyword in pattern.keywords.iter_mut() {
                *keyword = keyword.to_lowercase();
            }
            if pattern.keywords.is_empty() || pattern.keywords.iter().any(|k| k.is_empty()) {
                return Err(ModelError::EmptyKeyword { tier });
            }
        }
        Ok(())
    }
}

/// Static lexical policy: one pattern table per tier.
///
/// Tables are named fields rather than a map so that every tier is
/// guaranteed a table and `patterns_for` stays an exhaustive match.
///
/// When deserialized, a missing tier means "no patterns", not the
/// reference patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SentimentModel {
    #[serde(default)]
    pub enemy: TierPatternTable,
    #[serde(default)]
    pub cold: TierPatternTable,
    #[serde(default)]
    pub neutral: TierPatternTable,
    #[serde(default)]
    pub friendly: TierPatternTable,
    #[serde(default)]
    pub pining: TierPatternTable,
    #[serde(default)]
    pub devoted: TierPatternTable,
}

impl Default for SentimentModel {
    fn default() -> Self {
        Self::reference()
    }
}

impl SentimentModel {
    /// Built-in keyword configuration for Atlas.
    pub fn reference() -> Self {
        let p = KeywordPattern::new;
        Self {
            enemy: TierPatternTable {
                positive: vec![
                    p(&["submit", "surrender", "mercy", "yield"], 1),
                    p(&["afraid", "fear", "scared", "terrified"], 1),
                ],
                negative: vec![
                    p(&["attack", "kill", "destroy", "die"], -2),
                    p(&["traitor", "betrayer", "coward", "weakling"], -2),
                    p(&["pathetic", "worthless", "useless"], -1),
                ],
            },
            cold: TierPatternTable {
                positive: vec![
                    p(&["general", "sir", "commander", "respect"], 2),
                    p(&["understand", "professional", "duty", "honor"], 1),
                    p(&["tactical", "strategy", "plan", "military"], 1),
                ],
                negative: vec![
                    p(&["past", "aurelith", "betrayal", "banishment"], -2),
                    p(&["feelings", "emotion", "personal", "childhood"], -1),
                    p(&["open up", "tell me about", "share"], -1),
                ],
            },
            neutral: TierPatternTable {
                positive: vec![
                    p(&["competent", "skilled", "strategic", "tactical", "general xalvador"], 2),
                    p(&["battle", "war", "combat", "fight", "gneral"], 1),
                    p(&["noctaris", "lythraen", "rebellion"], 1),
                    p(&["agree", "understood", "i understand", "reasonable"], 1),
                ],
                negative: vec![
                    p(&["family", "childhood", "ouranii rite", "sacred rite"], -2),
                    p(&["feel", "love", "care", "heart"], -1),
                    p(&["why", "tell me why", "explain yourself"], -1),
                ],
            },
            friendly: TierPatternTable {
                positive: vec![
                    p(&["i trust you", "I rely on you", "count on you", "depend on you"], 2),
                    p(&["respect you", "admire you", "appreciate you"], 2),
                    p(&["understand", "see", "get it"], 1),
                    p(&["drink", "spar", "train", "together"], 1),
                    p(&["laugh", "smile", "humor", "joke"], 1),
                    p(&["agree", "understood", "i understand", "reasonable"], 1),
                ],
                negative: vec![
                    p(&["ouranii", "rite", "child", "offspring"], -1),
                    p(&["deserve", "worthy", "happiness"], -1),
                    p(&["weapon", "tool", "just a soldier"], -1),
                ],
            },
            pining: TierPatternTable {
                positive: vec![
                    p(&["beautiful", "handsome", "attractive"], 2),
                    p(&["care", "worry", "concern", "safe"], 2),
                    p(&["close", "near", "touch", "hold"], 2),
                    p(&["together", "us", "we", "ours"], 1),
                    p(&["special", "important", "matter", "mean a lot to me", "together"], 1),
                    p(&["vulnerable", "open", "honest", "real"], 1),
                    p(&["trust", "honest", "truth"], 1),
                    p(&["future", "tomorrow", "beyond", "after"], 1),
                ],
                negative: vec![
                    p(&["we're just friends", "platonic"], -2),
                    p(&["other", "there's someone else", "another"], -2),
                    p(&["distance", "space"], -1),
                    p(&["lie", "lied", "dishonest", "deceive"], -2),
                    p(&["betray", "leave you", "abandon", "give up"], -2),
                    p(&["regret", "mistake", "wrong choice"], -1),
                ],
            },
            devoted: TierPatternTable {
                positive: vec![
                    p(&["love", "adore", "cherish"], 2),
                    p(&["forever", "always", "never leave"], 2),
                    p(&["together", "us", "we", "ours"], 1),
                    p(&["trust", "honest", "truth", "tell me"], 1),
                    p(&["future", "tomorrow", "beyond", "after"], 1),
                ],
                negative: vec![
                    p(&["lie", "lied", "dishonest", "deceive"], -2),
                    p(&["betray", "leave", "abandon", "give up"], -2),
                    p(&["regret", "mistake", "wrong choice"], -1),
                ],
            },
        }
    }

    /// Parse an alternate keyword configuration. Tiers absent from the
    /// document get an empty table.
    pub fn from_toml_str(content: &str) -> Result<Self, ModelError> {
        let mut model: SentimentModel = toml::from_str(content)?;
        for tier in Tier::ALL {
            model.table_mut(tier).normalize(tier)?;
        }
        Ok(model)
    }

    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Tier for a score in `[0, 100]`.
    pub fn classify(&self, score: u8) -> Tier {
        Tier::from_score(score)
    }

    pub fn patterns_for(&self, tier: Tier) -> &TierPatternTable {
        match tier {
            Tier::Enemy => &self.enemy,
            Tier::Cold => &self.cold,
            Tier::Neutral => &self.neutral,
            Tier::Friendly => &self.friendly,
            Tier::Pining => &self.pining,
            Tier::Devoted => &self.devoted,
        }
    }

    fn table_mut(&mut self, tier: Tier) -> &mut TierPatternTable {
        match tier {
            Tier::Enemy => &mut self.enemy,
            Tier::Cold => &mut self.cold,
            Tier::Neutral => &mut self.neutral,
            Tier::Friendly => &mut self.friendly,
            Tier::Pining => &mut self.pining,
            Tier::Devoted => &mut self.devoted,
        }
    }

    pub fn color_for(&self, tier: Tier) -> ColorToken {
        tier.color()
    }
}
