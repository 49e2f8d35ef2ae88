//! Presentational view of the relationship state.
//!
//! Purely derivative: recomputable at any time from a snapshot, never read
//! back as a source of truth.

use crate::sentiment::SentimentModel;
use crate::state::RelationshipState;
use crate::tier::{ColorToken, Tier, MAX_SCORE};
use serde::Serialize;
use std::fmt;

/// Bar width used when no caller-specific width is configured.
pub const DEFAULT_BAR_WIDTH: usize = 24;

const FILLED: char = '█';
const EMPTY: char = '░';

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffectionDisplay {
    pub title: &'static str,
    pub tier: Tier,
    pub score: u8,
    /// `score / 100`, in `[0.0, 1.0]`.
    pub fraction: f32,
    pub color: ColorToken,
}

impl AffectionDisplay {
    pub fn new(state: RelationshipState, model: &SentimentModel) -> Self {
        let tier = state.tier();
        Self {
            title: "Atlas's Sentiment",
            tier,
            score: state.score(),
            fraction: state.score() as f32 / MAX_SCORE as f32,
            color: model.color_for(tier),
        }
    }

    /// Text progress bar `width` cells wide.
    pub fn bar(&self, width: usize) -> String {
        let filled = ((self.fraction * width as f32).round() as usize).min(width);
        let mut bar = String::with_capacity(width * FILLED.len_utf8());
        bar.extend(std::iter::repeat(FILLED).take(filled));
        bar.extend(std::iter::repeat(EMPTY).take(width - filled));
        bar
    }
}

impl fmt::Display for AffectionDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.tier)?;
        writeln!(f, "Affection: {}/100", self.score)?;
        write!(f, "{}", self.bar(DEFAULT_BAR_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(score: i64) -> AffectionDisplay {
        AffectionDisplay::new(RelationshipState::new(score), &SentimentModel::reference())
    }

    #[test]
    fn test_fraction() {
        assert!((view(45).fraction - 0.45).abs() < f32::EPSILON);
        assert_eq!(view(0).fraction, 0.0);
        assert_eq!(view(100).fraction, 1.0);
    }

    #[test]
    fn test_color_follows_tier() {
        assert_eq!(view(95).color.as_str(), "#ffcc00");
        assert_eq!(view(10).color.as_str(), "#ff3333");
    }

    #[test]
    fn test_bar_width() {
        let bar = view(50).bar(10);
        assert_eq!(bar.chars().count(), 10);
        assert_eq!(bar.chars().filter(|c| *c == FILLED).count(), 5);
        assert_eq!(view(0).bar(8), EMPTY.to_string().repeat(8));
        assert_eq!(view(100).bar(8), FILLED.to_string().repeat(8));
        assert_eq!(view(100).bar(0), "");
    }

    #[test]
    fn test_display_text() {
        let text = view(45).to_string();
        assert!(text.starts_with("Atlas's Sentiment\nNeutral\nAffection: 45/100\n"));
        let bar = text.lines().last().unwrap();
        assert_eq!(bar.chars().count(), DEFAULT_BAR_WIDTH);
    }
}
