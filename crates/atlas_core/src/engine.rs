//! Affection engine: scores utterances and advances the relationship state.
//!
//! State is threaded value-in/value-out. The engine itself only holds the
//! immutable [`SentimentModel`], so one engine can serve any number of
//! independent sessions.

use crate::guidance;
use crate::sentiment::SentimentModel;
use crate::state::RelationshipState;
use crate::tier::Tier;

/// Result of processing one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub state: RelationshipState,
    /// Delta that was applied (0 for skipped turns).
    pub delta: i32,
    /// Guidance for the next generation. `None` for counterpart turns.
    pub guidance: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AffectionEngine {
    model: SentimentModel,
}

impl AffectionEngine {
    pub fn new(model: SentimentModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &SentimentModel {
        &self.model
    }

    /// Signed sum of every pattern in the active tier's table that the
    /// utterance hits. A pattern counts at most once, however many of its
    /// phrases appear. A phrase listed under both a reinforcing and an
    /// eroding pattern contributes to both.
    pub fn score_utterance(&self, text: &str, active: Tier) -> i32 {
        let lowered = text.to_lowercase();
        let table = self.model.patterns_for(active);

        table
            .positive
            .iter()
            .chain(table.negative.iter())
            .filter(|p| p.matches(&lowered))
            .map(|p| p.value)
            .sum()
    }

    /// Apply a delta, clamping onto `[0, 100]`.
    pub fn apply_delta(&self, state: RelationshipState, delta: i32) -> RelationshipState {
        RelationshipState::new(state.score() as i64 + delta as i64)
    }

    /// Process one utterance. Turns authored by the character itself leave
    /// the state untouched and produce no guidance.
    pub fn process_turn(
        &self,
        state: RelationshipState,
        utterance: &str,
        is_from_counterpart: bool,
    ) -> TurnOutcome {
        if is_from_counterpart {
            tracing::trace!("Skipping counterpart turn at {}", state.tier());
            return TurnOutcome {
                state,
                delta: 0,
                guidance: None,
            };
        }

        let before = state.tier();
        let delta = self.score_utterance(utterance, before);
        let next = self.apply_delta(state, delta);

        tracing::debug!(
            "Scored utterance at {}: delta {:+}, affection {} -> {}",
            before,
            delta,
            state.score(),
            next.score()
        );
        if next.tier() != before {
            tracing::info!("Sentiment changed: {} -> {}", before, next.tier());
        }

        TurnOutcome {
            state: next,
            delta,
            guidance: Some(guidance::render(next.tier(), next.score())),
        }
    }

    /// Guidance for a state without processing a turn.
    pub fn guidance_for(&self, state: RelationshipState) -> String {
        guidance::render(state.tier(), state.score())
    }
}
