//! Conversation host for a single session.
//!
//! Wraps the value-in/value-out [`AffectionEngine`] with the lifecycle hooks a
//! chat platform drives: construction from a saved snapshot, `load`,
//! `set_state` when the user jumps to another branch, `before_prompt` for each
//! incoming message and `after_response` once the character has replied.

use crate::display::AffectionDisplay;
use crate::engine::AffectionEngine;
use crate::state::{RelationshipState, Snapshot};
use serde::{Deserialize, Serialize};

/// A chat message as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub content: String,
    /// Authored by the character rather than the user being scored.
    #[serde(default)]
    pub is_bot: bool,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_bot: false,
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_bot: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadResponse {
    pub success: bool,
    pub error: Option<String>,
}

/// What the host receives after a hook runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageResponse {
    /// Guidance to inject as generation context, when any.
    pub stage_directions: Option<String>,
    /// Snapshot to persist verbatim for the next turn.
    pub message_state: Snapshot,
    /// Score change caused by this hook.
    pub delta: i32,
}

pub struct AffectionSession {
    engine: AffectionEngine,
    state: RelationshipState,
    default_score: u8,
}

impl AffectionSession {
    pub fn new(engine: AffectionEngine, snapshot: Option<&Snapshot>, default_score: u8) -> Self {
        Self {
            engine,
            state: RelationshipState::restore(snapshot, default_score),
            default_score,
        }
    }

    pub fn load(&self) -> LoadResponse {
        LoadResponse {
            success: true,
            error: None,
        }
    }

    /// Replace the current state with a saved one. A missing snapshot leaves
    /// the current state in place.
    pub fn set_state(&mut self, snapshot: Option<&Snapshot>) {
        if let Some(snapshot) = snapshot {
            self.state = RelationshipState::restore(Some(snapshot), self.default_score);
        }
    }

    /// Forget all progress and return to the default score.
    pub fn reset(&mut self) {
        self.state = RelationshipState::restore(None, self.default_score);
    }

    /// Score an incoming message and return the resulting guidance.
    pub fn before_prompt(&mut self, message: &Message) -> StageResponse {
        let outcome = self
            .engine
            .process_turn(self.state, &message.content, message.is_bot);
        self.state = outcome.state;
        StageResponse {
            stage_directions: outcome.guidance,
            message_state: self.state.snapshot(),
            delta: outcome.delta,
        }
    }

    /// The character's reply never moves the score.
    pub fn after_response(&mut self, _message: &Message) -> StageResponse {
        StageResponse {
            stage_directions: None,
            message_state: self.state.snapshot(),
            delta: 0,
        }
    }

    pub fn state(&self) -> RelationshipState {
        self.state
    }

    pub fn engine(&self) -> &AffectionEngine {
        &self.engine
    }

    pub fn display(&self) -> AffectionDisplay {
        AffectionDisplay::new(self.state, self.engine.model())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DEFAULT_SCORE;
    use crate::tier::Tier;

    fn session(snapshot: Option<&Snapshot>) -> AffectionSession {
        AffectionSession::new(AffectionEngine::default(), snapshot, DEFAULT_SCORE)
    }

    #[test]
    fn test_load_succeeds() {
        let resp = session(None).load();
        assert!(resp.success);
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_restores_from_snapshot() {
        let snap = Snapshot {
            affection: 80,
            sentiment: "Neutral".to_string(),
        };
        let s = session(Some(&snap));
        assert_eq!(s.state().tier(), Tier::Pining);
    }

    #[test]
    fn test_before_prompt_scores_user() {
        let mut s = session(None);
        let resp = s.before_prompt(&Message::user("You're incredibly skilled"));
        assert_eq!(resp.delta, 2);
        assert_eq!(resp.message_state.affection, 47);
        assert_eq!(resp.message_state.sentiment, "Neutral");
        assert!(resp.stage_directions.unwrap().contains("Affection: 47/100"));
    }

    #[test]
    fn test_before_prompt_skips_bot() {
        let mut s = session(None);
        let resp = s.before_prompt(&Message::bot("I love you"));
        assert_eq!(resp.message_state.affection, 45);
        assert_eq!(resp.message_state.sentiment, "Neutral");
        assert!(resp.stage_directions.is_none());
    }

    #[test]
    fn test_after_response_never_scores() {
        let mut s = session(None);
        let resp = s.after_response(&Message::bot("tactical, skilled, competent"));
        assert_eq!(resp.delta, 0);
        assert_eq!(resp.message_state.affection, 45);
        assert!(resp.stage_directions.is_none());
    }

    #[test]
    fn test_set_state_and_reset() {
        let mut s = session(None);
        s.set_state(Some(&Snapshot {
            affection: 20,
            sentiment: "Enemy".to_string(),
        }));
        assert_eq!(s.state().score(), 20);

        s.set_state(None);
        assert_eq!(s.state().score(), 20);

        s.reset();
        assert_eq!(s.state().score(), 45);
    }

    #[test]
    fn test_display_tracks_state() {
        let mut s = session(None);
        s.before_prompt(&Message::user("tactical"));
        let view = s.display();
        assert_eq!(view.score, 47);
        assert_eq!(view.tier, Tier::Neutral);
    }
}
