//! # Atlas Affection Core
//!
//! Tracks how Atlas Xalvador feels about the user. A bounded score in
//! `[0, 100]` maps onto six ordered [`Tier`]s; each user message is scanned
//! against the active tier's keyword tables to produce a delta; the new tier
//! is rendered into guidance text for the generator that voices Atlas.
//!
//! ## Layers
//!
//! - [`tier`] / [`sentiment`]: static configuration, pure lookup
//! - [`engine`]: scoring and state transitions, value-in/value-out
//! - [`guidance`] / [`display`]: derived text and presentation
//! - [`session`]: lifecycle hooks for a chat host owning one conversation

pub mod config;
pub mod display;
pub mod engine;
pub mod guidance;
pub mod sentiment;
pub mod session;
pub mod state;
pub mod tier;

pub use config::AtlasConfig;
pub use display::AffectionDisplay;
pub use engine::{AffectionEngine, TurnOutcome};
pub use sentiment::{KeywordPattern, ModelError, SentimentModel, TierPatternTable};
pub use session::{AffectionSession, LoadResponse, Message, StageResponse};
pub use state::{RelationshipState, Snapshot, DEFAULT_SCORE};
pub use tier::{ColorToken, Tier, MAX_SCORE};
