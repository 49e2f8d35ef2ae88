use crate::display::DEFAULT_BAR_WIDTH;
use crate::sentiment::SentimentModel;
use crate::state::{clamp_score, DEFAULT_SCORE};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    pub affection: AffectionConfig,
    pub session: SessionConfig,
    pub display: DisplayConfig,
}

impl AtlasConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    /// After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: AtlasConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if file doesn't exist, return defaults with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("ATLAS_DEFAULT_SCORE") {
            if let Ok(n) = v.parse() {
                self.affection.default_score = n;
            }
        }
        if let Ok(v) = std::env::var("ATLAS_KEYWORDS_PATH") {
            self.affection.keywords_path = Some(PathBuf::from(v));
        }
        if let Ok(v) = std::env::var("ATLAS_STATE_PATH") {
            self.session.state_path = PathBuf::from(v);
        }
        if std::env::var("ATLAS_NO_COLOR").is_ok() {
            self.display.color = false;
        }
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AffectionConfig {
    /// Starting score when no snapshot exists. Clamped onto `[0, 100]`.
    pub default_score: i64,
    /// Optional TOML file replacing the built-in keyword tables.
    pub keywords_path: Option<PathBuf>,
}

impl AffectionConfig {
    pub fn default_score(&self) -> u8 {
        clamp_score(self.default_score)
    }

    /// The keyword model to run with: the file at `keywords_path` if set,
    /// otherwise the built-in tables.
    pub fn load_model(&self) -> Result<SentimentModel> {
        match &self.keywords_path {
            Some(path) => SentimentModel::from_file(path)
                .with_context(|| format!("Failed to load keyword tables: {}", path.display())),
            None => Ok(SentimentModel::reference()),
        }
    }
}

impl Default for AffectionConfig {
    fn default() -> Self {
        Self {
            default_score: DEFAULT_SCORE as i64,
            keywords_path: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub state_path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from("atlas_state.json"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub bar_width: usize,
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_width: DEFAULT_BAR_WIDTH,
            color: true,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
