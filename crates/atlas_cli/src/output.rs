//! Terminal rendering of the affection display.

use atlas_core::config::DisplayConfig;
use atlas_core::{AffectionDisplay, StageResponse};
use colored::*;

/// Turn colorization on or off for the whole process.
pub fn init_color(config: &DisplayConfig) {
    if !config.color {
        colored::control::set_override(false);
    }
}

/// Multi-line panel: title, tier in its color, score, bar.
pub fn render_display(view: &AffectionDisplay, config: &DisplayConfig) -> String {
    let (r, g, b) = view.color.rgb();
    format!(
        "{}\n{}\n{}\n{}",
        view.title.bold(),
        view.tier.name().truecolor(r, g, b).bold(),
        format!("Affection: {}/100", view.score).dimmed(),
        view.bar(config.bar_width).truecolor(r, g, b),
    )
}

/// One line summarizing a processed turn.
pub fn render_turn(response: &StageResponse) -> String {
    let delta = match response.delta {
        d if d > 0 => format!("{:+}", d).green(),
        d if d < 0 => format!("{:+}", d).red(),
        _ => "±0".dimmed(),
    };
    format!(
        "{} → {} ({}/100)",
        delta, response.message_state.sentiment, response.message_state.affection
    )
}

/// Machine-readable result of a one-shot turn.
pub fn turn_json(response: &StageResponse) -> serde_json::Value {
    serde_json::json!({
        "affection": response.message_state.affection,
        "sentiment": response.message_state.sentiment,
        "delta": response.delta,
        "stage_directions": response.stage_directions,
    })
}
