use anyhow::Result;
use atlas_core::{AffectionEngine, AffectionSession, AtlasConfig, Message};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Instrument};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

mod output;
mod repl;
mod store;

use store::StateStore;

#[derive(Parser, Debug)]
#[command(name = "atlas", author, version, about, long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(short, long, default_value = "atlas.toml")]
    config: PathBuf,

    /// Path to the saved relationship state (overrides config)
    #[arg(short, long)]
    state: Option<PathBuf>,

    /// Process a single message and print the result as JSON
    #[arg(long)]
    say: Option<String>,

    /// Treat --say as a reply from Atlas instead of the user
    #[arg(long, requires = "say")]
    bot: bool,

    /// Print the current sentiment and exit
    #[arg(long)]
    status: bool,

    /// Discard any saved state before starting
    #[arg(long)]
    reset: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let span = tracing::info_span!("session", id = %Uuid::new_v4());
    run(args).instrument(span).await
}

async fn run(args: Args) -> Result<()> {
    let config = AtlasConfig::load_or_default(&args.config);
    output::init_color(&config.display);

    let state_path = args
        .state
        .clone()
        .unwrap_or_else(|| config.session.state_path.clone());
    let store = StateStore::new(state_path);
    if args.reset {
        info!("Discarding saved state at {}", store.path().display());
        store.clear().await?;
    }

    let engine = AffectionEngine::new(config.affection.load_model()?);
    let snapshot = store.load().await;
    let mut session = AffectionSession::new(
        engine,
        snapshot.as_ref(),
        config.affection.default_score(),
    );
    session.load();
    info!(
        "Session started at {} ({}/100)",
        session.state().tier(),
        session.state().score()
    );

    if let Some(text) = &args.say {
        let response = if args.bot {
            session.before_prompt(&Message::bot(text.as_str()))
        } else {
            session.before_prompt(&Message::user(text.as_str()))
        };
        store.save(&response.message_state).await?;
        println!("{}", serde_json::to_string_pretty(&output::turn_json(&response))?);
    }

    if args.status {
        println!("{}", output::render_display(&session.display(), &config.display));
    }

    if args.say.is_none() && !args.status {
        repl::run_repl(&mut session, &store, &config.display).await?;
    }

    Ok(())
}
