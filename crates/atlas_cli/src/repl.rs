//! Interactive conversation loop.

use crate::output;
use crate::store::StateStore;
use anyhow::Result;
use atlas_core::config::DisplayConfig;
use atlas_core::{AffectionSession, Message};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// A parsed REPL line.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand<'a> {
    Exit,
    Help,
    Status,
    Directions,
    Reset,
    /// A reply authored by Atlas.
    Bot(&'a str),
    User(&'a str),
}

fn parse_line(line: &str) -> ReplCommand<'_> {
    match line {
        "exit" | "quit" | "q" => ReplCommand::Exit,
        "help" | "?" => ReplCommand::Help,
        "status" => ReplCommand::Status,
        "directions" => ReplCommand::Directions,
        "reset" => ReplCommand::Reset,
        _ => match line.strip_prefix("bot:") {
            Some(rest) => ReplCommand::Bot(rest.trim()),
            None => ReplCommand::User(line),
        },
    }
}

pub async fn run_repl(
    session: &mut AffectionSession,
    store: &StateStore,
    display: &DisplayConfig,
) -> Result<()> {
    println!("{}\n", output::render_display(&session.display(), display));
    println!("Speak to Atlas. Type 'help' for commands, 'quit' to exit.");

    let mut editor = DefaultEditor::new()?;
    let history_path = history_path();
    if let Some(path) = &history_path {
        let _ = editor.load_history(path);
    }

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line).ok();

                match parse_line(line) {
                    ReplCommand::Exit => break,
                    ReplCommand::Help => print_help(),
                    ReplCommand::Status => {
                        println!("{}", output::render_display(&session.display(), display));
                    }
                    ReplCommand::Directions => {
                        println!("{}", session.engine().guidance_for(session.state()));
                    }
                    ReplCommand::Reset => {
                        session.reset();
                        persist(session, store).await;
                        println!("{}", output::render_display(&session.display(), display));
                    }
                    ReplCommand::Bot(text) => {
                        let response = session.after_response(&Message::bot(text));
                        println!("{}", output::render_turn(&response));
                        persist(session, store).await;
                    }
                    ReplCommand::User(text) => {
                        let response = session.before_prompt(&Message::user(text));
                        println!("{}", output::render_turn(&response));
                        persist(session, store).await;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Use 'quit' to exit");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                tracing::error!("Readline error: {}", err);
                break;
            }
        }
    }

    if let Some(path) = &history_path {
        editor.save_history(path).ok();
    }

    Ok(())
}

/// Save after every turn. A failed write is logged; the conversation goes on.
async fn persist(session: &AffectionSession, store: &StateStore) {
    if let Err(e) = store.save(&session.state().snapshot()).await {
        tracing::error!("Failed to save state to {}: {:#}", store.path().display(), e);
    }
}

fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".atlas_history"))
}

fn print_help() {
    println!("  <text>        say something to Atlas");
    println!("  bot: <text>   record a reply from Atlas (never scored)");
    println!("  status        show the current sentiment");
    println!("  directions    show the guidance for the current sentiment");
    println!("  reset         start over from the default affection");
    println!("  quit          leave");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line("quit"), ReplCommand::Exit);
        assert_eq!(parse_line("?"), ReplCommand::Help);
        assert_eq!(parse_line("status"), ReplCommand::Status);
        assert_eq!(parse_line("directions"), ReplCommand::Directions);
        assert_eq!(parse_line("reset"), ReplCommand::Reset);
    }

    #[test]
    fn test_parse_bot_and_user() {
        assert_eq!(parse_line("bot:  Hmph."), ReplCommand::Bot("Hmph."));
        assert_eq!(parse_line("I respect you"), ReplCommand::User("I respect you"));
        assert_eq!(parse_line("status report?"), ReplCommand::User("status report?"));
    }
}
