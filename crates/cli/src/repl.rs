//! Line dispatch for the interactive mode
//!
//! Turns one input line into the text to print, so the loop in `main` only
//! does I/O.

use crate::render;
use anyhow::Result;
use colored::Colorize;
use fastqueue_core::application::{Intent, QueueView, WaitlistSession};

pub const HELP: &str = "\
Actions:
  join        Join the queue
  leave       Serve the customer at the head of the queue
  register    Open the registration dialog
  cancel      Close the registration dialog
  show [json] Redraw the queue
  help        Show this message
  quit        Exit (the queue is discarded)";

#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print this text
    Print(String),
    /// Blank line, nothing to do
    Nothing,
    Quit,
}

pub fn render_view(view: &QueueView, json: bool) -> Result<String> {
    if json {
        Ok(format!("{}\n", render::view_json(view)?))
    } else {
        Ok(render::view_table(view))
    }
}

pub fn dispatch(session: &mut WaitlistSession, line: &str, json: bool) -> Result<Reply> {
    let mut words = line.split_whitespace();
    let Some(action) = words.next() else {
        return Ok(Reply::Nothing);
    };

    let text = match action.to_ascii_lowercase().as_str() {
        "quit" | "exit" => return Ok(Reply::Quit),
        "help" => format!("{HELP}\n"),
        "show" => {
            let as_json = json || words.next().is_some_and(|w| w.eq_ignore_ascii_case("json"));
            render_view(&session.view_now(), as_json)?
        }
        _ => match action.parse::<Intent>() {
            Ok(intent) => match session.apply(intent) {
                Ok(outcome) => format!(
                    "{}\n{}",
                    render::outcome_line(&outcome),
                    render_view(&session.view_now(), json)?
                ),
                Err(e) => format!("{}\n", format!("✗ {e}").red()),
            },
            Err(e) => format!("{} (type 'help')\n", format!("✗ {e}").red()),
        },
    };

    Ok(Reply::Print(text))
}
