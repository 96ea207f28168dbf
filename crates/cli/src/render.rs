//! Terminal rendering of a QueueView

use colored::Colorize;
use fastqueue_core::application::{IntentOutcome, QueueView};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Customer")]
    label: String,
    #[tabled(rename = "Waiting")]
    waiting: String,
}

pub fn view_table(view: &QueueView) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Current Queue".cyan().bold()));
    out.push_str(&format!(
        "{} {}\n",
        view.headline,
        format!("(capacity {})", view.capacity).dimmed()
    ));

    if !view.rows.is_empty() {
        let rows: Vec<Row> = view
            .rows
            .iter()
            .map(|row| Row {
                position: row.position,
                label: row.label.clone(),
                waiting: row.waiting.clone(),
            })
            .collect();
        out.push_str(&Table::new(rows).to_string());
        out.push('\n');
    }

    if view.registration_visible {
        out.push_str(&format!(
            "{}\n  Email:    ____________\n  Password: ____________\n  {}\n",
            "Register Account".yellow().bold(),
            "(type 'cancel' to close)".dimmed()
        ));
    }

    out
}

pub fn view_json(view: &QueueView) -> anyhow::Result<String> {
    Ok(view.to_json_pretty()?)
}

pub fn outcome_line(outcome: &IntentOutcome) -> String {
    match outcome {
        IntentOutcome::Joined(entry) => format!(
            "✓ {} joined at position {}",
            entry.label(),
            entry.position
        )
        .green()
        .bold()
        .to_string(),
        IntentOutcome::Served(Some(entry)) => {
            format!("✓ {} served", entry.label()).green().bold().to_string()
        }
        IntentOutcome::Served(None) => "Nobody is waiting".yellow().to_string(),
        IntentOutcome::DialogShown => "Registration dialog opened".dimmed().to_string(),
        IntentOutcome::DialogHidden => "Registration dialog closed".dimmed().to_string(),
    }
}
