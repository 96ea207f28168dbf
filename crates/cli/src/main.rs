//! FastQueue CLI - terminal front-end for the restaurant waitlist
//!
//! All state lives in this process and is gone when it exits.

mod logging;
mod render;
mod repl;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use fastqueue_core::application::{Intent, WaitlistSession};
use fastqueue_core::config::{ENV_CAPACITY, ENV_ID_STRATEGY, ENV_MAX_ID_ATTEMPTS};
use fastqueue_core::domain::MILLIS_PER_MINUTE;
use fastqueue_core::port::{SystemTimeProvider, TimeProvider};
use fastqueue_core::{EngineConfig, IdStrategy};
use repl::Reply;
use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tracing::info;

/// Longest simulated gap between two joins (one day)
const MAX_MINUTES_BETWEEN: i64 = 24 * 60;

#[derive(Parser)]
#[command(name = "fastqueue")]
#[command(about = "FastQueue restaurant waitlist", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Maximum number of waiting customers
    #[arg(long, env = ENV_CAPACITY)]
    capacity: Option<usize>,

    /// ID generation attempts before a join is rejected
    #[arg(long, env = ENV_MAX_ID_ATTEMPTS)]
    max_id_attempts: Option<u32>,

    /// Entry ID strategy: uuid or sequential
    #[arg(long, env = ENV_ID_STRATEGY)]
    id_strategy: Option<IdStrategy>,

    /// Print the queue as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Read actions from stdin (default)
    Interactive,

    /// Run a scripted sequence of joins and serves and print the result
    Simulate {
        /// Number of customers joining
        #[arg(short, long, default_value = "3")]
        joins: usize,

        /// Number of customers served afterwards
        #[arg(short, long, default_value = "1")]
        serves: usize,

        /// Simulated minutes between consecutive joins
        #[arg(
            short,
            long,
            default_value = "2",
            value_parser = clap::value_parser!(i64).range(0..=MAX_MINUTES_BETWEEN)
        )]
        minutes_between: i64,
    },
}

impl Cli {
    /// Defaults, overridden by flags (which fall back to `FASTQUEUE_*`)
    fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = EngineConfig::default();
        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        if let Some(attempts) = self.max_id_attempts {
            config.max_id_attempts = attempts;
        }
        if let Some(strategy) = self.id_strategy {
            config.id_strategy = strategy;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Clock that only moves when told to (used by `simulate`)
struct SimulatedClock {
    now: AtomicI64,
}

impl SimulatedClock {
    fn advance_minutes(&self, minutes: i64) {
        let step = minutes.saturating_mul(MILLIS_PER_MINUTE);
        let now = self.now.load(Ordering::SeqCst);
        self.now.store(now.saturating_add(step), Ordering::SeqCst);
    }
}

impl TimeProvider for SimulatedClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

fn run_interactive(mut session: WaitlistSession, json: bool) -> Result<()> {
    println!("{}", "FastQueue".red().bold());
    println!("{}", repl::HELP.dimmed());
    println!();
    print!("{}", repl::render_view(&session.view_now(), json)?);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("{} ", ">".bold());
        stdout.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        if stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?
            == 0
        {
            break;
        }

        match repl::dispatch(&mut session, &line, json)? {
            Reply::Print(text) => print!("{text}"),
            Reply::Nothing => {}
            Reply::Quit => break,
        }
    }

    info!(
        waiting = session.engine().len(),
        "Session ended, waitlist discarded"
    );
    Ok(())
}

fn run_simulation(
    config: &EngineConfig,
    joins: usize,
    serves: usize,
    minutes_between: i64,
    json: bool,
) -> Result<()> {
    let clock = Arc::new(SimulatedClock {
        now: AtomicI64::new(SystemTimeProvider.now_millis()),
    });
    let mut session = WaitlistSession::new(config, config.id_strategy.provider(), clock.clone());

    for i in 0..joins {
        if i > 0 {
            clock.advance_minutes(minutes_between);
        }
        if let Err(e) = session.apply(Intent::Join) {
            println!("{}", format!("✗ {e}").red());
            break;
        }
    }
    for _ in 0..serves {
        session.apply(Intent::Leave)?;
    }

    info!(simulated_now = %clock.now_utc().to_rfc3339(), "Simulation finished");

    print!("{}", repl::render_view(&session.view_now(), json)?);
    Ok(())
}

fn main() -> Result<()> {
    logging::init_logging()?;

    let cli = Cli::parse();
    let config = cli.engine_config().context("Invalid configuration")?;

    info!(
        version = fastqueue_core::VERSION,
        capacity = config.capacity,
        id_strategy = %config.id_strategy,
        opened_at = %SystemTimeProvider.now_utc().to_rfc3339(),
        "FastQueue starting"
    );

    match cli.command {
        None | Some(Commands::Interactive) => {
            run_interactive(WaitlistSession::from_config(&config), cli.json)
        }
        Some(Commands::Simulate {
            joins,
            serves,
            minutes_between,
        }) => run_simulation(&config, joins, serves, minutes_between, cli.json),
    }
}
