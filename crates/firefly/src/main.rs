//! Firefly - interactive inbox zero triage in the terminal
//!
//! Walks a demo inbox oldest first, suggests what to do with each email, and
//! applies the action you pick. Replies are drafted and only sent after an
//! explicit confirmation.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod prompt;
mod settings;
mod view;

use std::future::Future;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use firefly_core::{DemoSource, MessageSource, TriageSession};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prompt::LinePrompter;
use view::ConsoleDisplay;

/// Exit status for a session ended by the user (128 + SIGINT).
const EXIT_INTERRUPTED: u8 = 130;

/// Printed when the user ends the session early, by Ctrl-C or end of input.
const INTERRUPTED_NOTICE: &str = "Demo interrupted by user";

#[derive(Debug, Parser)]
#[command(
    name = "firefly",
    about = "AI-assisted inbox zero triage demo",
    version,
    long_about = None
)]
struct Cli {
    /// Settings file (JSON). Defaults to the user config directory.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Skip the cosmetic pause after each folder change.
    #[arg(long)]
    no_pause: bool,

    /// Log debug output to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// List the agent's capabilities and exit.
    #[arg(long)]
    capabilities: bool,

    /// Start the session without waiting for Enter.
    #[arg(short, long)]
    yes: bool,
}

// Prompts block the main task on stdin, so the Ctrl-C listener must run on a
// worker thread of its own.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; stdout belongs to the session
    let default_filter = if cli.verbose {
        "firefly=debug,firefly_core=debug"
    } else {
        "firefly=warn,firefly_core=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tokio::spawn(async {
        let mut out = io::stdout();
        if let Some(code) = on_interrupt(tokio::signal::ctrl_c(), &mut out).await {
            std::process::exit(i32::from(code));
        }
    });

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_interrupt(&err) => {
            println!("\n{INTERRUPTED_NOTICE}");
            ExitCode::from(EXIT_INTERRUPTED)
        }
        Err(err) => {
            eprintln!("\nError: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Waits for `signal`, then prints the interrupt notice and returns the exit
/// status to leave with. Returns `None` if the signal could not be installed.
async fn on_interrupt<F>(signal: F, out: &mut impl Write) -> Option<u8>
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(err) = signal.await {
        warn!(%err, "ctrl-c signal handler failed");
        return None;
    }

    // The session may be mid-prompt; a failed write must not keep it alive.
    let _ = writeln!(out, "\n{INTERRUPTED_NOTICE}").and_then(|()| out.flush());
    Some(EXIT_INTERRUPTED)
}

fn is_interrupt(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<firefly_core::Error>(),
        Some(firefly_core::Error::Interrupted)
    )
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut settings = settings::load_settings(cli.settings.as_deref()).await?;
    if cli.no_pause {
        settings.pause_ms = 0;
    }

    let mut display = ConsoleDisplay::new(io::stdout(), settings.preview_chars);

    if cli.capabilities {
        view::capabilities(display.writer())?;
        return Ok(());
    }

    view::welcome(display.writer())?;
    let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
    if !cli.yes {
        prompter.wait_for_enter("Press Enter to start the demo...")?;
    }

    if settings.show_greeting {
        view::greeting(display.writer())?;
    }

    let messages = DemoSource.load(Utc::now());
    display.session_start(messages.len())?;
    info!(count = messages.len(), "Loaded demo inbox");

    let mut session = TriageSession::new(&settings);
    session.run(messages, &mut prompter, &mut display).await?;

    view::farewell(display.writer())?;
    display.writer().flush()?;
    Ok(())
}
