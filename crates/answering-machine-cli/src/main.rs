//! Answering Machine CLI
//!
//! Terminal front end for the same message views the desktop app uses.
//!
//! ## Usage
//!
//! ```bash
//! # Show backend and session
//! answering-machine --user alice info
//!
//! # List your messages
//! answering-machine --user alice list
//!
//! # Leave a message
//! answering-machine --user alice send "Call me back when you can"
//!
//! # Talk to a remote API instead of the local store
//! answering-machine --endpoint https://api.example.com/prod --token <token> list
//! ```

use std::path::PathBuf;

use anyhow::Result;
use answering_machine_core::config::{default_data_dir, ClientConfig};
use answering_machine_core::{
    ComposerController, ListView, MessageListController, NavRequest, SharedBackend, Session,
};
use clap::{Parser, Subcommand};

/// Answering Machine - leave me a message
#[derive(Parser)]
#[command(name = "answering-machine")]
#[command(version = "0.1.0")]
#[command(about = "Answering Machine - leave a message, read your messages")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Remote API base URL (uses the local store when omitted)
    #[arg(short, long, global = true, env = "ANSWERING_MACHINE_ENDPOINT")]
    endpoint: Option<String>,

    /// Bearer token for the remote API
    #[arg(short, long, global = true, env = "ANSWERING_MACHINE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Signed-in user
    #[arg(short, long, global = true, env = "ANSWERING_MACHINE_USER")]
    user: Option<String>,

    /// Data directory for the local store
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show backend and session information
    Info,

    /// List your messages
    List {
        /// Print the full content instead of the first line
        #[arg(long)]
        full: bool,
    },

    /// Leave a new message
    Send {
        /// Message content (1-99 characters)
        content: String,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_landing() {
    println!("Answering Machine App");
    println!();
    println!("  This is an application where users can leave me a message on my answering machine.");
    println!("  Sign up or log in to leave a message (pass --user or --token).");
}

async fn list(backend: SharedBackend, session: Session, full: bool) -> Result<()> {
    let mut view = MessageListController::new(backend);
    view.activate(session).await;

    let (rows, notice) = match view.state().view() {
        ListView::Landing => {
            print_landing();
            return Ok(());
        }
        ListView::Table { rows, notice, .. } => (rows, notice),
    };

    // A failed fetch still renders the (empty) table
    if let Some(notice) = &notice {
        eprintln!("{}", notice.text);
    }

    println!("Messages:");
    println!();
    if rows.is_empty() {
        println!("  (no messages yet)");
        println!();
        println!("  Leave one with:");
        println!("  answering-machine send \"Hello!\"");
        return Ok(());
    }

    for (row, message) in rows.iter().zip(view.state().messages()) {
        println!("  {}  {}", row.created, row.summary);
        if full && message.content().trim() != row.summary {
            for line in message.content().lines() {
                println!("      {}", line);
            }
        }
    }
    Ok(())
}

async fn send(backend: SharedBackend, session: Session, content: String) -> Result<()> {
    if !session.is_authenticated() {
        print_landing();
        anyhow::bail!("not signed in");
    }

    let mut composer = ComposerController::new(backend, session);
    composer.edit(content).await;

    if let Err(e) = composer.state().draft().validate() {
        anyhow::bail!("Cannot send: {}", e);
    }

    let nav = composer.submit().await;
    if let Some(notice) = composer.state().notice() {
        anyhow::bail!(notice.text.clone());
    }

    if nav.contains(&NavRequest::ToList) {
        println!("Message sent.");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = ClientConfig {
        endpoint: cli.endpoint,
        token: cli.token,
        user: cli.user,
        data_dir: cli.data_dir.unwrap_or_else(default_data_dir),
    };
    let session = config.session();

    match cli.command {
        Commands::Info => {
            println!("Answering Machine v0.1.0");
            println!();
            match &config.endpoint {
                Some(endpoint) => println!("Backend: remote ({})", endpoint),
                None => println!("Backend: local ({})", config.data_dir.display()),
            }
            match session.caller() {
                Some(caller) => println!("Signed in as: {}", caller),
                None => println!("Signed in as: (nobody)"),
            }
        }

        Commands::List { full } => {
            let backend = config.backend()?;
            list(backend, session, full).await?;
        }

        Commands::Send { content } => {
            let backend = config.backend()?;
            send(backend, session, content).await?;
        }
    }

    Ok(())
}
