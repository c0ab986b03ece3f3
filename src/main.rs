#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use anyhow::Result;
use answering_machine_core::config::{default_data_dir, ClientConfig};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::MachineContext;

/// Answering Machine - leave me a message
#[derive(Parser, Debug)]
#[command(name = "answering-machine-desktop")]
#[command(about = "Answering Machine - leave a message, read your messages")]
struct Args {
    /// Remote API base URL (uses the local store when omitted)
    #[arg(short, long, env = "ANSWERING_MACHINE_ENDPOINT")]
    endpoint: Option<String>,

    /// Bearer token for the remote API
    #[arg(short, long, env = "ANSWERING_MACHINE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Signed-in user; without a user or token you see the landing page
    #[arg(short, long, env = "ANSWERING_MACHINE_USER")]
    user: Option<String>,

    /// Data directory for the local store
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
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
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose);

    let config = ClientConfig {
        endpoint: args.endpoint,
        token: args.token,
        user: args.user,
        data_dir: args.data_dir.unwrap_or_else(default_data_dir),
    };

    let session = config.session();
    let backend = config.backend()?;

    let title = match session.caller() {
        Some(caller) => format!("Answering Machine - {}", caller),
        None => "Answering Machine".to_string(),
    };

    tracing::info!(
        "Starting with {} backend, signed in: {}",
        backend.name(),
        session.is_authenticated()
    );

    context::install(MachineContext { backend, session });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(800.0, 700.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
