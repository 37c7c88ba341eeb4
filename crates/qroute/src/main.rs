// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Qroute - a chatbot that routes each query to a direct answer, live web
//! data, or the SQL database.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod app;
mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use qroute_config::QrouteConfig;
use tracing_subscriber::EnvFilter;

/// Qroute - route questions to the right answering strategy.
#[derive(Parser, Debug)]
#[command(name = "qroute", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch the interactive chat loop (default).
    Shell,
    /// Route a single query and print the response.
    Ask {
        /// The query text; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Print the label and per-label scores for a query without answering it.
    Classify {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => qroute_config::load_and_validate_path(path),
        None => qroute_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            qroute_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    let result = match cli.command {
        None | Some(Commands::Shell) => shell::run_shell(&config).await,
        Some(Commands::Ask { query }) => app::run_ask(&config, &query.join(" ")).await,
        Some(Commands::Classify { query }) => app::run_classify(&config, &query.join(" ")),
    };

    if let Err(e) = result {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `agent.log_level`. Logs go to stderr so they never
/// mix with responses on stdout.
fn init_tracing(config: &QrouteConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("qroute={},warn", config.agent.log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
