// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thinkgate - difficulty-gated thinking for chat models.
//!
//! This is the binary entry point. Each request is classified by an assessor
//! model, tagged with `/think` or `/no_think`, and forwarded to the primary model.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod ask;
mod classify;
mod config_cmd;
mod input;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thinkgate_config::ThinkgateConfig;

use crate::input::InputArgs;

/// Thinkgate - difficulty-gated thinking for chat models.
#[derive(Parser, Debug)]
#[command(name = "thinkgate", version, about, long_about = None)]
struct Cli {
    /// Use this config file instead of the standard search path.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable colored console output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Annotate a request and send it to the primary model.
    Ask {
        #[command(flatten)]
        input: InputArgs,

        /// Print the raw `content` and `reasoning_content` fields of the reply.
        #[arg(long)]
        raw: bool,
    },
    /// Classify a request without calling the primary model.
    Classify {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print the effective configuration.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.plain {
        colored::control::set_override(false);
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            thinkgate_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.level);

    let result = match cli.command {
        Some(Commands::Ask { input, raw }) => ask::run_ask(&config, &input, raw).await,
        Some(Commands::Classify { input }) => classify::run_classify(&config, &input).await,
        Some(Commands::Config) => config_cmd::run_config(&config),
        None => {
            println!("thinkgate: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn load_config(
    path: Option<&std::path::Path>,
) -> Result<ThinkgateConfig, Vec<thinkgate_config::ConfigError>> {
    match path {
        Some(path) => thinkgate_config::load_and_validate_path(path),
        None => thinkgate_config::load_and_validate(),
    }
}

/// Logs go to stderr so stdout carries only console output.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("thinkgate={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
