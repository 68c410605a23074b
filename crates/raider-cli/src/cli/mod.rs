//! CLI for raider request files.

mod commands;
mod request_file;

use anyhow::Result;
use clap::{Parser, Subcommand};
use raider_core::request::SendError;
use std::path::PathBuf;

use commands::{run_inputs, run_send, SendOptions};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "raider")]
#[command(about = "raider: parameterized HTTP requests for authentication testing", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the inputs (user data keys and plugins) a request file needs.
    Inputs {
        /// Path to the request file (TOML).
        file: PathBuf,
    },

    /// Resolve a request file against the active user and send it.
    Send {
        /// Path to the request file (TOML).
        file: PathBuf,

        /// Use this user from the configuration instead of `active_user`.
        #[arg(long, value_name = "NAME")]
        user: Option<String>,

        /// Configuration file (default: ~/.config/raider/config.toml).
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Never ask on the terminal; unresolved values are dropped.
        #[arg(long)]
        no_prompt: bool,

        /// Do not verify TLS certificates.
        #[arg(long)]
        insecure: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.command.run()
    }

    fn run(self) -> Result<()> {
        match self {
            CliCommand::Inputs { file } => run_inputs(&file),
            CliCommand::Send {
                file,
                user,
                config,
                no_prompt,
                insecure,
            } => {
                let opts = SendOptions {
                    user,
                    config,
                    no_prompt,
                    insecure,
                };
                run_send(&file, &opts)
            }
        }
    }
}

/// 2 when the target was unreachable, 1 for any other failure.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<SendError>() {
        Some(e) if e.is_connection() => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests;
