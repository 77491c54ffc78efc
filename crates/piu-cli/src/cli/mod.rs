//! CLI for the PIU promo icon upload simulator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use piu_core::config;
use std::path::PathBuf;

use commands::{run_clean, run_completions, run_show, run_upload};

/// Top-level CLI for the PIU promo icon upload simulator.
#[derive(Debug, Parser)]
#[command(name = "piu")]
#[command(about = "PIU: simulate promo icon uploads and record the URL manifest", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Simulate uploading the promo icon set and write the URL manifest.
    Upload {
        /// Override the remote folder name spliced into every URL.
        #[arg(long)]
        folder: Option<String>,

        /// Override the base URL prefix for generated asset URLs.
        #[arg(long)]
        base_url: Option<String>,

        /// Write the manifest to this file instead of the configured name.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show the URL manifest from a previous run.
    Show,

    /// Remove the manifest and any stray placeholder files.
    Clean,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Upload {
                folder,
                base_url,
                output,
            } => {
                let work_dir = std::env::current_dir()?;
                run_upload(&cfg, &work_dir, folder, base_url, output)?;
            }
            CliCommand::Show => {
                let work_dir = std::env::current_dir()?;
                run_show(&cfg, &work_dir)?;
            }
            CliCommand::Clean => {
                let work_dir = std::env::current_dir()?;
                run_clean(&cfg, &work_dir)?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
