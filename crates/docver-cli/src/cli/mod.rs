//! CLI for docver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use docver_core::config::{self, DocverConfig};
use std::path::{Path, PathBuf};

use commands::{run_current, run_options, run_rewrite, run_switch};

/// Top-level CLI for docver.
#[derive(Debug, Parser)]
#[command(name = "docver")]
#[command(about = "docver: switch the version segment of documentation URLs", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the XDG config dir.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the URL with its version segment replaced (unchanged if none).
    Rewrite {
        /// Documentation page URL.
        url: String,
        /// Version to put in the URL, inserted verbatim.
        version: String,
    },

    /// Run the version picker change handler for a page and selection.
    Switch {
        /// Current page URL.
        url: String,
        /// Version chosen in the picker.
        version: String,
    },

    /// Print the version segment of a URL.
    Current {
        /// Documentation page URL.
        url: String,
    },

    /// List the configured picker options for a page, marking the selected one.
    Options {
        /// Current page URL.
        url: String,
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

fn load_config(path: Option<&Path>) -> Result<DocverConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Rewrite { url, version } => run_rewrite(&cfg, &url, &version)?,
            CliCommand::Switch { url, version } => run_switch(&cfg, &url, &version)?,
            CliCommand::Current { url } => run_current(&cfg, &url)?,
            CliCommand::Options { url, json } => run_options(&cfg, &url, json)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
