//! CLI for imgfetch.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_config, run_fetch};

/// Top-level CLI for imgfetch.
#[derive(Debug, Parser)]
#[command(name = "imgfetch", version)]
#[command(about = "Download an image over HTTP and save it to a local path", long_about = None)]
pub struct Cli {
    /// Read settings from this file instead of ~/.config/imgfetch/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the image and save it (default when no subcommand is given).
    Fetch {
        /// HTTP/HTTPS URL of the image; defaults to `source_url` from config.
        url: Option<String>,

        /// File to write, or directory to write into; defaults to `destination` from config.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Show the config file path and the effective settings.
    Config,
}

impl Cli {
    /// Parses arguments, runs the command and returns the single line to print.
    pub fn run_from_args() -> String {
        Cli::parse().run()
    }

    pub fn run(self) -> String {
        let command = self.command.unwrap_or(CliCommand::Fetch {
            url: None,
            output: None,
        });
        let result = match command {
            CliCommand::Fetch { url, output } => run_fetch(self.config.as_deref(), url, output),
            CliCommand::Config => run_config(self.config.as_deref()),
        };
        match result {
            Ok(line) => line,
            Err(err) => format!("Error: {:#}", err),
        }
    }
}
