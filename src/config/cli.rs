use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "config-properties")]
#[command(about = "Manage application configuration properties")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override storage.base_path from the config file
    #[arg(long)]
    pub data_dir: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Serialize, Deserialize, clap::Args)]
pub struct ContextArgs {
    pub application: String,

    /// Defaults to defaults.profile
    #[arg(long)]
    pub profile: Option<String>,

    /// Defaults to defaults.label
    #[arg(long)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// List the properties of an application
    List {
        #[command(flatten)]
        context: ContextArgs,
    },
    /// Create or replace a single property
    Set {
        #[command(flatten)]
        context: ContextArgs,
        key: String,
        value: String,
    },
    /// Import a JSON batch of new properties
    Import {
        file: String,
    },
    /// Delete a single property
    Delete {
        #[command(flatten)]
        context: ContextArgs,
        key: String,
    },
    /// Export the properties of an application
    Export {
        #[command(flatten)]
        context: ContextArgs,
        #[arg(long, default_value = "csv")]
        format: String,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}
