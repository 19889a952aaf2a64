use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "beacon-compliance",
    about = "Checks how a Beacon answers every verb of its HTTP API",
    version
)]
pub struct Cli {
    /// Base url of the Beacon (alternatively use BEACON_URL env var)
    #[arg(long, env = "BEACON_URL")]
    pub url: Option<String>,

    /// Configuration file (TOML, or JSON/YAML by extension)
    #[arg(long, default_value = "beacon-compliance.toml")]
    pub config: String,

    /// Write a default configuration file and exit
    #[arg(long)]
    pub create_config: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log to a file instead of stderr
    #[arg(long)]
    pub log_to_file: bool,

    /// Write the report as JSON to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Skip sending the POST query twice and comparing the answers
    #[arg(long)]
    pub skip_idempotency: bool,
}
