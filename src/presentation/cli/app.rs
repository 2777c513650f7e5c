use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sitecheck — client-side web session diagnostics
///
/// Probes a captured page session (browser identity, storage, network,
/// performance), evaluates an issue ruleset, and offers remediations.
#[derive(Parser, Debug)]
#[command(name = "sitecheck")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the session capture JSON exported from the browser
    #[arg(short, long, global = true)]
    pub session: Option<PathBuf>,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a full diagnostic scan of the session
    #[command(alias = "s")]
    Scan {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Wipe every storage backend of the session
    #[command(alias = "cl")]
    Clean,

    /// Test network reachability of the site and reference endpoints
    #[command(alias = "n")]
    Nettest,

    /// Render the plain-text diagnostic report
    #[command(alias = "r")]
    Report {
        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Take a screenshot of the page via the configured renderer
    Capture {
        /// Output image path
        #[arg(short, long, default_value = "screenshot.png")]
        output: PathBuf,
    },
}
