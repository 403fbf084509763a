use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "lea-verify",
    version,
    about = "Static verification of the LEA regression test suite"
)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: ./lea-verify.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List regression tests registered in the application file
    List {
        /// Application file to inspect (default: target.path from config, else index.html)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the application file for the signatures each regression test relies on
    Verify {
        /// Application file to inspect (default: target.path from config, else index.html)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print results as JSON instead of the console report
        #[arg(long)]
        json: bool,

        /// Also write results as JUnit XML to this path
        #[arg(long)]
        junit: Option<PathBuf>,

        /// Exit with status 1 when any check fails
        #[arg(long)]
        strict: bool,
    },
}
