mod check;
mod cli;
mod config;
mod discover;
mod progress;
mod report;
mod source;
mod types;

use std::path::{Path, PathBuf};

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = match config::resolve_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e:#}");
            std::process::exit(2);
        }
    };

    match cli.command {
        Commands::List { file, json } => {
            let path = target_path(file, &cfg);
            let content = read_or_exit(&path);
            match discover::run_list(&content, &path, &cfg, json) {
                Ok(true) => std::process::exit(0),
                Ok(false) => std::process::exit(1),
                Err(e) => {
                    eprintln!("Error: {e:#}");
                    std::process::exit(2);
                }
            }
        }
        Commands::Verify {
            file,
            json,
            junit,
            strict,
        } => {
            let path = target_path(file, &cfg);
            let html = read_or_exit(&path);
            match check::run_verify(&html, &path, &cfg, json, junit.as_deref()) {
                Ok(all_passed) => {
                    if strict && !all_passed {
                        std::process::exit(1);
                    }
                    std::process::exit(0);
                }
                Err(e) => {
                    eprintln!("Error: {e:#}");
                    std::process::exit(2);
                }
            }
        }
    }
}

/// `--verbose` raises the default filter to debug; `RUST_LOG` still wins.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn target_path(file: Option<PathBuf>, cfg: &config::Config) -> PathBuf {
    let path = file.unwrap_or_else(|| cfg.target.path.clone());
    log::debug!("Inspecting {}", path.display());
    path
}

/// Read the application file, or report it as unavailable and exit before any check runs.
fn read_or_exit(path: &Path) -> String {
    match source::read_source_with_progress(path) {
        Ok(content) => content,
        Err(e) => {
            println!("❌ Error reading {}: {}", path.display(), e.root_cause());
            std::process::exit(2);
        }
    }
}
