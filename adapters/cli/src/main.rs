#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs an interactive site clearing session.

mod config;
mod session;
mod summary;

use std::{io, path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use site_clearing_system_bulldozer::Bulldozer;
use site_clearing_world::Site;

use crate::{
    config::{ConfigFile, Settings},
    summary::SessionSummary,
};

#[derive(Debug, Parser)]
#[command(name = "site-clearing", about = "Clear a construction site with a remote bulldozer")]
struct Args {
    /// Path to the site map file.
    site_map: PathBuf,
    /// TOML file holding session settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write a JSON summary of the finished session to this path.
    #[arg(long)]
    summary_json: Option<PathBuf>,
    /// Only show the site at start-up and in the final report.
    #[arg(long)]
    quiet_map: bool,
}

/// Entry point for the site clearing command-line interface.
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let file = args
        .config
        .as_deref()
        .map(ConfigFile::load)
        .transpose()?;
    let settings = Settings::resolve(file, args.quiet_map, args.summary_json);

    let site = Site::load(&args.site_map)?;
    let mut bulldozer = Bulldozer::new(site);

    let stdin = io::stdin();
    let termination = session::run(
        &mut bulldozer,
        stdin.lock(),
        io::stdout().lock(),
        settings.show_site_after_command,
    )?;
    log::info!("session ended: {termination}");

    if let Some(path) = settings.summary_json.as_deref() {
        SessionSummary::capture(&bulldozer, termination).write(path)?;
    }
    Ok(())
}
