//! boolcalc CLI - binary entry point.
//!
//! ```text
//! main() -> init_tracing() -> BoolcalcConfig::load() -> RunMode::resolve()
//!                                                          |
//!                      Menu: Session::run(stdin, stdout)  |  Tables / Demo: print and exit
//! ```
//!
//! Stdout carries the interactive protocol, so logs only ever go to a file.

mod mode;

use anyhow::Result;
use std::{
    env,
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use boolcalc_config::BoolcalcConfig;
use boolcalc_engine::{Session, demo};

use mode::{RunMode, USAGE};

const LOG_FILE: &str = "boolcalc.log";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let mut failures = Vec::new();
    let opened = log_file_candidates()
        .into_iter()
        .find_map(|path| match open_append(&path) {
            Ok(file) => Some((path, file)),
            Err(e) => {
                failures.push(format!("{}: {e}", path.display()));
                None
            }
        });

    // No log file: stay silent rather than write into the menu output.
    let Some((path, file)) = opened else {
        return;
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(filter)
        .init();

    tracing::info!(path = %path.display(), "Logging initialized");
    for failure in failures {
        tracing::warn!("Log file unavailable: {failure}");
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// `~/.boolcalc/logs` first, then `./.boolcalc/logs`.
fn log_file_candidates() -> Vec<PathBuf> {
    let home_logs = BoolcalcConfig::path()
        .and_then(|config| config.parent().map(|dir| dir.join("logs")));
    home_logs
        .into_iter()
        .chain([PathBuf::from(".boolcalc").join("logs")])
        .map(|dir| dir.join(LOG_FILE))
        .collect()
}

fn load_config() -> Option<BoolcalcConfig> {
    match BoolcalcConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "{err}");
            None
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = load_config();
    let arg = env::args().nth(1);
    let mode = RunMode::resolve(arg.as_deref(), config.as_ref())?;
    let policy = config
        .as_ref()
        .map(BoolcalcConfig::input_policy)
        .unwrap_or_default();
    tracing::info!(mode = mode.as_str(), policy = policy.as_str(), "Starting");

    let mut out = io::stdout().lock();
    match mode {
        RunMode::Menu => {
            let mut session = Session::new(io::stdin().lock(), out).with_policy(policy);
            session.run()?;
        }
        RunMode::Tables => demo::write_tables(&mut out)?,
        RunMode::Demo => demo::write_demo(&mut out)?,
        RunMode::Help => writeln!(out, "{USAGE}")?,
    }

    Ok(())
}
