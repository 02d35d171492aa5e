// src/cli.rs
use std::{env, path::PathBuf};

use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::config::consts::DEFAULT_OUT_DIR;
use crate::progress::Progress;
use crate::{runner, store};

const USAGE: &str = "Usage: cli <tables.json> [out_dir]";

/// Prints rejected rows as they happen; the full list comes with the error.
struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn item_failed(&mut self, row: usize, subject: &str) {
        eprintln!("  row {row} ({subject}) rejected");
    }
}

pub fn run() -> Result<()> {
    let mut args = env::args().skip(1);
    let input = match args.next().as_deref() {
        None | Some("-h") | Some("--help") => {
            eprintln!("{USAGE}");
            return Ok(());
        }
        Some(p) => PathBuf::from(p),
    };
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
    if let Some(extra) = args.next() {
        return Err(eyre!("Unexpected argument: {extra}\n{USAGE}"));
    }

    let tables = store::load_tables(&input)
        .wrap_err_with(|| format!("reading {}", input.display()))?;

    let mut progress = StderrProgress;
    let ds = runner::build_dataset(&tables, Some(&mut progress))?;

    let written = store::write_dataset(&out_dir, &ds)
        .wrap_err_with(|| format!("writing {}", out_dir.display()))?;
    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
