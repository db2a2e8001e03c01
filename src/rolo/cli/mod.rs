//! # CLI Layer
//!
//! The interactive shell: the only part of rolo that reads stdin, writes
//! stdout or exits the process.
//!
//! - `setup`: clap arguments and the tracing subscriber
//! - `command`: typed top-level commands parsed from a line
//! - `console`: the [`console::Console`] seam and its rustyline implementation
//! - `handlers`: per-command prompt flows that call the API
//! - `repl`: the read-dispatch-show loop, saving on the way out
//! - `help`, `print`: help text and coloured output

mod command;
mod console;
mod handlers;
mod help;
mod print;
mod repl;
mod setup;

use clap::Parser;
use directories::ProjectDirs;
use print::print_result;
use rolo::api::RoloApi;
use rolo::config::RoloConfig;
use rolo::error::{Result, RoloError};
use rolo::store::fs::FileStore;
use setup::{init_tracing, Cli};
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let data_dir = resolve_data_dir(&cli)?;
    let config = RoloConfig::load(&data_dir)?;
    tracing::debug!(dir = %data_dir.display(), "using data directory");

    let store = FileStore::new(data_dir).with_config(&config);
    let (mut api, loaded) = RoloApi::open(store, config);
    print_result(&loaded);

    println!("Hello!");
    let reminder = api.reminder()?;
    if reminder.is_empty() {
        println!();
    } else {
        print_result(&reminder);
    }

    let mut terminal = console::Terminal::new()?;
    repl::run(&mut api, &mut terminal)
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "rolo", "rolo")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RoloError::Store("Could not determine data directory".into()))
}
