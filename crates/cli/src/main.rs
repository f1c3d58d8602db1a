// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod render;
mod repl;

#[cfg(test)]
mod tests;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use hirehive::{Logic, Model, SystemClock};
use hirehive_domain::AddressBook;
use hirehive_persistence::{
    Config, DEFAULT_CONFIG_FILE, JsonAddressBookStorage, LoadStatus, StorageManager, UserPrefs,
    load_config, load_user_prefs,
};
use repl::Screen;
use std::path::PathBuf;
use tracing::info;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// HireHive - track job applicants from application to offer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Path to the address book data file. Overrides the preferences for this session.
    #[arg(short, long)]
    data: Option<PathBuf>,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    /// The log filter used when `RUST_LOG` is unset: the command-line
    /// verbosity if given, otherwise the config file's level.
    fn log_filter(&self, config: &Config) -> String {
        if self.verbosity.is_present() {
            self.verbosity.log_level_filter().as_trace().to_string()
        } else {
            config.log_level.clone()
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    let config: Config = load_config(&args.config)
        .wrap_err_with(|| format!("Failed to prepare config file {}", args.config.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_filter(&config))),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting HireHive");
    let prefs: UserPrefs = load_user_prefs(&config.user_prefs_file_path)
        .wrap_err("Failed to prepare preferences file")?;
    let data_path: PathBuf = args
        .data
        .unwrap_or_else(|| prefs.address_book_file_path.clone());
    info!(data = %data_path.display(), "Using data file");

    let storage: StorageManager = StorageManager::new(
        JsonAddressBookStorage::new(data_path.clone()),
        config.user_prefs_file_path.clone(),
    );
    let (address_book, status): (AddressBook, LoadStatus) = storage.load_address_book();
    let screen: Screen = Screen {
        list_width: prefs.list_width,
        data_path,
    };
    let mut logic: Logic<StorageManager, SystemClock> =
        Logic::new(Model::with_address_book(address_book), storage, SystemClock);

    repl::run(&mut logic, &screen, status.message())?;

    logic
        .storage()
        .save_user_prefs(&prefs)
        .wrap_err("Failed to save preferences")?;
    info!("Stopping HireHive");
    Ok(())
}
