// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use financepro::{cli, commands, config, session, storage, store::Store};

fn main() -> Result<()> {
    init_logger();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut config = config::load()?;
    let mode = session::resolve(matches.get_flag("demo"), &config);
    let mut store = if mode.is_authenticated() {
        storage::open_ledger()?
    } else {
        Store::demo()
    };

    match matches.subcommand() {
        Some(("account", sub)) => commands::accounts::handle(&mut store, sub)?,
        Some(("category", sub)) => commands::categories::handle(&store, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut store, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&store, &config, mode, sub)?,
        Some(("advice", _)) => commands::advice::handle(&store, &config)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        Some(("session", sub)) => commands::session::handle(&mut config, mode, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }

    // Demo state lives only for the process lifetime.
    if mode.is_authenticated() {
        storage::save(&store.snapshot())?;
    }
    Ok(())
}

fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}
