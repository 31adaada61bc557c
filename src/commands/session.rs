// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{self, Config};
use crate::session::Mode;
use anyhow::Result;

pub fn handle(config: &mut Config, mode: Mode, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("status", _)) => {
            match &config.profile {
                Some(profile) => println!("Mode: {} (profile '{}')", mode.label(), profile),
                None => println!("Mode: {}", mode.label()),
            }
            println!(
                "Advice API key: {}",
                if config.api_key().is_some() { "configured" } else { "not set" }
            );
        }
        Some(("login", sub)) => {
            let profile = sub.get_one::<String>("profile").unwrap();
            config.profile = Some(profile.clone());
            config::save(config)?;
            println!("Logged in as '{}'; subsequent runs use the saved ledger", profile);
        }
        Some(("logout", _)) => {
            config.profile = None;
            config::save(config)?;
            println!("Logged out; subsequent runs use demo mode");
        }
        _ => {}
    }
    Ok(())
}
