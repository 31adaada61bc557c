// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::advice::fetch_advice;
use crate::config::Config;
use crate::store::Store;
use anyhow::Result;

// Never fails: the collaborator degrades to a fallback string internally.
pub fn handle(store: &Store, config: &Config) -> Result<()> {
    println!("{}", fetch_advice(config, store));
    Ok(())
}
