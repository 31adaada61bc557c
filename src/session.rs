// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;

/// Operating mode for the session. The rest of the system only ever asks
/// the boolean question; how the gate decided is its own business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Demo,
    Authenticated,
}

impl Mode {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Authenticated => "authenticated",
        }
    }
}

/// Demo unless a profile is configured; `--demo` forces demo regardless,
/// mirroring the fallback when the auth backend is unconfigured.
pub fn resolve(force_demo: bool, config: &Config) -> Mode {
    if force_demo || config.profile.is_none() {
        Mode::Demo
    } else {
        Mode::Authenticated
    }
}
