// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::Session;
use anyhow::{bail, Result};

pub fn handle(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    if !sub.get_flag("yes") {
        bail!(
            "Refusing to delete {} expenses without --yes (back up {} first)",
            session.table().len(),
            session.store().path().display()
        );
    }
    session.reset()?;
    println!("All expenses cleared");
    Ok(())
}
