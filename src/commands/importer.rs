// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::Session;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;

pub fn handle(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub
        .get_one::<String>("path")
        .map(|s| s.trim())
        .context("--path is required")?;
    let file = File::open(path).with_context(|| format!("Open CSV {}", path))?;

    let added = session
        .import_csv(BufReader::new(file))
        .with_context(|| format!("Import from {} rejected, nothing was added", path))?;
    println!("Imported {} expenses from {}", added, path);
    Ok(())
}
