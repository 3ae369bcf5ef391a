// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::Session;
use anyhow::{bail, Context, Result};
use std::io::Write;

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".to_string());
    let bytes = match fmt.as_str() {
        "csv" => session.export_csv()?,
        "json" => serde_json::to_vec_pretty(session.table())?,
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    };

    match sub.get_one::<String>("out") {
        Some(out) => {
            std::fs::write(out, &bytes).with_context(|| format!("Write {}", out))?;
            println!("Exported {} expenses to {}", session.table().len(), out);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
