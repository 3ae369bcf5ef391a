// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use kharj::session::Session;
use kharj::store::{self, LedgerStore};
use kharj::{cli, commands};

fn init_tracing() {
    let filter = EnvFilter::try_from_env("KHARJ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let matches = cli::build_cli().get_matches();

    // conversions need no ledger
    if let Some(("date", sub)) = matches.subcommand() {
        return commands::dates::handle(sub);
    }

    let path = match matches.get_one::<String>("file") {
        Some(p) => PathBuf::from(p),
        None => store::default_path()?,
    };
    let mut session = Session::open(LedgerStore::new(path))?;

    match matches.subcommand() {
        Some(("init", _)) => {
            if !session.store().exists() {
                session.save()?;
            }
            println!("Ledger file at {}", session.store().path().display());
        }
        Some(("add", sub)) => commands::expenses::add(&mut session, sub)?,
        Some(("list", sub)) => commands::expenses::list(&session, sub)?,
        Some(("summary", sub)) => commands::reports::handle(&session, sub)?,
        Some(("import", sub)) => commands::importer::handle(&mut session, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&session, sub)?,
        Some(("reset", sub)) => commands::reset::handle(&mut session, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(session.table())?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
