// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use kharj::{cli, commands::importer, session::Session, store::LedgerStore};
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn run_import(session: &mut Session, path: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from(["kharj", "import", "--path", path]);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(session, import_m)
    } else {
        panic!("no import subcommand");
    }
}

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn importer_trims_cli_path_argument() {
    let dir = tempdir().unwrap();
    let mut session = Session::open(LedgerStore::new(dir.path().join("expenses.csv"))).unwrap();
    let file = csv_file("date_local,amount,description,card\n1403-05-25,50000,fruit,cash\n");

    let padded = format!("  {}  ", file.path().to_str().unwrap());
    run_import(&mut session, &padded).unwrap();
    assert_eq!(session.table().len(), 1);
    assert_eq!(session.table().records()[0].date_gregorian, "2024-08-15");
}

#[test]
fn importer_accepts_legacy_date_header() {
    let dir = tempdir().unwrap();
    let mut session = Session::open(LedgerStore::new(dir.path().join("expenses.csv"))).unwrap();
    let file = csv_file("date_jalali,amount\n1403-01-01,10\n1403-12-30,20\n");

    run_import(&mut session, file.path().to_str().unwrap()).unwrap();
    let dates: Vec<&str> = session
        .table()
        .iter()
        .map(|r| r.date_gregorian.as_str())
        .collect();
    assert_eq!(dates, vec!["2024-03-20", "2025-03-20"]);
}

#[test]
fn importer_rejects_whole_file_on_bad_row() {
    let dir = tempdir().unwrap();
    let ledger = dir.path().join("expenses.csv");
    let mut session = Session::open(LedgerStore::new(&ledger)).unwrap();
    let file = csv_file("date_local,amount\n1403-05-25,100\n,200\n");

    let err = run_import(&mut session, file.path().to_str().unwrap()).unwrap_err();
    assert!(format!("{:#}", err).contains("nothing was added"));
    assert!(session.table().is_empty());
    assert!(!ledger.exists());
}

#[test]
fn importer_reports_missing_file() {
    let dir = tempdir().unwrap();
    let mut session = Session::open(LedgerStore::new(dir.path().join("expenses.csv"))).unwrap();
    let missing = dir.path().join("nope.csv");
    assert!(run_import(&mut session, missing.to_str().unwrap()).is_err());
}
