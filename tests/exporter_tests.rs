// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use kharj::{cli, commands::exporter, models::ExpenseForm, session::Session, store::LedgerStore};
use rust_decimal::Decimal;
use serde_json::json;
use tempfile::tempdir;

fn seeded(dir: &std::path::Path) -> Session {
    let mut session = Session::open(LedgerStore::new(dir.join("expenses.csv"))).unwrap();
    session
        .add(&ExpenseForm {
            date_local: "1403-05-25".into(),
            amount: Decimal::from(50_000),
            description: "fruit".into(),
            card: "cash".into(),
        })
        .unwrap();
    session
}

fn run_export(session: &Session, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["kharj", "export"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(session, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_csv_matches_ledger_file() {
    let dir = tempdir().unwrap();
    let session = seeded(dir.path());
    let out = dir.path().join("export.csv");
    run_export(&session, &["--out", out.to_str().unwrap()]).unwrap();

    assert_eq!(
        std::fs::read(&out).unwrap(),
        std::fs::read(dir.path().join("expenses.csv")).unwrap()
    );
}

#[test]
fn export_json_lists_records() {
    let dir = tempdir().unwrap();
    let session = seeded(dir.path());
    let out = dir.path().join("export.json");
    run_export(&session, &["--format", "JSON", "--out", out.to_str().unwrap()]).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let id = session.table().records()[0].id.clone();
    assert_eq!(
        parsed,
        json!([
            {
                "id": id,
                "date_local": "1403-05-25",
                "date_gregorian": "2024-08-15",
                "amount": 50000,
                "description": "fruit",
                "card": "cash"
            }
        ])
    );
}

#[test]
fn export_rejects_unknown_format() {
    let dir = tempdir().unwrap();
    let session = seeded(dir.path());
    let out = dir.path().join("export.xml");
    assert!(run_export(&session, &["--format", "xml", "--out", out.to_str().unwrap()]).is_err());
    assert!(!out.exists());
}
