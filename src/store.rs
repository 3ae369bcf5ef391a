// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, Result};
use crate::models::{COLUMNS, ExpenseRecord, ImportRow, REQUIRED_IMPORT_COLUMNS, Table};
use crate::record::coerce_amount;
use anyhow::Context;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("org", "Kharj", "kharj"));

pub const DATA_FILE: &str = "expenses.csv";

// Header used for the Jalali date by files written before the column rename.
const LEGACY_DATE_COLUMN: &str = "date_jalali";

/// Default ledger location inside the platform data directory.
pub fn default_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().join(DATA_FILE))
}

#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the ledger file, or returns an empty table when there is none yet.
    pub fn load(&self) -> Result<Table> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no ledger file yet, starting empty");
            return Ok(Table::new());
        }
        let load_err = |source: csv::Error| LedgerError::Load {
            path: self.path.clone(),
            source,
        };
        let file = File::open(&self.path).map_err(|e| load_err(e.into()))?;
        let table = read_table(BufReader::new(file)).map_err(load_err)?;
        debug!(path = %self.path.display(), records = table.len(), "ledger loaded");
        Ok(table)
    }

    /// Rewrites the whole file. The new content goes to a sibling temp file
    /// first and is renamed over the ledger, so readers never see a partial file.
    pub fn save(&self, table: &Table) -> Result<()> {
        let persist_err = |source: io::Error| LedgerError::Persistence {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(persist_err)?;
        }

        let temp_path = self.path.with_extension("csv.tmp");
        let written = File::create(&temp_path)
            .and_then(|file| {
                let mut out = BufWriter::new(file);
                write_table(&mut out, table)?;
                out.flush()?;
                out.get_ref().sync_all()
            })
            .and_then(|_| fs::rename(&temp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(persist_err(e));
        }
        info!(path = %self.path.display(), records = table.len(), "ledger saved");
        Ok(())
    }
}

/// Parses ledger CSV into a table with exactly the fixed columns.
///
/// Missing columns come back as empty strings, unknown columns are dropped and
/// the amount is coerced with [`coerce_amount`].
pub fn read_table<R: Read>(reader: R) -> std::result::Result<Table, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();
    let positions: Vec<Option<usize>> = COLUMNS
        .iter()
        .map(|col| column_position(&headers, col))
        .collect();

    let mut records = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        let field = |i: usize| {
            positions[i]
                .and_then(|pos| rec.get(pos))
                .unwrap_or("")
                .to_string()
        };
        records.push(ExpenseRecord {
            id: field(0),
            date_local: field(1),
            date_gregorian: field(2),
            amount: coerce_amount(&field(3)),
            description: field(4),
            card: field(5),
        });
    }
    Ok(Table::from(records))
}

/// Writes the header and every record. An empty table still gets its header.
pub fn write_table<W: Write>(writer: W, table: &Table) -> std::result::Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(COLUMNS)?;
    for rec in table {
        wtr.serialize(rec)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Reads an import file into column-keyed rows.
///
/// Fails with `MissingColumn` when the header lacks a required column. Short
/// rows simply omit the trailing keys; the record builder reports those.
pub fn read_import_rows<R: Read>(reader: R) -> Result<Vec<ImportRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = rdr.headers()?.iter().map(clean_header).collect();
    for required in REQUIRED_IMPORT_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(LedgerError::MissingColumn(required.to_string()));
        }
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        let row: ImportRow = headers
            .iter()
            .zip(rec.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

fn column_position(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| clean_header(h) == name)
}

/// Strips a UTF-8 BOM and whitespace and maps legacy header names.
fn clean_header(raw: &str) -> String {
    match raw.trim_start_matches('\u{feff}').trim() {
        LEGACY_DATE_COLUMN => "date_local".to_string(),
        other => other.to_string(),
    }
}
