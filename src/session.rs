// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Result;
use crate::models::{ExpenseForm, ExpenseRecord, ImportRow, Table};
use crate::query::{self, Filter, QueryOutcome};
use crate::record::{build, build_from_import_row};
use crate::store::{self, LedgerStore};
use std::io::Read;
use tracing::{info, warn};

/// Owns the ledger table for one run. Every mutation goes through here and is
/// persisted straight away.
#[derive(Debug)]
pub struct Session {
    store: LedgerStore,
    table: Table,
}

impl Session {
    pub fn open(store: LedgerStore) -> Result<Self> {
        let table = store.load()?;
        Ok(Session { store, table })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// Records one manually entered expense.
    ///
    /// If saving fails the record stays in memory and the error is returned,
    /// so [`Session::save`] can be retried without re-entering it.
    pub fn add(&mut self, form: &ExpenseForm) -> Result<ExpenseRecord> {
        let record = build(form)?;
        self.table.append([record.clone()]);
        info!(id = %record.id, date = %record.date_local, amount = record.amount, "expense added");
        self.save()?;
        Ok(record)
    }

    /// Appends every row or none of them.
    pub fn import(&mut self, rows: &[ImportRow]) -> Result<usize> {
        let mut batch = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            match build_from_import_row(row) {
                Ok(record) => batch.push(record),
                Err(e) => {
                    warn!(row = i + 1, error = %e, "import rejected");
                    return Err(e);
                }
            }
        }
        let added = batch.len();
        self.table.append(batch);
        info!(added, "expenses imported");
        self.save()?;
        Ok(added)
    }

    pub fn import_csv<R: Read>(&mut self, reader: R) -> Result<usize> {
        let rows = store::read_import_rows(reader)?;
        self.import(&rows)
    }

    /// Drops every record and persists the empty table.
    pub fn reset(&mut self) -> Result<()> {
        let dropped = self.table.len();
        self.table = Table::new();
        info!(dropped, "ledger reset");
        self.save()
    }

    pub fn export_csv(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        store::write_table(&mut out, &self.table)?;
        Ok(out)
    }

    pub fn query(&self, filter: &Filter) -> Result<QueryOutcome<'_>> {
        query::query(&self.table, filter)
    }

    pub fn save(&self) -> Result<()> {
        self.store.save(&self.table)
    }
}
