// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

/// Ledger columns, in file order.
pub const COLUMNS: [&str; 6] = [
    "id",
    "date_local",
    "date_gregorian",
    "amount",
    "description",
    "card",
];

/// Columns an imported file must carry.
pub const REQUIRED_IMPORT_COLUMNS: [&str; 2] = ["date_local", "amount"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseRecord {
    pub id: String,
    pub date_local: String,     // Jalali YYYY-MM-DD
    pub date_gregorian: String, // ISO-8601, derived once at creation
    pub amount: u64,
    pub description: String,
    pub card: String,
}

/// Raw values submitted by the add-expense form.
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub date_local: String,
    pub amount: Decimal,
    pub description: String,
    pub card: String,
}

/// One row of an imported file, keyed by column name. Absent columns are absent keys.
pub type ImportRow = HashMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Table {
    records: Vec<ExpenseRecord>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpenseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn append(&mut self, batch: impl IntoIterator<Item = ExpenseRecord>) {
        self.records.extend(batch);
    }
}

impl From<Vec<ExpenseRecord>> for Table {
    fn from(records: Vec<ExpenseRecord>) -> Self {
        Table { records }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a ExpenseRecord;
    type IntoIter = std::slice::Iter<'a, ExpenseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
