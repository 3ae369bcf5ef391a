// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calendar::local_to_gregorian;
use crate::error::LedgerError;
use crate::models::Table;
use crate::utils::pretty_table;
use anyhow::Result;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub kind: &'static str,
    pub detail: String,
}

pub fn handle(table: &Table) -> Result<()> {
    let issues = diagnose(table)?;
    if issues.is_empty() {
        println!("✅ doctor: no issues found in {} expenses", table.len());
    } else {
        let rows = issues
            .into_iter()
            .map(|i| vec![i.kind.to_string(), i.detail])
            .collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// Read-only consistency checks. Stored values are reported, never rewritten.
pub fn diagnose(table: &Table) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();
    let mut push = |kind, detail: String| issues.push(Issue { kind, detail });

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (row, r) in table.iter().enumerate() {
        let row = row + 1;
        if r.id.is_empty() {
            push("missing_id", format!("row {}", row));
        } else if let Some(first) = seen.insert(r.id.as_str(), row) {
            push("duplicate_id", format!("{} (rows {} and {})", r.id, first, row));
        }

        match local_to_gregorian(&r.date_local) {
            Ok(g) => {
                let expected = g.format("%Y-%m-%d").to_string();
                if r.date_gregorian != expected {
                    push(
                        "date_mismatch",
                        format!(
                            "row {}: {} is {} but stored as '{}'",
                            row, r.date_local, expected, r.date_gregorian
                        ),
                    );
                }
            }
            Err(LedgerError::CalendarUnavailable) => return Err(LedgerError::CalendarUnavailable.into()),
            Err(_) => push("bad_date", format!("row {}: '{}'", row, r.date_local)),
        }

        if r.amount == 0 {
            push("zero_amount", format!("row {}: '{}'", row, r.description));
        }
    }
    Ok(issues)
}
