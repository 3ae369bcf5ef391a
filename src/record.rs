// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calendar::local_to_gregorian;
use crate::error::{LedgerError, Result};
use crate::models::{ExpenseForm, ExpenseRecord, ImportRow};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use uuid::Uuid;

/// Validates a manually entered expense and turns it into a record.
pub fn build(form: &ExpenseForm) -> Result<ExpenseRecord> {
    let date_local = form.date_local.as_str();
    if date_local.is_empty() {
        return Err(LedgerError::MissingDate);
    }
    let amount = whole_units(form.amount)
        .filter(|a| *a > 0)
        .ok_or(LedgerError::NonPositiveAmount)?;
    assemble(date_local, amount, &form.description, &form.card)
}

/// Builds a record from an imported row. Unlike [`build`], a non-numeric or
/// zero amount is accepted and stored as 0.
pub fn build_from_import_row(row: &ImportRow) -> Result<ExpenseRecord> {
    let column = |name: &str| {
        row.get(name)
            .map(String::as_str)
            .ok_or_else(|| LedgerError::MissingColumn(name.to_string()))
    };
    let date_local = column("date_local")?;
    let amount = coerce_amount(column("amount")?);
    if date_local.is_empty() {
        return Err(LedgerError::MissingDate);
    }
    let description = row.get("description").map(String::as_str).unwrap_or("");
    let card = row.get("card").map(String::as_str).unwrap_or("");
    assemble(date_local, amount, description, card)
}

/// Lenient numeric coercion: anything unparsable or negative becomes 0,
/// fractions are truncated.
pub fn coerce_amount(raw: &str) -> u64 {
    let raw = raw.trim();
    raw.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
        .and_then(whole_units)
        .unwrap_or(0)
}

fn whole_units(amount: Decimal) -> Option<u64> {
    if amount.is_sign_negative() {
        return None;
    }
    amount.trunc().to_u64()
}

fn assemble(date_local: &str, amount: u64, description: &str, card: &str) -> Result<ExpenseRecord> {
    let gregorian = local_to_gregorian(date_local)?;
    Ok(ExpenseRecord {
        id: Uuid::new_v4().to_string(),
        date_local: date_local.to_string(),
        date_gregorian: gregorian.format("%Y-%m-%d").to_string(),
        amount,
        description: description.trim().to_string(),
        card: card.trim().to_string(),
    })
}
