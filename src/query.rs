// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calendar::local_to_gregorian;
use crate::error::{LedgerError, Result};
use crate::models::{ExpenseRecord, Table};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use tracing::warn;

/// Bucket label for expenses recorded without a card.
pub const UNSPECIFIED_CARD: &str = "(unspecified)";

#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub date_from: Option<String>, // Jalali, inclusive
    pub date_to: Option<String>,   // Jalali, inclusive
    pub card_contains: Option<String>,
    pub text_contains: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    From,
    To,
}

/// A date bound that could not be converted and was left out of the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterWarning {
    pub bound: Bound,
    pub input: String,
    pub reason: String,
}

impl fmt::Display for FilterWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let which = match self.bound {
            Bound::From => "start",
            Bound::To => "end",
        };
        write!(f, "{} date filter '{}' was not applied: {}", which, self.input, self.reason)
    }
}

#[derive(Debug, Clone)]
pub struct QueryOutcome<'a> {
    pub records: Vec<&'a ExpenseRecord>,
    pub warnings: Vec<FilterWarning>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardTotal {
    pub card: String,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub total: u64,
    pub distinct_days: usize,
    pub mean: u64,
    pub per_card: Vec<CardTotal>,
}

/// Filters the table and sorts the matches newest first.
///
/// A date bound that does not convert is dropped with a warning; the other
/// criteria still apply. A missing calendar backend aborts the query.
pub fn query<'a>(table: &'a Table, filter: &Filter) -> Result<QueryOutcome<'a>> {
    let mut warnings = Vec::new();
    let from = resolve_bound(Bound::From, filter.date_from.as_deref(), &mut warnings)?;
    let to = resolve_bound(Bound::To, filter.date_to.as_deref(), &mut warnings)?;
    let card = needle(filter.card_contains.as_deref());
    let text = needle(filter.text_contains.as_deref());

    let mut records: Vec<&ExpenseRecord> = table
        .iter()
        .filter(|r| from.as_deref().is_none_or(|f| r.date_gregorian.as_str() >= f))
        .filter(|r| to.as_deref().is_none_or(|t| r.date_gregorian.as_str() <= t))
        .filter(|r| card.as_deref().is_none_or(|n| contains_ci(&r.card, n)))
        .filter(|r| text.as_deref().is_none_or(|n| contains_ci(&r.description, n)))
        .collect();
    // sort_by is stable, so same-day records keep insertion order
    records.sort_by(|a, b| b.date_gregorian.cmp(&a.date_gregorian));

    Ok(QueryOutcome { records, warnings })
}

pub fn summarize<'a, I>(records: I) -> Summary
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut count = 0usize;
    let mut total = 0u64;
    let mut days = HashSet::new();
    let mut by_card: BTreeMap<&str, u64> = BTreeMap::new();

    for r in records {
        count += 1;
        total = total.saturating_add(r.amount);
        if !r.date_gregorian.is_empty() {
            days.insert(r.date_gregorian.as_str());
        }
        let card = match r.card.trim() {
            "" => UNSPECIFIED_CARD,
            c => c,
        };
        let slot = by_card.entry(card).or_insert(0);
        *slot = slot.saturating_add(r.amount);
    }

    Summary {
        count,
        total,
        distinct_days: days.len(),
        mean: if count == 0 { 0 } else { total / count as u64 },
        per_card: by_card
            .into_iter()
            .map(|(card, total)| CardTotal {
                card: card.to_string(),
                total,
            })
            .collect(),
    }
}

fn resolve_bound(
    bound: Bound,
    raw: Option<&str>,
    warnings: &mut Vec<FilterWarning>,
) -> Result<Option<String>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    match local_to_gregorian(raw) {
        Ok(date) => Ok(Some(date.format("%Y-%m-%d").to_string())),
        Err(LedgerError::CalendarUnavailable) => Err(LedgerError::CalendarUnavailable),
        Err(e) => {
            warn!(input = raw, error = %e, "ignoring date bound");
            warnings.push(FilterWarning {
                bound,
                input: raw.to_string(),
                reason: e.to_string(),
            });
            Ok(None)
        }
    }
}

// Matched as given, surrounding spaces included; only an empty needle is skipped.
fn needle(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.is_empty()).map(str::to_lowercase)
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
