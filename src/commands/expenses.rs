// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calendar::today_local;
use crate::models::{ExpenseForm, ExpenseRecord};
use crate::session::Session;
use crate::utils::{filter_from_args, fmt_amount, maybe_print_json, parse_amount, pretty_table};
use anyhow::{Context, Result};

pub const DISPLAY_HEADERS: [&str; 4] = ["Date (Jalali)", "Amount (toman)", "Description", "Card"];

pub fn add(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let date_local = match sub.get_one::<String>("date") {
        Some(d) => d.trim().to_string(),
        None => today_local()?,
    };
    let form = ExpenseForm {
        date_local,
        amount: parse_amount(sub.get_one::<String>("amount").map(String::as_str).unwrap_or(""))?,
        description: sub.get_one::<String>("description").cloned().unwrap_or_default(),
        card: sub.get_one::<String>("card").cloned().unwrap_or_default(),
    };

    let rec = session.add(&form).context("Could not record expense")?;
    println!(
        "Recorded {} on {} ({}) for '{}' (card: {})",
        fmt_amount(rec.amount),
        rec.date_local,
        rec.date_gregorian,
        rec.description,
        if rec.card.is_empty() { "-" } else { rec.card.as_str() }
    );
    Ok(())
}

pub fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(session, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data.iter().map(display_row).collect();
        println!("{}", pretty_table(&DISPLAY_HEADERS, rows));
    }
    Ok(())
}

/// Filtered, newest-first rows honoring `--limit`. Ignored date bounds are
/// reported on stderr.
pub fn query_rows(session: &Session, sub: &clap::ArgMatches) -> Result<Vec<ExpenseRecord>> {
    let filter = filter_from_args(sub);
    let outcome = session.query(&filter)?;
    for w in &outcome.warnings {
        eprintln!("warning: {}", w);
    }
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);
    Ok(outcome.records.into_iter().take(limit).cloned().collect())
}

pub fn display_row(r: &ExpenseRecord) -> Vec<String> {
    vec![
        r.date_local.clone(),
        fmt_amount(r.amount),
        r.description.clone(),
        r.card.clone(),
    ]
}
