// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::query::{summarize, Summary};
use crate::session::Session;
use crate::utils::{filter_from_args, fmt_amount, fmt_toman, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let summary = summary_for(session, sub)?;
    if maybe_print_json(sub.get_flag("json"), false, &summary)? {
        return Ok(());
    }

    let metrics = vec![
        vec!["Total spent (filtered)".to_string(), fmt_toman(summary.total)],
        vec!["Days with spending".to_string(), summary.distinct_days.to_string()],
        vec!["Average per expense".to_string(), fmt_toman(summary.mean)],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], metrics));

    if !summary.per_card.is_empty() {
        let rows = summary
            .per_card
            .iter()
            .map(|c| vec![c.card.clone(), fmt_amount(c.total)])
            .collect();
        println!("{}", pretty_table(&["Card", "Total (toman)"], rows));
    }
    Ok(())
}

pub fn summary_for(session: &Session, sub: &clap::ArgMatches) -> Result<Summary> {
    let outcome = session.query(&filter_from_args(sub))?;
    for w in &outcome.warnings {
        eprintln!("warning: {}", w);
    }
    Ok(summarize(outcome.records))
}
