// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use kharj::models::{ExpenseRecord, Table};
use kharj::query::{query, summarize, Bound, CardTotal, Filter, UNSPECIFIED_CARD};

fn rec(id: &str, local: &str, greg: &str, amount: u64, desc: &str, card: &str) -> ExpenseRecord {
    ExpenseRecord {
        id: id.to_string(),
        date_local: local.to_string(),
        date_gregorian: greg.to_string(),
        amount,
        description: desc.to_string(),
        card: card.to_string(),
    }
}

fn ledger() -> Table {
    Table::from(vec![
        rec("1", "1403-05-25", "2024-08-15", 50_000, "Fruit market", "Mellat"),
        rec("2", "1403-05-26", "2024-08-16", 12_000, "bread", "cash"),
        rec("3", "1403-05-25", "2024-08-15", 8_000, "FRUIT juice", ""),
        rec("4", "1403-06-01", "2024-08-22", 30_000, "taxi", "Saman"),
        rec("5", "1403-04-01", "2024-06-21", 5_000, "", "mellat debit"),
    ])
}

fn ids(records: &[&ExpenseRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn no_filter_returns_everything_newest_first() {
    let table = ledger();
    let out = query(&table, &Filter::default()).unwrap();
    assert!(out.warnings.is_empty());
    // records 1 and 3 share a date and keep insertion order
    assert_eq!(ids(&out.records), vec!["4", "2", "1", "3", "5"]);
}

#[test]
fn date_bounds_are_inclusive() {
    let table = ledger();
    let filter = Filter {
        date_from: Some("1403-05-25".into()),
        date_to: Some("1403-05-26".into()),
        ..Default::default()
    };
    let out = query(&table, &filter).unwrap();
    assert_eq!(ids(&out.records), vec!["2", "1", "3"]);
}

#[test]
fn bad_bound_is_dropped_with_warning() {
    let table = ledger();
    let filter = Filter {
        date_from: Some("1403-13-40".into()),
        date_to: Some("1403-05-25".into()),
        card_contains: Some("MELLAT".into()),
        ..Default::default()
    };
    let out = query(&table, &filter).unwrap();
    assert_eq!(out.warnings.len(), 1);
    assert_eq!(out.warnings[0].bound, Bound::From);
    assert_eq!(out.warnings[0].input, "1403-13-40");
    assert!(out.warnings[0].to_string().contains("start date filter"));
    // upper bound and card filter still apply
    assert_eq!(ids(&out.records), vec!["1", "5"]);
}

#[test]
fn blank_criteria_are_ignored() {
    let table = ledger();
    let filter = Filter {
        date_from: Some("  ".into()),
        date_to: Some(String::new()),
        card_contains: Some(String::new()),
        text_contains: Some(String::new()),
    };
    let out = query(&table, &filter).unwrap();
    assert!(out.warnings.is_empty());
    assert_eq!(out.records.len(), 5);
}

#[test]
fn needles_keep_their_surrounding_spaces() {
    let table = Table::from(vec![
        rec("1", "1403-05-25", "2024-08-15", 10, "tea", "Mellat"),
        rec("2", "1403-05-26", "2024-08-16", 20, "tea for two", "Bank Mellat"),
    ]);
    let filter = Filter {
        card_contains: Some(" mellat".into()),
        ..Default::default()
    };
    let out = query(&table, &filter).unwrap();
    assert_eq!(ids(&out.records), vec!["2"]);
    for r in &out.records {
        assert!(r.card.to_lowercase().contains(" mellat"), "card {:?}", r.card);
    }

    let filter = Filter {
        text_contains: Some(" ".into()),
        ..Default::default()
    };
    assert_eq!(ids(&query(&table, &filter).unwrap().records), vec!["2"]);
}

#[test]
fn text_and_card_filters_are_case_insensitive_substrings() {
    let table = ledger();
    for needle in ["fruit", "FRUIT", "uit", "a", "zzz"] {
        let filter = Filter {
            text_contains: Some(needle.into()),
            ..Default::default()
        };
        let out = query(&table, &filter).unwrap();
        let lower = needle.to_lowercase();
        for r in table.iter() {
            let hit = r.description.to_lowercase().contains(&lower);
            let returned = out.records.iter().any(|x| x.id == r.id);
            assert_eq!(hit, returned, "needle {} record {}", needle, r.id);
        }
    }

    let filter = Filter {
        card_contains: Some("mellat".into()),
        ..Default::default()
    };
    assert_eq!(ids(&query(&table, &filter).unwrap().records), vec!["1", "5"]);
}

#[test]
fn summary_over_filtered_rows() {
    let table = ledger();
    let filter = Filter {
        text_contains: Some("fruit".into()),
        ..Default::default()
    };
    let out = query(&table, &filter).unwrap();
    let s = summarize(out.records);
    assert_eq!(s.count, 2);
    assert_eq!(s.total, 58_000);
    assert_eq!(s.distinct_days, 1);
    assert_eq!(s.mean, 29_000);
    assert_eq!(
        s.per_card,
        vec![
            CardTotal { card: UNSPECIFIED_CARD.to_string(), total: 8_000 },
            CardTotal { card: "Mellat".to_string(), total: 50_000 },
        ]
    );
}

#[test]
fn summary_totals_are_consistent() {
    let table = ledger();
    let s = summarize(&table);
    assert_eq!(s.total, table.iter().map(|r| r.amount).sum::<u64>());
    assert_eq!(s.per_card.iter().map(|c| c.total).sum::<u64>(), s.total);
    assert_eq!(s.mean, s.total / 5);
    assert_eq!(s.distinct_days, 4);
}

#[test]
fn mean_truncates_and_empty_is_zero() {
    let table = Table::from(vec![
        rec("1", "1403-05-25", "2024-08-15", 10, "", "a"),
        rec("2", "1403-05-25", "2024-08-15", 11, "", "a"),
        rec("3", "1403-05-25", "", 0, "", "  "),
    ]);
    let s = summarize(&table);
    assert_eq!(s.mean, 7);
    assert_eq!(s.distinct_days, 1);
    assert_eq!(s.per_card[0].card, UNSPECIFIED_CARD);

    let empty = summarize(&Table::new());
    assert_eq!((empty.count, empty.total, empty.distinct_days, empty.mean), (0, 0, 0, 0));
    assert!(empty.per_card.is_empty());
}
