// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn filter_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("from")
            .long("from")
            .value_name("JALALI_DATE")
            .help("Only expenses on or after this Jalali date (YYYY-MM-DD)"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .value_name("JALALI_DATE")
            .help("Only expenses on or before this Jalali date (YYYY-MM-DD)"),
    )
    .arg(
        Arg::new("card")
            .long("card")
            .help("Card name contains this text (case-insensitive)"),
    )
    .arg(
        Arg::new("search")
            .long("search")
            .help("Description contains this text (case-insensitive)"),
    )
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON")
}

pub fn build_cli() -> Command {
    Command::new("kharj")
        .about("Daily expense ledger with Jalali (Shamsi) dates")
        .version(crate_version!())
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .global(true)
                .env("KHARJ_FILE")
                .value_name("PATH")
                .help("Ledger CSV file (default: platform data dir)"),
        )
        .subcommand(Command::new("init").about("Create the ledger file if it does not exist"))
        .subcommand(
            Command::new("add")
                .about("Record a new expense")
                .arg(
                    Arg::new("date")
                        .long("date")
                        .value_name("JALALI_DATE")
                        .help("Jalali date YYYY-MM-DD, e.g. 1403-05-25 (default: today)"),
                )
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .required(true)
                        .allow_hyphen_values(true)
                        .help("Amount in toman"),
                )
                .arg(
                    Arg::new("description")
                        .long("desc")
                        .visible_alias("description")
                        .default_value("")
                        .help("What was bought"),
                )
                .arg(
                    Arg::new("card")
                        .long("card")
                        .default_value("")
                        .help("Card or payment method"),
                ),
        )
        .subcommand(
            filter_args(Command::new("list").about("List expenses, newest first"))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                )
                .arg(json_flag())
                .arg(
                    Arg::new("jsonl")
                        .long("jsonl")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("json")
                        .help("Print one JSON object per line"),
                ),
        )
        .subcommand(
            filter_args(Command::new("summary").about("Totals, spending days, average and per-card totals"))
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("import")
                .about("Import expenses from CSV (all rows or none)")
                .arg(
                    Arg::new("path")
                        .long("path")
                        .required(true)
                        .help("CSV with date_local, amount and optional description, card"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export every expense")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv|json"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .help("Output file (default: stdout)"),
                ),
        )
        .subcommand(
            Command::new("reset")
                .about("Delete every expense")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Confirm the reset"),
                ),
        )
        .subcommand(
            Command::new("date")
                .about("Jalali/Gregorian date conversion")
                .subcommand_required(true)
                .subcommand(Command::new("today").about("Today's Jalali date"))
                .subcommand(
                    Command::new("to-gregorian")
                        .arg(Arg::new("date").required(true).value_name("JALALI_DATE")),
                )
                .subcommand(
                    Command::new("to-jalali")
                        .arg(Arg::new("date").required(true).value_name("GREGORIAN_DATE")),
                ),
        )
        .subcommand(Command::new("doctor").about("Check the ledger for inconsistencies"))
}
