// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;
use thiserror::Error;

/// Example shown to the user whenever a Jalali date fails to parse.
pub const DATE_EXAMPLE: &str = "1403-05-25";

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid date '{input}', expected YYYY-MM-DD (e.g. {example})")]
    InvalidDateFormat { input: String, example: &'static str },

    #[error("A Jalali date is required")]
    MissingDate,

    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Column '{0}' is missing")]
    MissingColumn(String),

    #[error("Jalali calendar support is not available; rebuild kharj with `--features jalali`")]
    CalendarUnavailable,

    #[error("Date {0} is outside the supported Jalali range")]
    DateOutOfRange(String),

    #[error("Could not save ledger to {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read ledger from {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl LedgerError {
    pub fn invalid_date(input: &str) -> Self {
        LedgerError::InvalidDateFormat {
            input: input.to_string(),
            example: DATE_EXAMPLE,
        }
    }

    /// Errors caused by user input rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidDateFormat { .. }
                | LedgerError::MissingDate
                | LedgerError::NonPositiveAmount
                | LedgerError::MissingColumn(_)
                | LedgerError::DateOutOfRange(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
