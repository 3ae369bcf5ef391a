// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Jalali (Solar Hijri) <-> Gregorian conversion.
//!
//! Uses the 33-year arithmetic cycle: a year is leap when `year % 33` is one of
//! 1, 5, 9, 13, 17, 22, 26 or 30. Months 1-6 have 31 days, 7-11 have 30 and Esfand has 29
//! (30 in leap years). Day zero of the count is 1 Farvardin 0001, which falls on
//! Gregorian 0622-03-21.
//!
//! The converter is compiled only with the `jalali` feature. Without it every
//! conversion fails with [`LedgerError::CalendarUnavailable`].

use crate::error::{LedgerError, Result};
use chrono::{Local, NaiveDate};

#[cfg(feature = "jalali")]
pub use backend::{JalaliDate, MAX_YEAR, MIN_YEAR, days_in_month, is_leap_year};

#[cfg(feature = "jalali")]
mod backend {
    use crate::error::{LedgerError, Result};
    use chrono::{Datelike, NaiveDate};
    use once_cell::sync::Lazy;
    use regex::Regex;
    use std::fmt;
    use std::str::FromStr;

    pub const MIN_YEAR: i32 = 1;
    pub const MAX_YEAR: i32 = 9377;

    const LEAP_RESIDUES: [i32; 8] = [1, 5, 9, 13, 17, 22, 26, 30];
    const CYCLE_YEARS: i32 = 33;
    const CYCLE_DAYS: i32 = CYCLE_YEARS * 365 + LEAP_RESIDUES.len() as i32;
    // chrono day number (0001-01-01 = 1) of 0622-03-21.
    const EPOCH_DAYS_FROM_CE: i32 = 226_895;

    static DATE_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("date pattern compiles"));

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct JalaliDate {
        year: i32,
        month: u32,
        day: u32,
    }

    impl JalaliDate {
        pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
            if !(MIN_YEAR..=MAX_YEAR).contains(&year) || !(1..=12).contains(&month) {
                return None;
            }
            if day == 0 || day > days_in_month(year, month) {
                return None;
            }
            Some(JalaliDate { year, month, day })
        }

        pub fn year(&self) -> i32 {
            self.year
        }

        pub fn month(&self) -> u32 {
            self.month
        }

        pub fn day(&self) -> u32 {
            self.day
        }

        pub fn to_gregorian(&self) -> Result<NaiveDate> {
            let n = EPOCH_DAYS_FROM_CE + days_since_epoch(self.year, self.month, self.day);
            NaiveDate::from_num_days_from_ce_opt(n).ok_or_else(|| LedgerError::DateOutOfRange(self.to_string()))
        }

        pub fn from_gregorian(date: NaiveDate) -> Result<Self> {
            let out_of_range = || LedgerError::DateOutOfRange(date.to_string());
            let n = date.num_days_from_ce() - EPOCH_DAYS_FROM_CE;
            if n < 0 {
                return Err(out_of_range());
            }

            let mut year = (n / CYCLE_DAYS) * CYCLE_YEARS + 1;
            let mut rem = n % CYCLE_DAYS;
            loop {
                let len = if is_leap_year(year) { 366 } else { 365 };
                if rem < len {
                    break;
                }
                rem -= len;
                year += 1;
            }
            if year > MAX_YEAR {
                return Err(out_of_range());
            }

            let mut month = 1;
            loop {
                let len = days_in_month(year, month) as i32;
                if rem < len {
                    break;
                }
                rem -= len;
                month += 1;
            }
            Ok(JalaliDate {
                year,
                month,
                day: rem as u32 + 1,
            })
        }
    }

    impl fmt::Display for JalaliDate {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }

    impl FromStr for JalaliDate {
        type Err = LedgerError;

        fn from_str(s: &str) -> Result<Self> {
            let caps = DATE_RE.captures(s).ok_or_else(|| LedgerError::invalid_date(s))?;
            let num = |i: usize| caps[i].parse::<u32>().map_err(|_| LedgerError::invalid_date(s));
            let (year, month, day) = (num(1)?, num(2)?, num(3)?);
            JalaliDate::new(year as i32, month, day).ok_or_else(|| LedgerError::invalid_date(s))
        }
    }

    pub fn is_leap_year(year: i32) -> bool {
        LEAP_RESIDUES.contains(&year.rem_euclid(CYCLE_YEARS))
    }

    pub fn days_in_month(year: i32, month: u32) -> u32 {
        match month {
            1..=6 => 31,
            7..=11 => 30,
            12 if is_leap_year(year) => 30,
            12 => 29,
            _ => 0,
        }
    }

    fn leap_years_before(year: i32) -> i32 {
        let elapsed = year - 1;
        let rem = elapsed % CYCLE_YEARS;
        let partial = LEAP_RESIDUES.iter().filter(|&&r| r <= rem).count() as i32;
        (elapsed / CYCLE_YEARS) * LEAP_RESIDUES.len() as i32 + partial
    }

    fn days_since_epoch(year: i32, month: u32, day: u32) -> i32 {
        let month = month as i32;
        let before_month = if month <= 7 {
            31 * (month - 1)
        } else {
            186 + 30 * (month - 7)
        };
        365 * (year - 1) + leap_years_before(year) + before_month + day as i32 - 1
    }
}

/// Today's local date in the Jalali calendar, `YYYY-MM-DD`.
pub fn today_local() -> Result<String> {
    gregorian_to_local(Local::now().date_naive())
}

/// Strictly parses a Jalali `YYYY-MM-DD` string and returns the Gregorian date.
#[cfg(feature = "jalali")]
pub fn local_to_gregorian(s: &str) -> Result<NaiveDate> {
    if s.is_empty() {
        return Err(LedgerError::invalid_date(s));
    }
    s.parse::<JalaliDate>()?.to_gregorian()
}

#[cfg(not(feature = "jalali"))]
pub fn local_to_gregorian(_s: &str) -> Result<NaiveDate> {
    Err(LedgerError::CalendarUnavailable)
}

#[cfg(feature = "jalali")]
pub fn gregorian_to_local(date: NaiveDate) -> Result<String> {
    Ok(JalaliDate::from_gregorian(date)?.to_string())
}

#[cfg(not(feature = "jalali"))]
pub fn gregorian_to_local(_date: NaiveDate) -> Result<String> {
    Err(LedgerError::CalendarUnavailable)
}
