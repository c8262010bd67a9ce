//! Core data model types.
//!
//! The loader produces an ordered `Vec<Sale>`; everything in
//! [`crate::aggregation`] borrows that sequence read-only.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of input data: a single product sale transaction.
///
/// `sale_date` is `None` only when the source's date text failed to parse
/// (the loader keeps such records rather than aborting).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    /// Product name.
    pub product_name: String,
    /// Sale identifier. Unique within a dataset (assumed from the source,
    /// not enforced).
    pub sale_id: i64,
    /// Date and time of the sale. Only day granularity is significant.
    pub sale_date: Option<NaiveDateTime>,
    /// Sale amount as an exact decimal.
    pub sale_amount: Decimal,
}

impl Sale {
    /// Calendar day of the sale, if the date is set.
    pub fn sale_day(&self) -> Option<NaiveDate> {
        self.sale_date.map(|dt| dt.date())
    }

    /// Calendar (year, month) of the sale, if the date is set.
    pub fn sale_month(&self) -> Option<YearMonth> {
        self.sale_date.map(|dt| YearMonth::of(dt.date()))
    }
}

impl fmt::Display for Sale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sale [product={}, id={}, date={}, amount={}]",
            self.product_name,
            self.sale_id,
            self.sale_date
                .map(|dt| dt.to_string())
                .unwrap_or_else(|| "unset".to_string()),
            self.sale_amount
        )
    }
}

/// A calendar (year, month) key used by the monthly aggregations.
///
/// Orders chronologically, so it can key a `BTreeMap` for sorted monthly
/// rollups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    /// Calendar year.
    pub year: i32,
    /// Month of year, 1-12.
    pub month: u32,
}

impl YearMonth {
    /// Create a key from a year and a 1-based month number.
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The key for the month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
