//! Calendar-keyed aggregations (daily and monthly rollups).

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Month, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{SalesError, SalesResult};
use crate::types::{Sale, YearMonth};

/// Total sale amount within the given calendar month.
///
/// Matches on the month of year alone: sales from that month of *any* year
/// are included. Records with an unset date are excluded.
pub fn total_sale_in_month(sales: &[Sale], month: Month) -> Decimal {
    let month_number = month.number_from_month();
    sales
        .iter()
        .filter(|s| s.sale_date.map(|dt| dt.month()) == Some(month_number))
        .map(|s| s.sale_amount)
        .sum()
}

/// Total sale amount per calendar day, sorted by day.
///
/// Records with an unset date are excluded.
pub fn daily_total_sale(sales: &[Sale]) -> BTreeMap<NaiveDate, Decimal> {
    let mut totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for sale in sales {
        if let Some(day) = sale.sale_day() {
            *totals.entry(day).or_insert(Decimal::ZERO) += sale.sale_amount;
        }
    }
    totals
}

/// Per-month distribution of product sales, sorted by month.
///
/// Groups by calendar (year, month), then by product, summing amounts
/// within each group. Records with an unset date are excluded.
pub fn monthly_product_sale(sales: &[Sale]) -> BTreeMap<YearMonth, HashMap<String, Decimal>> {
    let mut months: BTreeMap<YearMonth, HashMap<String, Decimal>> = BTreeMap::new();
    for sale in sales {
        if let Some(month) = sale.sale_month() {
            *months
                .entry(month)
                .or_default()
                .entry(sale.product_name.clone())
                .or_insert(Decimal::ZERO) += sale.sale_amount;
        }
    }
    months
}

/// The highest-grossing calendar (year, month), with its total.
///
/// Ties are broken arbitrarily. Fails with [`SalesError::NoData`] when no
/// record carries a date.
pub fn top_month(sales: &[Sale]) -> SalesResult<(YearMonth, Decimal)> {
    let mut totals: BTreeMap<YearMonth, Decimal> = BTreeMap::new();
    for sale in sales {
        if let Some(month) = sale.sale_month() {
            *totals.entry(month).or_insert(Decimal::ZERO) += sale.sale_amount;
        }
    }
    totals
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1))
        .ok_or(SalesError::NoData)
}
