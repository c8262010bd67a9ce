//! CSV loading of product-sale records.

use std::fmt;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::{SalesError, SalesResult};
use crate::types::Sale;

use super::observability::{LoadObserver, LoadStats};

/// Default date-time pattern of the source data (`2014-12-12 09:30:00`).
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Options controlling load behavior.
///
/// Use [`Default`] for the fixed source format (comma-delimited,
/// `yyyy-MM-dd HH:mm:ss` date-times, no observer).
#[derive(Clone)]
pub struct LoadOptions {
    /// Field delimiter. Only used by the path-based loader; reader-based
    /// callers configure their own [`csv::Reader`].
    pub delimiter: u8,
    /// chrono format string for the sale date-time column.
    pub datetime_format: String,
    /// Optional observer for load events.
    pub observer: Option<Arc<dyn LoadObserver>>,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("delimiter", &(self.delimiter as char))
            .field("datetime_format", &self.datetime_format)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            observer: None,
        }
    }
}

/// Load sale records from a delimited text file.
///
/// Rules:
///
/// - The first line is a header and is discarded. Empty lines are skipped.
/// - Each data row must have exactly four fields, in order: product name,
///   sale id (integer), sale date-time (quoted), sale amount (decimal).
/// - An unparsable sale id or amount, or a wrong field count, fails the
///   whole load with [`SalesError::MalformedRecord`] naming the line.
/// - An unparsable date-time is non-fatal: the record is kept with
///   `sale_date = None` and the failure is reported to the observer.
///
/// Output preserves file order. When an observer is configured, the load
/// outcome is reported to it via `on_success` / `on_failure`.
///
/// # Examples
///
/// ```no_run
/// use sales_analytics::ingestion::{load_sales_from_path, LoadOptions};
///
/// # fn main() -> Result<(), sales_analytics::SalesError> {
/// let sales = load_sales_from_path("product_sale.csv", &LoadOptions::default())?;
/// println!("rows={}", sales.len());
/// # Ok(())
/// # }
/// ```
pub fn load_sales_from_path(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> SalesResult<Vec<Sale>> {
    let result = open_and_load(path.as_ref(), options);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(sales) => obs.on_success(LoadStats {
                rows: sales.len(),
                dates_unset: sales.iter().filter(|s| s.sale_date.is_none()).count(),
            }),
            Err(e) => obs.on_failure(e),
        }
    }

    result
}

fn open_and_load(path: &Path, options: &LoadOptions) -> SalesResult<Vec<Sale>> {
    // Open the file ourselves so a missing source surfaces as an I/O error
    // rather than a reader-level CSV error.
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(file);
    load_sales_from_reader(&mut rdr, options)
}

/// Load sale records from an existing CSV reader.
///
/// The reader's own delimiter configuration applies;
/// [`LoadOptions::delimiter`] is ignored here. Row-level date-parse
/// failures are still reported to the observer.
pub fn load_sales_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    options: &LoadOptions,
) -> SalesResult<Vec<Sale>> {
    let mut sales: Vec<Sale> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based line numbers for users; +1 again because the header
        // is line 1.
        let line = row_idx0 + 2;
        let record = result?;
        sales.push(convert_sale(&record, line, options)?);
    }
    Ok(sales)
}

fn convert_sale(
    record: &csv::StringRecord,
    line: usize,
    options: &LoadOptions,
) -> SalesResult<Sale> {
    if record.len() != 4 {
        return Err(SalesError::MalformedRecord {
            line,
            raw: record.iter().collect::<Vec<_>>().join(","),
            message: format!("expected 4 fields, got {}", record.len()),
        });
    }

    let product_name = record.get(0).unwrap_or("").trim().to_owned();

    let raw_id = record.get(1).unwrap_or("").trim();
    let sale_id =
        raw_id
            .parse::<i64>()
            .map_err(|e| SalesError::MalformedRecord {
                line,
                raw: raw_id.to_owned(),
                message: format!("invalid sale id: {e}"),
            })?;

    // The csv reader strips enclosing quotes; trim any literal leftovers the
    // way the source format allows.
    let raw_date = record.get(2).unwrap_or("").trim().trim_matches('"');
    let sale_date = match NaiveDateTime::parse_from_str(raw_date, &options.datetime_format) {
        Ok(dt) => Some(dt),
        Err(_) => {
            if let Some(obs) = options.observer.as_ref() {
                obs.on_date_parse_failure(line, raw_date);
            }
            None
        }
    };

    let raw_amount = record.get(3).unwrap_or("").trim();
    let sale_amount =
        raw_amount
            .parse::<Decimal>()
            .map_err(|e| SalesError::MalformedRecord {
                line,
                raw: raw_amount.to_owned(),
                message: format!("invalid sale amount: {e}"),
            })?;

    Ok(Sale {
        product_name,
        sale_id,
        sale_date,
        sale_amount,
    })
}
