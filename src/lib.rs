//! `sales-analytics` is a small library for loading product-sale records
//! from a fixed-format delimited text source into an in-memory `Vec<Sale>`,
//! and answering analytical questions over it with grouping/reducing
//! pipelines.
//!
//! The loading entrypoint is [`ingestion::load_sales_from_path`]. The
//! source format is comma-delimited text with a header row; columns are
//! product name, sale id (integer), sale date-time (quoted,
//! `yyyy-MM-dd HH:mm:ss`), and sale amount (a decimal string, parsed into
//! [`rust_decimal::Decimal`] so addition and comparison stay exact).
//!
//! Loading is strict about amounts and ids (an unparsable value fails the
//! whole load) but lenient about dates: a record whose date text does not
//! parse is kept with `sale_date = None`, and the event is reported to an
//! optional [`ingestion::LoadObserver`].
//!
//! ## Quick example: load and aggregate
//!
//! ```no_run
//! use sales_analytics::aggregation::{top_product, total_sale_per_product};
//! use sales_analytics::ingestion::{load_sales_from_path, LoadOptions};
//!
//! # fn main() -> Result<(), sales_analytics::SalesError> {
//! let sales = load_sales_from_path("product_sale.csv", &LoadOptions::default())?;
//!
//! let totals = total_sale_per_product(&sales);
//! let (product, total) = top_product(&sales)?;
//! println!("{} products, top seller {product} at {total}", totals.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Aggregation queries
//!
//! All queries in [`aggregation`] are pure functions over `&[Sale]` and can
//! run in any order:
//!
//! ```rust
//! use chrono::{Month, NaiveDate};
//! use rust_decimal::Decimal;
//! use sales_analytics::aggregation::{daily_total_sale, total_sale_in_month};
//! use sales_analytics::types::Sale;
//!
//! let sales = vec![Sale {
//!     product_name: "Product1".to_string(),
//!     sale_id: 101,
//!     sale_date: NaiveDate::from_ymd_opt(2014, 12, 1)
//!         .and_then(|d| d.and_hms_opt(10, 15, 0)),
//!     sale_amount: Decimal::new(1000, 2),
//! }];
//!
//! assert_eq!(total_sale_in_month(&sales, Month::December), Decimal::new(1000, 2));
//! assert_eq!(daily_total_sale(&sales).len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: loading of the delimited sale-record source
//! - [`types`]: the [`types::Sale`] record and calendar keys
//! - [`aggregation`]: grouping/reducing queries over loaded records
//! - [`tagging`]: a small closure-based text-tagging utility
//! - [`error`]: error types used across the crate

pub mod aggregation;
pub mod error;
pub mod ingestion;
pub mod tagging;
pub mod types;

pub use error::{SalesError, SalesResult};
