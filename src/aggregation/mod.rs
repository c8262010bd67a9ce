//! Grouping/reducing queries over loaded sale records.
//!
//! All operations are pure functions over a `&[Sale]` produced by
//! [`crate::ingestion`]: none mutate their input, and they can be called
//! independently in any order.
//!
//! - [`total_sale_per_product()`]: product → total amount
//! - [`sales_per_product()`]: product → its sale records, in input order
//! - [`total_sale_in_month()`]: total for a calendar month (of any year)
//! - [`daily_total_sale()`]: calendar day → total amount
//! - [`top_product()`]: product with the maximum cumulative amount
//! - [`monthly_product_sale()`]: (year, month) → product → total amount
//! - [`top_month()`]: highest-grossing (year, month)
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//! use sales_analytics::aggregation::{top_product, total_sale_per_product};
//! use sales_analytics::types::Sale;
//!
//! let sale = |product: &str, id: i64, day: u32, amount: i64| Sale {
//!     product_name: product.to_string(),
//!     sale_id: id,
//!     sale_date: NaiveDate::from_ymd_opt(2014, 12, day)
//!         .and_then(|d| d.and_hms_opt(0, 0, 0)),
//!     sale_amount: Decimal::from(amount),
//! };
//! let sales = vec![
//!     sale("Product1", 1, 1, 10),
//!     sale("Product1", 2, 12, 100),
//!     sale("Product2", 3, 5, 20),
//! ];
//!
//! let totals = total_sale_per_product(&sales);
//! assert_eq!(totals["Product1"], Decimal::from(110));
//!
//! let (product, total) = top_product(&sales).unwrap();
//! assert_eq!((product.as_str(), total), ("Product1", Decimal::from(110)));
//! ```

pub mod by_period;
pub mod by_product;

pub use by_period::{daily_total_sale, monthly_product_sale, top_month, total_sale_in_month};
pub use by_product::{sales_per_product, top_product, total_sale_per_product};
