//! Loading of the delimited sale-record source.
//!
//! The entrypoint is [`load_sales_from_path`], which:
//!
//! - discards the header row and converts each data row into a
//!   [`crate::types::Sale`]
//! - fails the whole load on an unparsable sale id or amount
//!   ([`crate::SalesError::MalformedRecord`])
//! - keeps records whose date text fails to parse, with
//!   `sale_date = None`, reporting the event to an optional
//!   [`LoadObserver`]
//!
//! [`load_sales_from_reader`] is available for in-memory or pre-configured
//! readers.

pub mod csv;
pub mod observability;

pub use csv::{load_sales_from_path, load_sales_from_reader, LoadOptions, DEFAULT_DATETIME_FORMAT};
pub use observability::{CompositeObserver, LoadObserver, LoadStats, StdErrObserver};
