//! `calcsales-engine` — branch and commodity sales aggregation.
//!
//! Reads a working directory of dictionaries and numbered record files,
//! validates everything, and writes per-code summaries. No CLI dependencies;
//! message text is left to the caller.

pub mod aggregate;
pub mod category;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod selector;
pub mod summary;

pub use aggregate::TOTAL_CEILING;
pub use category::Category;
pub use config::{AggregationMode, SalesConfig};
pub use dictionary::{EntityDictionary, SalesTotals};
pub use error::{FaultKind, SalesError};
pub use pipeline::{run, RunReport, Stage};
pub use record::RecordFile;
