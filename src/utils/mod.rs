//! Shared helpers used by every analysis command.
//!
//! - [`reader`] - opens log files with transparent decompression
//! - [`table`] - renders report rows as an aligned plain-text table

pub mod reader;
pub mod table;
