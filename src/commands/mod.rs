//! Analysis task implementations.
//!
//! Each module implements one `--task` pipeline: stream the log through its
//! pattern extractor, aggregate per key, then render a sorted table. All
//! tasks share the same shape: an `aggregate` function that returns the
//! sorted, filtered rows (used directly by tests) and a `run` entry point
//! that prints them.
//!
//! - [`failed_logins`] - failed attempt counts per source IP
//! - [`connections`] - new connections bucketed per minute
//! - [`successful_creds`] - distinct IPs per working credential pair
//! - [`identify_bots`] - fingerprints reused across many source IPs

pub mod connections;
pub mod failed_logins;
pub mod identify_bots;
pub mod successful_creds;
