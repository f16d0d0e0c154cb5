//! # Cowrie Log Tools
//!
//! Command-line tools for analyzing [Cowrie](https://github.com/cowrie/cowrie)
//! honeypot SSH transport logs.
//!
//! ## Overview
//!
//! Cowrie writes one event per line to its plain-text log. This crate scans a
//! log file in a single streaming pass, matches each line against a small set
//! of fixed patterns, and prints a sorted summary table to stdout.
//!
//! ## Analysis tasks
//!
//! - `failed-logins` - repeat-offender IPs ranked by failed login attempts
//! - `connections` - new connection volume bucketed per minute
//! - `successful-creds` - credential pairs that worked, with distinct IP counts
//! - `identify-bots` - hassh fingerprints reused across many source IPs
//!
//! ## Features
//!
//! - **Streaming parser** - memory bounded by the number of distinct keys,
//!   not by file size
//! - **Compressed file support** - direct analysis of `.gz` and `.zst`
//!   rotated logs
//! - **Stable ranking** - rows with equal counts keep their first-seen order
//!
//! ## Architecture
//!
//! - [`cowrie`] - log line patterns and the events they extract
//! - [`commands`] - one module per analysis task
//! - [`utils`] - shared helpers (file reader, table renderer)
//!
//! ## Example Usage
//!
//! ```bash
//! # IPs with at least 5 failed login attempts
//! cowrie-log cowrie.log --task failed-logins --min-count 5
//!
//! # Fingerprints seen from 3+ distinct IPs, straight from a rotated log
//! cowrie-log cowrie.log.gz --task identify-bots
//! ```

pub mod commands;
pub mod cowrie;
pub mod utils;
