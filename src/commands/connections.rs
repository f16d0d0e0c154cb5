//! Connection volume per minute.
//!
//! Buckets new-connection events by minute to show when the honeypot was
//! being hit. Useful for spotting scan waves and correlating with the other
//! reports.
//!
//! # Usage
//!
//! ```bash
//! cowrie-log cowrie.log --task connections
//! ```
//!
//! # Output
//!
//! One row per minute that saw at least one connection, in chronological
//! order.

use crate::cowrie::patterns;
use crate::utils::reader::open_log;
use crate::utils::table::{Align, Table};
use anyhow::Result;
use chrono::NaiveDateTime;
use log::debug;
use std::collections::HashMap;
use std::io::{BufRead, BufReader};

/// Counts new connections per `YYYY-MM-DD HH:MM` bucket, in chronological
/// order.
pub fn aggregate(log_file: &str) -> Result<Vec<(String, usize)>> {
    let mut per_minute: HashMap<String, usize> = HashMap::new();
    let mut lines_read = 0usize;

    let reader = BufReader::new(open_log(log_file)?);
    for line in reader.lines() {
        let line = line?;
        lines_read += 1;
        if let Some(event) = patterns::new_connection(&line) {
            // The pattern guarantees at least 19 timestamp characters; the
            // fractional part, if any, is dropped by the minute bucketing.
            let Ok(timestamp) =
                NaiveDateTime::parse_from_str(&event.timestamp[..19], "%Y-%m-%dT%H:%M:%S")
            else {
                continue;
            };
            let bucket = timestamp.format("%Y-%m-%d %H:%M").to_string();
            *per_minute.entry(bucket).or_insert(0) += 1;
        }
    }
    debug!(
        "{}: scanned {} lines, {} active minutes",
        log_file,
        lines_read,
        per_minute.len()
    );

    let mut rows: Vec<(String, usize)> = per_minute.into_iter().collect();
    rows.sort();
    Ok(rows)
}

pub fn run(log_file: &str) -> Result<()> {
    let rows = aggregate(log_file)?;

    let mut table = Table::new(&[("Timestamp", Align::Left), ("Count", Align::Right)]);
    for (bucket, count) in rows {
        table.add_row(vec![bucket, count.to_string()]);
    }
    println!("{}", table.render());
    Ok(())
}
