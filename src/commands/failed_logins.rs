//! Failed login attempts per source IP.
//!
//! Counts every failed login attempt by source IP and reports the
//! repeat offenders, most active first.
//!
//! # Usage
//!
//! ```bash
//! # Every IP with at least one failed attempt
//! cowrie-log cowrie.log --task failed-logins
//!
//! # Only IPs hammering the honeypot
//! cowrie-log cowrie.log --task failed-logins --min-count 50
//! ```
//!
//! # Output
//!
//! One row per IP with its failed attempt count, sorted by count descending.
//! IPs with equal counts keep the order they first appeared in the log.

use crate::cowrie::patterns;
use crate::utils::reader::open_log;
use crate::utils::table::{Align, Table};
use anyhow::Result;
use log::debug;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::io::{BufRead, BufReader};

/// Counts failed login attempts per IP and returns `(ip, count)` rows with
/// count >= `min_count`, sorted by count descending, first-seen order on ties.
pub fn aggregate(log_file: &str, min_count: usize) -> Result<Vec<(String, usize)>> {
    // ip -> (failed attempts, first-seen order)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut lines_read = 0usize;

    let reader = BufReader::new(open_log(log_file)?);
    for line in reader.lines() {
        let line = line?;
        lines_read += 1;
        if let Some(event) = patterns::failed_login(&line) {
            let next_order = counts.len();
            counts.entry(event.ip).or_insert((0, next_order)).0 += 1;
        }
    }
    debug!(
        "{}: scanned {} lines, {} distinct failing IPs",
        log_file,
        lines_read,
        counts.len()
    );

    let mut rows: Vec<(String, usize, usize)> = counts
        .into_iter()
        .filter(|&(_, (count, _))| count >= min_count)
        .map(|(ip, (count, order))| (ip, count, order))
        .collect();
    rows.sort_by_key(|&(_, count, order)| (Reverse(count), order));
    Ok(rows.into_iter().map(|(ip, count, _)| (ip, count)).collect())
}

pub fn run(log_file: &str, min_count: usize) -> Result<()> {
    let rows = aggregate(log_file, min_count)?;

    let mut table = Table::new(&[("IP Address", Align::Left), ("Failed Logins", Align::Right)]);
    for (ip, count) in rows {
        table.add_row(vec![ip, count.to_string()]);
    }
    println!("{}", table.render());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn failed_line(ip: &str) -> String {
        format!(
            "2024-03-11T09:14:22Z [HoneyPotSSHTransport,1023,{}] login attempt [root/toor] failed",
            ip
        )
    }

    fn log_with(lines: &[String]) -> NamedTempFile {
        let mut temp = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(temp, "{}", line).unwrap();
        }
        temp.flush().unwrap();
        temp
    }

    #[test]
    fn test_min_count_filters_low_offenders() {
        let temp = log_with(&[
            failed_line("1.2.3.4"),
            failed_line("1.2.3.4"),
            failed_line("5.6.7.8"),
            failed_line("1.2.3.4"),
        ]);
        let rows = aggregate(temp.path().to_str().unwrap(), 2).unwrap();
        assert_eq!(rows, vec![("1.2.3.4".to_string(), 3)]);
    }

    #[test]
    fn test_non_matching_lines_leave_counts_unchanged() {
        let temp = log_with(&[
            failed_line("1.2.3.4"),
            "2024-03-11T09:14:30Z [HoneyPotSSHTransport,1023,1.2.3.4] Connection lost".to_string(),
            "2024-03-11T09:14:25Z [HoneyPotSSHTransport,1023,1.2.3.4] login attempt [root/x] succeeded".to_string(),
        ]);
        let rows = aggregate(temp.path().to_str().unwrap(), 1).unwrap();
        assert_eq!(rows, vec![("1.2.3.4".to_string(), 1)]);
    }

    #[test]
    fn test_equal_counts_keep_first_seen_order() {
        let temp = log_with(&[
            failed_line("9.9.9.9"),
            failed_line("8.8.8.8"),
            failed_line("7.7.7.7"),
            failed_line("8.8.8.8"),
            failed_line("9.9.9.9"),
            failed_line("7.7.7.7"),
        ]);
        let rows = aggregate(temp.path().to_str().unwrap(), 1).unwrap();
        assert_eq!(
            rows,
            vec![
                ("9.9.9.9".to_string(), 2),
                ("8.8.8.8".to_string(), 2),
                ("7.7.7.7".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_empty_file_yields_no_rows() {
        let temp = log_with(&[]);
        let rows = aggregate(temp.path().to_str().unwrap(), 1).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_min_count_zero_reports_everything() {
        let temp = log_with(&[failed_line("5.6.7.8")]);
        let rows = aggregate(temp.path().to_str().unwrap(), 0).unwrap();
        assert_eq!(rows, vec![("5.6.7.8".to_string(), 1)]);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        assert!(aggregate("/nonexistent/cowrie.log", 1).is_err());
    }
}
