//! Candidate bot clients by shared hassh fingerprint.
//!
//! A hassh fingerprint identifies SSH client software by its key exchange
//! negotiation. The same fingerprint showing up from many distinct source
//! IPs points at shared automated tooling rather than individual operators.
//!
//! # Usage
//!
//! ```bash
//! # Fingerprints seen from 3+ distinct IPs (default)
//! cowrie-log cowrie.log --task identify-bots
//!
//! # Raise the bar for large campaigns
//! cowrie-log cowrie.log --task identify-bots --min-ips 10
//! ```
//!
//! # Output
//!
//! One row per fingerprint with its distinct IP count, sorted by count
//! descending. Fingerprints with equal counts keep their first-seen order.

use crate::cowrie::patterns;
use crate::utils::reader::open_log;
use crate::utils::table::{Align, Table};
use anyhow::Result;
use log::debug;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::io::{BufRead, BufReader};

/// Collects distinct source IPs per fingerprint and returns
/// `(fingerprint, ip_count)` rows with ip_count >= `min_ips`, sorted by
/// count descending, first-seen order on ties.
pub fn aggregate(log_file: &str, min_ips: usize) -> Result<Vec<(String, usize)>> {
    // fingerprint -> (distinct IPs, first-seen order)
    let mut fingerprints: HashMap<String, (HashSet<String>, usize)> = HashMap::new();
    let mut lines_read = 0usize;

    let reader = BufReader::new(open_log(log_file)?);
    for line in reader.lines() {
        let line = line?;
        lines_read += 1;
        if let Some(event) = patterns::client_fingerprint(&line) {
            let next_order = fingerprints.len();
            let entry = fingerprints
                .entry(event.fingerprint)
                .or_insert_with(|| (HashSet::new(), next_order));
            entry.0.insert(event.ip);
        }
    }
    debug!(
        "{}: scanned {} lines, {} distinct fingerprints",
        log_file,
        lines_read,
        fingerprints.len()
    );

    let mut rows: Vec<(String, usize, usize)> = fingerprints
        .into_iter()
        .filter(|(_, (ips, _))| ips.len() >= min_ips)
        .map(|(fp, (ips, order))| (fp, ips.len(), order))
        .collect();
    rows.sort_by_key(|&(_, count, order)| (Reverse(count), order));
    Ok(rows.into_iter().map(|(fp, count, _)| (fp, count)).collect())
}

pub fn run(log_file: &str, min_ips: usize) -> Result<()> {
    let rows = aggregate(log_file, min_ips)?;

    let mut table = Table::new(&[("Fingerprint", Align::Left), ("IPs", Align::Right)]);
    for (fingerprint, count) in rows {
        table.add_row(vec![fingerprint, count.to_string()]);
    }
    println!("{}", table.render());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FP_A: &str = "ec7378c1a92f5a8dde7e8b7a1ddf33d1";
    const FP_B: &str = "06046964c022c6407d15a27b12a6a4fb";

    fn fingerprint_line(ip: &str, fp: &str) -> String {
        format!(
            "2024-03-11T09:14:20Z [HoneyPotSSHTransport,1023,{}] SSH client hassh fingerprint: {}",
            ip, fp
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
    fn test_below_threshold_fingerprint_excluded() {
        let temp = log_with(&[
            fingerprint_line("1.1.1.1", FP_A),
            fingerprint_line("2.2.2.2", FP_A),
        ]);
        let rows = aggregate(temp.path().to_str().unwrap(), 3).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_threshold_met_fingerprint_reported() {
        let temp = log_with(&[
            fingerprint_line("1.1.1.1", FP_A),
            fingerprint_line("2.2.2.2", FP_A),
            fingerprint_line("3.3.3.3", FP_A),
        ]);
        let rows = aggregate(temp.path().to_str().unwrap(), 3).unwrap();
        assert_eq!(rows, vec![(FP_A.to_string(), 3)]);
    }

    #[test]
    fn test_repeat_ips_deduplicated() {
        let temp = log_with(&[
            fingerprint_line("1.1.1.1", FP_A),
            fingerprint_line("1.1.1.1", FP_A),
            fingerprint_line("2.2.2.2", FP_A),
        ]);
        let rows = aggregate(temp.path().to_str().unwrap(), 1).unwrap();
        assert_eq!(rows, vec![(FP_A.to_string(), 2)]);
    }

    #[test]
    fn test_sorted_by_ip_count_descending() {
        let temp = log_with(&[
            fingerprint_line("1.1.1.1", FP_B),
            fingerprint_line("1.1.1.1", FP_A),
            fingerprint_line("2.2.2.2", FP_A),
        ]);
        let rows = aggregate(temp.path().to_str().unwrap(), 1).unwrap();
        assert_eq!(
            rows,
            vec![(FP_A.to_string(), 2), (FP_B.to_string(), 1)]
        );
    }
}
