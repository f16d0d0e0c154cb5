//! Credential pairs that successfully authenticated.
//!
//! Groups successful logins by (username, password) and counts the distinct
//! source IPs behind each pair. A pair used from many IPs is almost
//! certainly in a shared wordlist.
//!
//! # Usage
//!
//! ```bash
//! cowrie-log cowrie.log --task successful-creds
//! ```
//!
//! # Output
//!
//! One row per credential pair with its distinct IP count, sorted by IP
//! count descending. Credentials are printed verbatim, exactly as attackers
//! sent them. Pairs with equal counts keep their first-seen order.

use crate::cowrie::patterns;
use crate::utils::reader::open_log;
use crate::utils::table::{Align, Table};
use anyhow::Result;
use log::debug;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::io::{BufRead, BufReader};

/// A credential pair and the number of distinct IPs that logged in with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRow {
    pub username: String,
    pub password: String,
    pub ip_count: usize,
}

/// Collects distinct source IPs per (username, password) pair. Rows are
/// sorted by distinct IP count descending, first-seen order on ties.
pub fn aggregate(log_file: &str) -> Result<Vec<CredentialRow>> {
    // (username, password) -> (distinct IPs, first-seen order)
    let mut creds: HashMap<(String, String), (HashSet<String>, usize)> = HashMap::new();
    let mut lines_read = 0usize;

    let reader = BufReader::new(open_log(log_file)?);
    for line in reader.lines() {
        let line = line?;
        lines_read += 1;
        if let Some(event) = patterns::successful_login(&line) {
            let next_order = creds.len();
            let entry = creds
                .entry((event.username, event.password))
                .or_insert_with(|| (HashSet::new(), next_order));
            entry.0.insert(event.ip);
        }
    }
    debug!(
        "{}: scanned {} lines, {} distinct credential pairs",
        log_file,
        lines_read,
        creds.len()
    );

    let mut rows: Vec<(CredentialRow, usize)> = creds
        .into_iter()
        .map(|((username, password), (ips, order))| {
            (
                CredentialRow {
                    username,
                    password,
                    ip_count: ips.len(),
                },
                order,
            )
        })
        .collect();
    rows.sort_by_key(|&(ref row, order)| (Reverse(row.ip_count), order));
    Ok(rows.into_iter().map(|(row, _)| row).collect())
}

pub fn run(log_file: &str) -> Result<()> {
    let rows = aggregate(log_file)?;

    let mut table = Table::new(&[
        ("Username", Align::Left),
        ("Password", Align::Left),
        ("IP Count", Align::Right),
    ]);
    for row in rows {
        table.add_row(vec![row.username, row.password, row.ip_count.to_string()]);
    }
    println!("{}", table.render());
    Ok(())
}
