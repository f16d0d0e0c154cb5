//! Regex extractors for the transport log patterns.
//!
//! Each extractor runs an unanchored search over the whole line and returns
//! at most one event. Lines matching none of the patterns are simply not
//! events; callers skip them without error.

use lazy_static::lazy_static;
use regex::Regex;

use super::types::{ClientFingerprint, FailedLogin, NewConnection, SuccessfulLogin};

lazy_static! {
    static ref FAILED_LOGIN: Regex = Regex::new(
        r"\[HoneyPotSSHTransport,\d+,(?P<ip>\d+\.\d+\.\d+\.\d+)\].*?login attempt \[.*?/.*?\] failed"
    )
    .unwrap();
    static ref SUCCESSFUL_LOGIN: Regex = Regex::new(
        r"\[HoneyPotSSHTransport,\d+,(?P<ip>\d+\.\d+\.\d+\.\d+)\].*?login attempt \[(?P<user>[^/]+)/(?P<pw>[^\]]+)\] succeeded"
    )
    .unwrap();
    static ref CLIENT_FINGERPRINT: Regex = Regex::new(
        r"\[HoneyPotSSHTransport,\d+,(?P<ip>\d+\.\d+\.\d+\.\d+)\].*?SSH client hassh fingerprint: (?P<fp>[0-9a-f:]{32})"
    )
    .unwrap();
    static ref NEW_CONNECTION: Regex = Regex::new(
        r"(?P<ts>\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?)Z \[cowrie\.ssh\.factory\.CowrieSSHFactory\] New connection: (?P<ip>\d+\.\d+\.\d+\.\d+):\d+"
    )
    .unwrap();
}

/// Extracts a failed login attempt from a log line.
pub fn failed_login(line: &str) -> Option<FailedLogin> {
    FAILED_LOGIN.captures(line).map(|caps| FailedLogin {
        ip: caps["ip"].to_string(),
    })
}

/// Extracts a successful login attempt, with its credentials, from a log line.
///
/// The username may contain any character except `/`, the password any
/// character except `]`. A line whose bracket text has no `/` separator
/// matches neither this pattern nor [`failed_login`].
pub fn successful_login(line: &str) -> Option<SuccessfulLogin> {
    SUCCESSFUL_LOGIN.captures(line).map(|caps| SuccessfulLogin {
        ip: caps["ip"].to_string(),
        username: caps["user"].to_string(),
        password: caps["pw"].to_string(),
    })
}

/// Extracts a hassh fingerprint announcement from a log line.
pub fn client_fingerprint(line: &str) -> Option<ClientFingerprint> {
    CLIENT_FINGERPRINT.captures(line).map(|caps| ClientFingerprint {
        ip: caps["ip"].to_string(),
        fingerprint: caps["fp"].to_string(),
    })
}

/// Extracts a new-connection event from a log line.
pub fn new_connection(line: &str) -> Option<NewConnection> {
    NEW_CONNECTION.captures(line).map(|caps| NewConnection {
        timestamp: caps["ts"].to_string(),
        ip: caps["ip"].to_string(),
    })
}
