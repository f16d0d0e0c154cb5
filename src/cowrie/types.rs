//! Events extracted from Cowrie transport log lines.
//!
//! Each type corresponds to one line pattern. Instances are transient: the
//! scan loop folds them into its aggregation maps and drops them immediately.

/// A failed authentication attempt against the emulated shell.
///
/// Only the source IP matters for counting; the credential text on the line
/// is matched but discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedLogin {
    pub ip: String,
}

/// A successful authentication attempt, with the credentials used verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessfulLogin {
    pub ip: String,
    pub username: String,
    pub password: String,
}

/// An SSH client hassh fingerprint presented during key exchange.
///
/// The fingerprint is exactly 32 characters drawn from `0-9`, `a-f` and `:`,
/// as Cowrie logs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientFingerprint {
    pub ip: String,
    pub fingerprint: String,
}

/// A new inbound connection accepted by the SSH factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConnection {
    /// ISO 8601 timestamp as logged, without the trailing `Z`.
    pub timestamp: String,
    pub ip: String,
}
