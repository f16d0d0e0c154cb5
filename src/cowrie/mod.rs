//! Cowrie log line parsing.
//!
//! Cowrie's transport log is plain text, one event per line. Events of
//! interest carry a session tag of the form `[HoneyPotSSHTransport,<id>,<ip>]`
//! followed by free-form message text. This module defines the extracted
//! event types and the regex patterns that recognize them.

pub mod patterns;
pub mod types;
