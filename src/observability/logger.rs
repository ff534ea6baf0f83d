//! Structured JSON logger
//!
//! One log line per event, written synchronously with no buffering. Fields
//! are emitted in deterministic order (the fixed `event` and `severity`
//! keys first, then the remaining fields alphabetically), so identical
//! events always produce identical lines.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured logger.
///
/// `INFO` goes to stdout; `WARN` and `ERROR` go to stderr.
pub struct Logger;

impl Logger {
    /// Log a normal operational event
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log a recoverable issue
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Log an operation failure
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }

    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::format_line(severity, event, fields);

        // One write_all per line keeps lines whole under concurrency
        if severity == Severity::Info {
            let mut out = io::stdout();
            let _ = out.write_all(line.as_bytes());
            let _ = out.flush();
        } else {
            let mut err = io::stderr();
            let _ = err.write_all(line.as_bytes());
            let _ = err.flush();
        }
    }

    fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut line = String::with_capacity(128);

        line.push('{');
        Self::push_entry(&mut line, "event", event);
        line.push(',');
        Self::push_entry(&mut line, "severity", severity.as_str());

        let mut sorted_fields: Vec<_> = fields.iter().collect();
        sorted_fields.sort_by_key(|(key, _)| *key);

        for (key, value) in sorted_fields {
            line.push(',');
            Self::push_entry(&mut line, key, value);
        }

        line.push('}');
        line.push('\n');
        line
    }

    fn push_entry(line: &mut String, key: &str, value: &str) {
        line.push('"');
        Self::escape_into(line, key);
        line.push_str("\":\"");
        Self::escape_into(line, value);
        line.push('"');
    }

    /// Escape special characters for JSON strings
    fn escape_into(out: &mut String, s: &str) {
        for c in s.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c.is_control() => {
                    use fmt::Write;
                    let _ = write!(out, "\\u{:04x}", c as u32);
                }
                c => out.push(c),
            }
        }
    }
}
