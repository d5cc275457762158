//! Timestamp formatting utilities
//!
//! Provides the configurable date/time patterns a logger stamps onto each
//! written line. Supports ISO 8601, RFC 3339, Unix timestamps, and custom
//! strftime patterns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Date/time rendering pattern for log line stamps
///
/// # Examples
///
/// ```
/// use ss_logger::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Iso8601;
/// let stamp = format.format(&Utc::now());
/// assert!(stamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    ///
    /// This is the default pattern.
    #[default]
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use ss_logger::TimestampFormat;
    ///
    /// // Long weekday form, e.g. "Wednesday Jan 08 10:30:45 2025"
    /// let format = TimestampFormat::Custom("%A %b %d %H:%M:%S %Y".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this pattern
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Render the current instant according to this pattern
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Utc::now())
    }
}
