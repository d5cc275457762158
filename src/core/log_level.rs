//! Severity level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered severity levels, lowest to highest.
///
/// The numeric ranks are stable bitmask-style values used for threshold
/// comparison; the derived ordering agrees with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
#[repr(u8)]
pub enum LogLevel {
    Verbose = 0x00,
    Debug = 0x10,
    #[default]
    Info = 0x20,
    Warning = 0x40,
    Error = 0x80,
    Emergency = 0xff,
}

impl LogLevel {
    /// Numeric rank of this level.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Whether a message at `level` passes a threshold of `self`.
    pub fn accepts(&self, level: LogLevel) -> bool {
        level.rank() >= self.rank()
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Verbose => "VERBOSE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Emergency => "EMERGENCY",
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Verbose => BrightBlack,
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Emergency => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "VERBOSE" => Ok(LogLevel::Verbose),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "EMERGENCY" => Ok(LogLevel::Emergency),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
