//! Sink trait for log output destinations

use super::{error::Result, log_level::LogLevel};

pub trait Sink: Send + Sync {
    fn write(&mut self, level: LogLevel, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
