//! Main logger implementation

use super::{
    emergency::{self, EMERGENCY_EXIT_CODE},
    error::Result,
    format::render,
    format_arg::FormatArg,
    log_level::LogLevel,
    sink::Sink,
    timestamp::TimestampFormat,
};
use parking_lot::{Mutex, RwLock};
use std::fmt;

/// A named logger bound to a single output destination.
///
/// Every log call renders its format string, stamps the line with the
/// date/time pattern and the severity label, and writes it iff the
/// severity passes the threshold. The rendered message is returned either
/// way, so callers can log and reuse the text in one step. Emergency
/// messages bypass the threshold and terminate the process once written.
pub struct Logger {
    name: RwLock<String>,
    threshold: RwLock<LogLevel>,
    date_format: RwLock<TimestampFormat>,
    sink: Mutex<Box<dyn Sink>>,
}

impl Logger {
    #[must_use]
    pub fn new<S: Sink + 'static>(sink: S) -> Self {
        Self {
            name: RwLock::new(String::new()),
            threshold: RwLock::new(LogLevel::Info),
            date_format: RwLock::new(TimestampFormat::default()),
            sink: Mutex::new(Box::new(sink)),
        }
    }

    /// Rename the logger. Meaningful before or at registration; lookups go
    /// by the registry key.
    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.write() = name.into();
    }

    pub fn name(&self) -> String {
        self.name.read().clone()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.threshold.write() = level;
    }

    pub fn level(&self) -> LogLevel {
        *self.threshold.read()
    }

    pub fn set_date_format(&self, format: TimestampFormat) {
        *self.date_format.write() = format;
    }

    pub fn date_format(&self) -> TimestampFormat {
        self.date_format.read().clone()
    }

    /// Render `fmt` against `args`, write the stamped line if `level`
    /// passes the threshold, and return the rendered message.
    ///
    /// An [`Emergency`](LogLevel::Emergency) call is never filtered and
    /// terminates the process after the line has been written and the
    /// sink flushed.
    pub fn log(&self, level: LogLevel, fmt: &str, args: &[FormatArg]) -> String {
        let message = render(fmt, args);

        if level == LogLevel::Emergency || self.level().accepts(level) {
            self.write(level, &message);
        }

        if level == LogLevel::Emergency {
            if let Err(e) = self.flush() {
                eprintln!("[LOGGER ERROR] Flush before termination failed: {}", e);
            }
            emergency::terminate(EMERGENCY_EXIT_CODE);
        }

        message
    }

    /// tracing every step taken
    #[inline]
    pub fn verbose(&self, fmt: &str, args: &[FormatArg]) -> String {
        self.log(LogLevel::Verbose, fmt, args)
    }

    /// detailed diagnostic information
    #[inline]
    pub fn debug(&self, fmt: &str, args: &[FormatArg]) -> String {
        self.log(LogLevel::Debug, fmt, args)
    }

    /// interesting runtime events
    #[inline]
    pub fn info(&self, fmt: &str, args: &[FormatArg]) -> String {
        self.log(LogLevel::Info, fmt, args)
    }

    /// exceptional occurrences that are not errors
    #[inline]
    pub fn warning(&self, fmt: &str, args: &[FormatArg]) -> String {
        self.log(LogLevel::Warning, fmt, args)
    }

    /// runtime errors that do not require immediate action
    #[inline]
    pub fn error(&self, fmt: &str, args: &[FormatArg]) -> String {
        self.log(LogLevel::Error, fmt, args)
    }

    /// system is unusable, the process exits after the write
    #[inline]
    pub fn emergency(&self, fmt: &str, args: &[FormatArg]) -> String {
        self.log(LogLevel::Emergency, fmt, args)
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }

    /// Stamp and deliver one line; write failures are absorbed here.
    fn write(&self, level: LogLevel, message: &str) {
        let stamp = self.date_format.read().now();
        let line = format!("[{}] [{}] {}", stamp, level.to_str(), message);

        let mut sink = self.sink.lock();
        if let Err(e) = sink.write(level, &line) {
            eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &*self.name.read())
            .field("threshold", &*self.threshold.read())
            .field("date_format", &*self.date_format.read())
            .field("sink", &self.sink.lock().name())
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during drop: {}", e);
        }
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use ss_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .name("relay")
///     .level(LogLevel::Debug)
///     .sink(ConsoleSink::new())
///     .build();
/// ```
pub struct LoggerBuilder {
    name: String,
    level: LogLevel,
    date_format: TimestampFormat,
    sink: Option<Box<dyn Sink>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            name: String::new(),
            level: LogLevel::Info,
            date_format: TimestampFormat::default(),
            sink: None,
        }
    }

    /// Set the logger name
    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the minimum severity threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the date/time stamp pattern
    #[must_use = "builder methods return a new value"]
    pub fn date_format(mut self, format: TimestampFormat) -> Self {
        self.date_format = format;
        self
    }

    /// Set the output destination
    ///
    /// If not called, the logger writes to the console.
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(crate::sinks::ConsoleSink::new()));

        Logger {
            name: RwLock::new(self.name),
            threshold: RwLock::new(self.level),
            date_format: RwLock::new(self.date_format),
            sink: Mutex::new(sink),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        LoggerBuilder::new().build()
    }
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use ss_logger::prelude::*;
    ///
    /// let logger = Logger::builder().level(LogLevel::Verbose).build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
