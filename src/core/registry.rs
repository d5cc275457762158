//! Process-wide named-logger registry
//!
//! Loggers are shared: the registry holds one `Arc` per name and hands out
//! clones on lookup, so removing an entry never invalidates instances still
//! held elsewhere. The level-keyed convenience functions at the bottom go
//! through a separate implicit default logger, lazily created on first use.

use super::{format_arg::FormatArg, log_level::LogLevel, logger::Logger};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Shared handle to a registered logger.
pub type SharedLogger = Arc<Logger>;

/// Global registry instance.
static REGISTRY: OnceLock<LoggerRegistry> = OnceLock::new();

/// Name-keyed collection of shared loggers.
///
/// All map access goes through a single lock: mutations exclude each other
/// and every lookup, so a lookup never observes a half-replaced entry.
/// Instances are fully constructed before they are swapped in.
#[derive(Default)]
pub struct LoggerRegistry {
    named: RwLock<HashMap<String, SharedLogger>>,
    default_logger: RwLock<Option<SharedLogger>>,
}

impl LoggerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide registry.
    #[must_use]
    pub fn global() -> &'static LoggerRegistry {
        REGISTRY.get_or_init(LoggerRegistry::new)
    }

    /// Insert `logger` under `name`, silently replacing any prior entry.
    ///
    /// The replaced instance keeps working for holders that still have it;
    /// its destruction is deferred until the last holder releases it.
    pub fn add_logger(&self, name: impl Into<String>, logger: SharedLogger) {
        self.named.write().insert(name.into(), logger);
    }

    /// Remove the entry for `name`, reporting whether one existed.
    pub fn remove_logger(&self, name: &str) -> bool {
        self.named.write().remove(name).is_some()
    }

    /// Look up the logger registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<SharedLogger> {
        self.named.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.named.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.named.read().is_empty()
    }

    /// The implicit logger behind the level-keyed convenience calls.
    ///
    /// Created lazily as an unnamed console logger at the default
    /// threshold.
    pub fn default_logger(&self) -> SharedLogger {
        if let Some(logger) = self.default_logger.read().as_ref() {
            return Arc::clone(logger);
        }

        let mut slot = self.default_logger.write();
        // Another thread may have raced us here.
        if let Some(logger) = slot.as_ref() {
            return Arc::clone(logger);
        }
        let logger = Arc::new(Logger::default());
        *slot = Some(Arc::clone(&logger));
        logger
    }

    /// Replace the implicit default logger.
    pub fn set_default_logger(&self, logger: SharedLogger) {
        *self.default_logger.write() = Some(logger);
    }

    /// Deliberate teardown: drop every registered logger and the default.
    pub fn clear(&self) {
        self.named.write().clear();
        *self.default_logger.write() = None;
    }
}

/// tracing every step taken
pub fn verbose(fmt: &str, args: &[FormatArg]) -> String {
    LoggerRegistry::global().default_logger().verbose(fmt, args)
}

/// detailed diagnostic information
pub fn debug(fmt: &str, args: &[FormatArg]) -> String {
    LoggerRegistry::global().default_logger().debug(fmt, args)
}

/// interesting runtime events
pub fn info(fmt: &str, args: &[FormatArg]) -> String {
    LoggerRegistry::global().default_logger().info(fmt, args)
}

/// exceptional occurrences that are not errors
pub fn warning(fmt: &str, args: &[FormatArg]) -> String {
    LoggerRegistry::global().default_logger().warning(fmt, args)
}

/// runtime errors that do not require immediate action
pub fn error(fmt: &str, args: &[FormatArg]) -> String {
    LoggerRegistry::global().default_logger().error(fmt, args)
}

/// system is unusable, the process exits after the write
pub fn emergency(fmt: &str, args: &[FormatArg]) -> String {
    LoggerRegistry::global().default_logger().emergency(fmt, args)
}

/// Log at an arbitrary severity through the default logger.
pub fn log(level: LogLevel, fmt: &str, args: &[FormatArg]) -> String {
    LoggerRegistry::global().default_logger().log(level, fmt, args)
}
