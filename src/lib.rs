//! # ss_logger
//!
//! A severity-leveled logging library built around a printf-style
//! mini-format engine and a process-wide named-logger registry.
//!
//! ## Features
//!
//! - **Mini-format engine**: `%%` escapes, `%x` hex prefixes, and
//!   specifier-agnostic `%` substitution over heterogeneous arguments
//! - **Six severities**: `Verbose` through `Emergency`, with per-logger
//!   thresholds and never-filtered emergency termination
//! - **Named registry**: process-wide shared loggers plus an implicit
//!   default path behind the level macros
//! - **Thread safe**: all logger and registry state is lock-guarded
//!
//! ## Quick start
//!
//! ```
//! use ss_logger::{args, info, render};
//!
//! // Render-and-log through the default logger; the text comes back.
//! let text = info!("user %s logged in with code %x", "alice", 255);
//! assert_eq!(text, "user alice logged in with code 0x255");
//!
//! // Or render without logging.
//! assert_eq!(render("100%% done", &args![]), "100% done");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        ArgList, FormatArg, LogLevel, Logger, LoggerBuilder, LoggerError, LoggerRegistry, Result,
        SharedLogger, Sink, TimestampFormat, EMERGENCY_EXIT_CODE,
    };
    pub use crate::sinks::{ConsoleSink, MemoryHandle, MemorySink};

    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
}

pub use crate::core::{
    clear_exit_hook, render, set_exit_hook, terminate, ArgList, FormatArg, LogLevel, Logger,
    LoggerBuilder, LoggerError, LoggerRegistry, Result, SharedLogger, Sink, TimestampFormat,
    EMERGENCY_EXIT_CODE,
};
pub use crate::core::registry::{debug, emergency, error, info, log, verbose, warning};
pub use crate::sinks::{ConsoleSink, MemoryHandle, MemorySink};

#[cfg(feature = "file")]
pub use crate::sinks::FileSink;
