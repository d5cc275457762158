//! Core logging types: severity, format engine, logger, and registry

pub mod emergency;
pub mod error;
pub mod format;
pub mod format_arg;
pub mod log_level;
pub mod logger;
pub mod registry;
pub mod sink;
pub mod timestamp;

pub use emergency::{clear_exit_hook, set_exit_hook, terminate, EMERGENCY_EXIT_CODE};
pub use error::{LoggerError, Result};
pub use format::render;
pub use format_arg::{ArgList, FormatArg};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use registry::{LoggerRegistry, SharedLogger};
pub use sink::Sink;
pub use timestamp::TimestampFormat;
