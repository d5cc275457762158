//! Logging macros for ergonomic call sites.
//!
//! The level macros forward a format string and arguments to the implicit
//! default logger and hand back the rendered text, so a call site can log
//! and reuse the message in one expression. `args!` wraps heterogeneous
//! values into a [`FormatArg`](crate::FormatArg) list for the lower-level
//! logger methods.
//!
//! # Examples
//!
//! ```
//! use ss_logger::{args, info, warning};
//!
//! let addr = "10.0.0.1";
//! info!("connection from %s", addr);
//!
//! let text = warning!("slow handshake with %s after %dms", addr, 350);
//! assert_eq!(text, "slow handshake with 10.0.0.1 after 350ms");
//! ```

/// Build a fixed-arity argument list from heterogeneous values.
///
/// # Examples
///
/// ```
/// use ss_logger::{args, render};
///
/// let text = render("%s scored %d", &args!["alice", 97]);
/// assert_eq!(text, "alice scored 97");
/// ```
#[macro_export]
macro_rules! args {
    () => {{
        let list: [$crate::FormatArg; 0] = [];
        list
    }};
    ($($value:expr),+ $(,)?) => {
        [$($crate::FormatArg::from($value)),+]
    };
}

/// Log at an arbitrary severity through the default logger.
///
/// # Examples
///
/// ```
/// use ss_logger::{log, LogLevel};
///
/// log!(LogLevel::Info, "relay started");
/// log!(LogLevel::Error, "bind failed on port %d", 8388);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log($level, $fmt, &$crate::args![$($arg),*])
    };
}

/// Log a verbose-level message through the default logger.
///
/// # Examples
///
/// ```
/// use ss_logger::verbose;
///
/// verbose!("entering relay loop");
/// verbose!("poll returned %d events", 3);
/// ```
#[macro_export]
macro_rules! verbose {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::verbose($fmt, &$crate::args![$($arg),*])
    };
}

/// Log a debug-level message through the default logger.
///
/// # Examples
///
/// ```
/// use ss_logger::debug;
///
/// debug!("handshake state: %s", "await-reply");
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::debug($fmt, &$crate::args![$($arg),*])
    };
}

/// Log an info-level message through the default logger.
///
/// # Examples
///
/// ```
/// use ss_logger::info;
///
/// info!("listening on %s", "0.0.0.0:8388");
/// ```
#[macro_export]
macro_rules! info {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::info($fmt, &$crate::args![$($arg),*])
    };
}

/// Log a warning-level message through the default logger.
///
/// # Examples
///
/// ```
/// use ss_logger::warning;
///
/// warning!("retry %d of %d", 2, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::warning($fmt, &$crate::args![$($arg),*])
    };
}

/// Log an error-level message through the default logger.
///
/// # Examples
///
/// ```
/// use ss_logger::error;
///
/// error!("connect to %s failed", "upstream:443");
/// ```
#[macro_export]
macro_rules! error {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::error($fmt, &$crate::args![$($arg),*])
    };
}

/// Log an emergency-level message and terminate the process.
///
/// The message is written regardless of the threshold; once delivered,
/// the process exits with [`EMERGENCY_EXIT_CODE`](crate::EMERGENCY_EXIT_CODE).
///
/// # Examples
///
/// ```no_run
/// use ss_logger::emergency;
///
/// emergency!("config file %s is unreadable", "/etc/ss/relay.json");
/// ```
#[macro_export]
macro_rules! emergency {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::emergency($fmt, &$crate::args![$($arg),*])
    };
}
