//! Sink implementations

pub mod console;
pub mod memory;

#[cfg(feature = "file")]
pub mod file;

pub use console::ConsoleSink;
pub use memory::{MemoryHandle, MemorySink};

#[cfg(feature = "file")]
pub use file::FileSink;

pub use crate::core::Sink;
