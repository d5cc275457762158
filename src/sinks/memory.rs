//! In-memory sink
//!
//! Collects written lines in a shared buffer that stays inspectable after
//! the sink has been handed to a logger. Useful for tests and for callers
//! that embed the logger and want the text back instead of terminal or
//! file output.

use crate::core::{LogLevel, Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

/// Cloneable view into a [`MemorySink`]'s buffer.
#[derive(Clone)]
pub struct MemoryHandle {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: Arc::new(Mutex::new(String::new())),
        }
    }

    /// A handle that keeps reading the buffer after the sink moves away.
    #[must_use]
    pub fn handle(&self) -> MemoryHandle {
        MemoryHandle {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for MemorySink {
    fn write(&mut self, _level: LogLevel, line: &str) -> Result<()> {
        let mut buffer = self.buffer.lock();
        buffer.push_str(line);
        buffer.push('\n');
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

impl MemoryHandle {
    #[must_use]
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}
