//! Console sink implementation

use crate::core::{LogLevel, Result, Sink};

pub struct ConsoleSink {
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, level: LogLevel, line: &str) -> Result<()> {
        #[cfg(feature = "console")]
        let output = if self.use_colors {
            use colored::Colorize;
            line.color(level.color_code()).to_string()
        } else {
            line.to_string()
        };
        #[cfg(not(feature = "console"))]
        let output = line.to_string();

        // Route Error and Emergency levels to stderr, others to stdout
        match level {
            LogLevel::Error | LogLevel::Emergency => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
