//! File logging example
//!
//! Demonstrates a file-backed logger with a custom date pattern and a
//! registry entry shared between call sites.
//!
//! Run with: cargo run --example file_logging

use ss_logger::args;
use ss_logger::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== ss_logger - File Logging Example ===\n");

    let logger = Logger::builder()
        .name("relay")
        .sink(FileSink::new("relay.log")?)
        .date_format(TimestampFormat::Custom("%A %b %d %H:%M:%S %Y".to_string()))
        .build();

    let shared = Arc::new(logger);
    LoggerRegistry::global().add_logger("relay", Arc::clone(&shared));

    println!("1. Writing to relay.log:");
    shared.info("relay started on port %d", &args![8388]);
    shared.info("accepted %d connections", &args![42]);
    shared.warning("upstream %s latency %dms", &args!["upstream:443", 350]);
    shared.error("session %x aborted", &args![48879]);

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        shared.info("processed batch %d/5", &args![i]);
    }

    // Another call site finds the same logger by name.
    if let Some(found) = LoggerRegistry::global().get("relay") {
        found.info("looked up %s by name", &args!["relay"]);
    }

    shared.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'relay.log' for the stamped output");

    Ok(())
}
