//! Basic logger usage example
//!
//! Demonstrates severity levels, the mini-format tokens, and the rendered
//! text every call returns.
//!
//! Run with: cargo run --example basic_usage

use ss_logger::prelude::*;
use ss_logger::{args, info};
use std::sync::Arc;

fn main() {
    println!("=== ss_logger - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .name("relay")
        .level(LogLevel::Verbose)
        .sink(ConsoleSink::new())
        .build();

    println!("1. Logging at different levels:");
    logger.verbose("accepted socket from %s", &args!["10.0.0.1:51423"]);
    logger.debug("handshake state %s", &args!["await-reply"]);
    logger.info("relay started on port %d", &args![8388]);
    logger.warning("upstream latency %dms", &args![350]);
    logger.error("connect to %s failed", &args!["upstream:443"]);

    println!("\n2. Format tokens:");
    let text = logger.info("user %s logged in with code %x", &args!["alice", 255]);
    println!("   returned text: {}", text);
    logger.info("progress: 100%% done", &args![]);

    println!("\n3. Raising the threshold to WARNING:");
    logger.set_level(LogLevel::Warning);
    let hidden = logger.info("filtered, but still rendered: %s", &args!["unseen"]);
    println!("   info call returned {:?} without writing", hidden);
    logger.warning("visible above the threshold", &args![]);

    println!("\n4. Named registry and the default path:");
    let registry = LoggerRegistry::global();
    registry.add_logger("relay", Arc::new(logger));
    if let Some(shared) = registry.get("relay") {
        shared.warning("looked up %s by name", &args!["relay"]);
    }

    // Level macros go through the implicit default logger.
    info!("macro call with %d argument", 1);

    registry.remove_logger("relay");

    println!("\n=== Example completed successfully! ===");
}
