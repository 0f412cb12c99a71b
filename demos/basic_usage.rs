//! Basic logger usage example
//!
//! Demonstrates the console logger, every level, and redirecting a logger
//! to a file.
//!
//! Run with: cargo run --example basic_usage

use rust_simple_logger::prelude::*;
use rust_simple_logger::sinks::FileSink;
use rust_simple_logger::{info, warn};

fn main() -> Result<()> {
    println!("=== Rust Simple Logger - Basic Usage Example ===\n");

    let log = console();

    println!("1. Logging at every level (colored, stderr):");
    info!(log, "http://{}", "127.0.0.1");
    warn!(log, "pool at {}% capacity", 85);
    log.debug("cache warmed");
    log.emer("replica lost");
    log.trace("entering handshake");
    log.paninf("invariant check failed, continuing");

    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config missing");
    log.error(&err, "startup");

    println!("\n2. Protocol messages:");
    for i in 0..3 {
        log.message(i % 2 == 0, &format!("frame {}", i));
    }

    println!("\n3. Plain logger writing to a file:");
    let path = std::env::temp_dir().join("rust_simple_logger_demo.log");
    let file_logger = Logger::simple();
    file_logger.set_output(FileSink::open(&path)?);
    file_logger.info("written to file");
    println!("   wrote {}", path.display());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
