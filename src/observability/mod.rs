//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! client + CLI produce:
//!     → tracing events (call id, method, URL, status)
//!
//! Consumers:
//!     → logging.rs subscriber on stderr (pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - Logs go to stderr so stdout stays machine readable
//! - RUST_LOG overrides the configured level

pub mod logging;

pub use logging::init_logging;
