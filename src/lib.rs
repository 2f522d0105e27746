//! # geotool-logging
//!
//! Logging adapter for desktop GIS hosts that execute script tools
//! repeatedly inside one long-lived process.
//!
//! In such hosts the logging state of a tool survives the tool itself:
//! loggers looked up by name on the next run still carry the previous run's
//! handlers, so naive setup either silently does nothing or accumulates a
//! duplicate handler per run. This crate provides:
//!
//! - a per-invocation session reset ([`init_session`] / [`close_session`])
//!   that guarantees each run starts from exactly the configured handler
//!   set and ends with all output flushed;
//! - a [`HostOutputHandler`] that forwards formatted records into the
//!   host's own tool-output window through an injectable [`MessageSink`],
//!   mapping log levels to the host's display categories via a
//!   configurable [`SeverityMap`].
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use geotool_logging::{
//!     HostSeverity, LoggingManager, MessageSink, SessionConfig, close_session, init_session,
//! };
//!
//! // Stand-in for the host's message-reporting API.
//! struct StdoutSink;
//!
//! impl MessageSink for StdoutSink {
//!     fn post(&self, severity: HostSeverity, text: &str) {
//!         println!("[{:?}] {}", severity, text);
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let manager = LoggingManager::new();
//! let logger = manager.get_logger("clip_tool");
//!
//! let config = SessionConfig::default().with_host_sink(Arc::new(StdoutSink));
//! init_session(&logger, &config).await.unwrap();
//!
//! logger.info("tool started".to_string()).await;
//! logger.warning("empty input layer".to_string()).await;
//!
//! close_session(&logger).await;
//! # });
//! ```

pub mod config;
pub mod error;
pub mod formatters;
pub mod handlers;
pub mod host;
pub mod logger;
pub mod session;

pub use config::{FileConfig, LoggingManager, SessionConfig};
pub use error::LoggingError;
pub use formatters::{JsonFormatter, LogFormatter, StandardFormatter, escape_control_chars};
pub use handlers::{ConsoleHandler, FileHandler, MemoryHandler};
pub use host::{HostOutputHandler, HostSeverity, MessageSink, SeverityMap};
pub use logger::{LogHandler, LogLevel, LogRecord, Logger};
pub use session::{close_session, init_session, session_active};
