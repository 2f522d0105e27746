//! Per-invocation logging lifecycle.
//!
//! A long-lived host keeps its loggers (and their handlers) alive between
//! tool runs, so the naive configure-once approach either does nothing on
//! the second run or stacks a duplicate handler per run. These functions
//! bracket one tool invocation: [`init_session`] at the top of the script,
//! [`close_session`] at the bottom.

use std::sync::Arc;

use crate::config::SessionConfig;
use crate::error::LoggingError;
use crate::formatters::StandardFormatter;
use crate::handlers::FileHandler;
use crate::host::HostOutputHandler;
use crate::logger::Logger;

/// Reset `logger` and attach exactly the handlers `config` names.
///
/// Idempotent: running a tool N times in one host session leaves the same
/// handler set as running it once. With neither a file nor a host sink
/// configured the logger ends up handler-free, ready for manual
/// `add_handler` calls.
///
/// The only error source is opening the log file.
pub async fn init_session(logger: &Logger, config: &SessionConfig) -> Result<(), LoggingError> {
	// Handlers from a previous run survive in the host process; drop them
	// before attaching anything.
	logger.clear_handlers().await;
	logger.set_level(config.level).await;

	if let Some(file) = &config.file {
		let handler = FileHandler::new(&file.path, file.append, config.level)?
			.with_formatter(Box::new(StandardFormatter::new(&config.date_format)));
		logger.add_handler(Box::new(handler)).await;
	}

	if let Some(sink) = &config.host_sink {
		let handler = HostOutputHandler::new(Arc::clone(sink), config.level)
			.with_severity_map(config.severity_map)
			.with_formatter(Box::new(StandardFormatter::new(&config.date_format)));
		logger.add_handler(Box::new(handler)).await;
	}

	Ok(())
}

/// Flush all handlers at the end of a tool run.
///
/// The host keeps the process alive afterwards, so buffered file output
/// that is not flushed here may not appear until some later run.
pub async fn close_session(logger: &Logger) {
	logger.flush().await;
}

/// Whether `logger` currently has any handlers attached (i.e. a session is
/// configured).
pub fn session_active(logger: &Logger) -> bool {
	logger.handler_count() > 0
}
