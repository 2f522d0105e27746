use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

/// A destination for log records.
///
/// Handlers carry their own threshold level, so a logger can fan a record
/// out to several handlers that each filter independently (a verbose file
/// log next to a warnings-only host window, for example).
#[async_trait::async_trait]
pub trait LogHandler: Send + Sync {
	async fn handle(&self, record: &LogRecord);
	fn level(&self) -> LogLevel;
	fn set_level(&mut self, level: LogLevel);

	/// Push any buffered output to its destination.
	///
	/// Long-lived hosts keep the process (and therefore the handler) alive
	/// after a tool run finishes, so buffered handlers must be flushed
	/// explicitly at end of run.
	async fn flush(&self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum LogLevel {
	Debug,
	Info,
	Warning,
	Error,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct LogRecord {
	pub level: LogLevel,
	pub logger_name: String,
	pub message: String,
	pub timestamp: DateTime<Utc>,
	pub extra: HashMap<String, serde_json::Value>,
}

impl LogRecord {
	pub fn new(level: LogLevel, logger_name: String, message: String) -> Self {
		Self {
			level,
			logger_name,
			message,
			timestamp: Utc::now(),
			extra: HashMap::new(),
		}
	}

	/// Attach a structured field to this record.
	pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
		self.extra.insert(key.into(), value);
		self
	}
}

/// A named logger with a mutable handler list.
///
/// The handler list is the piece of state that outlives a tool invocation
/// when the logger itself is cached by a [`LoggingManager`] for the whole
/// host session; [`crate::session::init_session`] resets it on every run.
///
/// [`LoggingManager`]: crate::config::LoggingManager
pub struct Logger {
	name: String,
	handlers: Arc<Mutex<Vec<Arc<dyn LogHandler>>>>,
	level: Arc<Mutex<LogLevel>>,
}

impl Logger {
	pub fn new(name: String) -> Self {
		Self {
			name,
			handlers: Arc::new(Mutex::new(Vec::new())),
			level: Arc::new(Mutex::new(LogLevel::Debug)),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub async fn add_handler(&self, handler: Box<dyn LogHandler>) {
		self.handlers
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.push(Arc::from(handler));
	}

	/// Drop every attached handler.
	pub async fn clear_handlers(&self) {
		self.handlers
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.clear();
	}

	pub fn handler_count(&self) -> usize {
		self.handlers.lock().unwrap_or_else(|e| e.into_inner()).len()
	}

	pub async fn set_level(&self, level: LogLevel) {
		*self.level.lock().unwrap_or_else(|e| e.into_inner()) = level;
	}

	pub fn level(&self) -> LogLevel {
		*self.level.lock().unwrap_or_else(|e| e.into_inner())
	}

	/// Dispatch a pre-built record to every handler, bypassing the logger's
	/// own level gate.
	pub async fn log_record(&self, record: &LogRecord) {
		// Clone the list out so the guard is not held across an await;
		// keeps the dispatch future Send for multi-threaded runtimes.
		let handlers = self.snapshot_handlers();
		for handler in handlers {
			handler.handle(record).await;
		}
	}

	fn snapshot_handlers(&self) -> Vec<Arc<dyn LogHandler>> {
		self.handlers
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.clone()
	}

	async fn log(&self, level: LogLevel, message: String) {
		if level < self.level() {
			return;
		}

		let record = LogRecord::new(level, self.name.clone(), message);
		self.log_record(&record).await;
	}

	pub async fn debug(&self, message: String) {
		self.log(LogLevel::Debug, message).await;
	}

	pub async fn info(&self, message: String) {
		self.log(LogLevel::Info, message).await;
	}

	pub async fn warning(&self, message: String) {
		self.log(LogLevel::Warning, message).await;
	}

	pub async fn error(&self, message: String) {
		self.log(LogLevel::Error, message).await;
	}

	/// Flush every attached handler.
	pub async fn flush(&self) {
		let handlers = self.snapshot_handlers();
		for handler in handlers {
			handler.flush().await;
		}
	}
}
