//! Session configuration and the by-name logger registry.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::formatters::StandardFormatter;
use crate::host::{MessageSink, SeverityMap};
use crate::logger::{LogLevel, Logger};

#[derive(Debug, Clone)]
pub struct FileConfig {
	pub path: PathBuf,
	pub append: bool,
}

/// Everything [`crate::session::init_session`] needs to configure one tool
/// run's logging.
///
/// The config is owned by the invocation context and rebuilt (or reused
/// unchanged) per run; there is deliberately no process-global default.
#[derive(Clone)]
pub struct SessionConfig {
	pub level: LogLevel,
	pub date_format: String,
	pub file: Option<FileConfig>,
	pub host_sink: Option<Arc<dyn MessageSink>>,
	pub severity_map: SeverityMap,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			level: LogLevel::Info,
			date_format: StandardFormatter::DEFAULT_DATE_FORMAT.to_string(),
			file: None,
			host_sink: None,
			severity_map: SeverityMap::default(),
		}
	}
}

impl SessionConfig {
	pub fn with_level(mut self, level: LogLevel) -> Self {
		self.level = level;
		self
	}

	pub fn with_date_format(mut self, date_format: &str) -> Self {
		self.date_format = date_format.to_string();
		self
	}

	/// Log to `path`, appending when `append` is set.
	pub fn with_file(mut self, path: impl Into<PathBuf>, append: bool) -> Self {
		self.file = Some(FileConfig {
			path: path.into(),
			append,
		});
		self
	}

	pub fn with_host_sink(mut self, sink: Arc<dyn MessageSink>) -> Self {
		self.host_sink = Some(sink);
		self
	}

	pub fn with_severity_map(mut self, severity_map: SeverityMap) -> Self {
		self.severity_map = severity_map;
		self
	}
}

/// By-name logger registry, owned by the embedding host session.
///
/// `get_logger` hands out the same instance for the same name for the life
/// of the manager, which is exactly how handler state survives between tool
/// runs in a long-lived host.
pub struct LoggingManager {
	loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl LoggingManager {
	pub fn new() -> Self {
		Self {
			loggers: Mutex::new(HashMap::new()),
		}
	}

	pub fn get_logger(&self, name: &str) -> Arc<Logger> {
		let mut loggers = self.loggers.lock().unwrap_or_else(|e| e.into_inner());
		Arc::clone(
			loggers
				.entry(name.to_string())
				.or_insert_with(|| Arc::new(Logger::new(name.to_string()))),
		)
	}
}

impl Default for LoggingManager {
	fn default() -> Self {
		Self::new()
	}
}
