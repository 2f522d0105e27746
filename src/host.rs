//! Forwarding records to the host application's tool-output window.

use std::sync::Arc;

use crate::formatters::{LogFormatter, StandardFormatter, escape_control_chars};
use crate::logger::{LogHandler, LogLevel, LogRecord};

/// The message categories the host's output panel distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSeverity {
	Message,
	Warning,
	Error,
}

/// The host application's message-reporting capability.
///
/// The real host provides this; tests (and runs outside the host) inject
/// their own. Presentation of posted text is entirely the sink's business.
pub trait MessageSink: Send + Sync {
	fn post(&self, severity: HostSeverity, text: &str);
}

/// Mapping from log levels to host display categories.
///
/// Hosts differ in how they bucket severities, so the mapping is plain
/// configuration. The default buckets errors and warnings into their host
/// counterparts and everything below into plain messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityMap {
	pub debug: HostSeverity,
	pub info: HostSeverity,
	pub warning: HostSeverity,
	pub error: HostSeverity,
}

impl Default for SeverityMap {
	fn default() -> Self {
		Self {
			debug: HostSeverity::Message,
			info: HostSeverity::Message,
			warning: HostSeverity::Warning,
			error: HostSeverity::Error,
		}
	}
}

impl SeverityMap {
	pub fn for_level(&self, level: LogLevel) -> HostSeverity {
		match level {
			LogLevel::Debug => self.debug,
			LogLevel::Info => self.info,
			LogLevel::Warning => self.warning,
			LogLevel::Error => self.error,
		}
	}
}

/// Handler that posts formatted records to the host's output window.
///
/// Emission never fails: with no sink attached (running outside the host)
/// every record is silently discarded.
pub struct HostOutputHandler {
	sink: Option<Arc<dyn MessageSink>>,
	level: LogLevel,
	severity_map: SeverityMap,
	formatter: Box<dyn LogFormatter>,
}

impl HostOutputHandler {
	pub fn new(sink: Arc<dyn MessageSink>, level: LogLevel) -> Self {
		Self {
			sink: Some(sink),
			level,
			severity_map: SeverityMap::default(),
			formatter: Box::new(StandardFormatter::default()),
		}
	}

	/// A handler with no host behind it; every emission is a no-op.
	pub fn detached(level: LogLevel) -> Self {
		Self {
			sink: None,
			level,
			severity_map: SeverityMap::default(),
			formatter: Box::new(StandardFormatter::default()),
		}
	}

	pub fn with_severity_map(mut self, severity_map: SeverityMap) -> Self {
		self.severity_map = severity_map;
		self
	}

	pub fn with_formatter(mut self, formatter: Box<dyn LogFormatter>) -> Self {
		self.formatter = formatter;
		self
	}
}

#[async_trait::async_trait]
impl LogHandler for HostOutputHandler {
	async fn handle(&self, record: &LogRecord) {
		if record.level < self.level {
			return;
		}
		let Some(sink) = &self.sink else {
			return;
		};
		// Control sequences would corrupt the host's display.
		let text = escape_control_chars(&self.formatter.format(record));
		sink.post(self.severity_map.for_level(record.level), &text);
	}

	fn level(&self) -> LogLevel {
		self.level
	}

	fn set_level(&mut self, level: LogLevel) {
		self.level = level;
	}
}
