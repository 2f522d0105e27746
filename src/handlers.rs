//! Stock handlers: in-memory capture, file, and console.
//!
//! The host-window handler lives in [`crate::host`].

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::error::LoggingError;
use crate::formatters::{LogFormatter, StandardFormatter};
use crate::logger::{LogHandler, LogLevel, LogRecord};

/// Collects records into a shared buffer.
///
/// Clones share the same buffer, so a test can keep one clone for
/// assertions while the logger owns the other.
#[derive(Clone)]
pub struct MemoryHandler {
	level: LogLevel,
	records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemoryHandler {
	pub fn new(level: LogLevel) -> Self {
		Self {
			level,
			records: Arc::new(Mutex::new(Vec::new())),
		}
	}

	pub fn get_records(&self) -> Vec<LogRecord> {
		self.records
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.clone()
	}

	pub fn clear(&self) {
		self.records
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.clear();
	}
}

#[async_trait::async_trait]
impl LogHandler for MemoryHandler {
	async fn handle(&self, record: &LogRecord) {
		if record.level >= self.level {
			self.records
				.lock()
				.unwrap_or_else(|e| e.into_inner())
				.push(record.clone());
		}
	}

	fn level(&self) -> LogLevel {
		self.level
	}

	fn set_level(&mut self, level: LogLevel) {
		self.level = level;
	}
}

/// Buffered file sink.
///
/// Output may sit in the buffer until [`LogHandler::flush`] runs; callers
/// that end a tool run should go through [`crate::session::close_session`].
pub struct FileHandler {
	level: LogLevel,
	formatter: Box<dyn LogFormatter>,
	writer: Mutex<BufWriter<File>>,
}

impl FileHandler {
	/// Open `path` for logging, appending when `append` is set and
	/// truncating otherwise.
	pub fn new(path: &Path, append: bool, level: LogLevel) -> Result<Self, LoggingError> {
		let mut options = OpenOptions::new();
		options.create(true);
		if append {
			options.append(true);
		} else {
			options.write(true).truncate(true);
		}
		let file = options.open(path).map_err(|source| LoggingError::File {
			path: path.to_path_buf(),
			source,
		})?;

		Ok(Self {
			level,
			formatter: Box::new(StandardFormatter::default()),
			writer: Mutex::new(BufWriter::new(file)),
		})
	}

	pub fn with_formatter(mut self, formatter: Box<dyn LogFormatter>) -> Self {
		self.formatter = formatter;
		self
	}
}

#[async_trait::async_trait]
impl LogHandler for FileHandler {
	async fn handle(&self, record: &LogRecord) {
		if record.level < self.level {
			return;
		}
		let line = self.formatter.format(record);
		let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
		// Diagnostic output is fire-and-forget; write failures are dropped.
		let _ = writeln!(writer, "{}", line);
	}

	fn level(&self) -> LogLevel {
		self.level
	}

	fn set_level(&mut self, level: LogLevel) {
		self.level = level;
	}

	async fn flush(&self) {
		let _ = self
			.writer
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.flush();
	}
}

/// Stderr sink, for tools run outside the host.
pub struct ConsoleHandler {
	level: LogLevel,
	formatter: Box<dyn LogFormatter>,
}

impl ConsoleHandler {
	pub fn new(level: LogLevel) -> Self {
		Self {
			level,
			formatter: Box::new(StandardFormatter::default()),
		}
	}

	pub fn with_formatter(mut self, formatter: Box<dyn LogFormatter>) -> Self {
		self.formatter = formatter;
		self
	}
}

#[async_trait::async_trait]
impl LogHandler for ConsoleHandler {
	async fn handle(&self, record: &LogRecord) {
		if record.level >= self.level {
			eprintln!("{}", self.formatter.format(record));
		}
	}

	fn level(&self) -> LogLevel {
		self.level
	}

	fn set_level(&mut self, level: LogLevel) {
		self.level = level;
	}
}
