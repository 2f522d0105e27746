//! Record-to-text rendering.

use std::env;

use crate::logger::LogRecord;

pub trait LogFormatter: Send + Sync {
	fn format(&self, record: &LogRecord) -> String;
}

/// The classic tool-log line: timestamp, user name, machine name, message.
///
/// User and machine name are captured from the environment once, at
/// construction; either is dropped from the line when the environment does
/// not provide it.
pub struct StandardFormatter {
	date_format: String,
	user: Option<String>,
	machine: Option<String>,
}

impl StandardFormatter {
	pub const DEFAULT_DATE_FORMAT: &'static str = "%d-%m-%Y %H:%M";

	pub fn new(date_format: &str) -> Self {
		Self {
			date_format: date_format.to_string(),
			user: env::var("USERNAME").or_else(|_| env::var("USER")).ok(),
			machine: env::var("COMPUTERNAME")
				.or_else(|_| env::var("HOSTNAME"))
				.ok()
				.map(|m| m.to_uppercase()),
		}
	}

	/// A formatter without the user/machine prefix.
	pub fn bare(date_format: &str) -> Self {
		Self {
			date_format: date_format.to_string(),
			user: None,
			machine: None,
		}
	}
}

impl Default for StandardFormatter {
	fn default() -> Self {
		Self::new(Self::DEFAULT_DATE_FORMAT)
	}
}

impl LogFormatter for StandardFormatter {
	fn format(&self, record: &LogRecord) -> String {
		let mut parts = Vec::with_capacity(4);
		parts.push(record.timestamp.format(&self.date_format).to_string());
		if let Some(user) = &self.user {
			parts.push(user.clone());
		}
		if let Some(machine) = &self.machine {
			parts.push(machine.clone());
		}
		parts.push(record.message.clone());
		parts.join(" ")
	}
}

/// Renders the whole record as one JSON object per line, suitable for file
/// logs that get post-processed.
#[derive(Default)]
pub struct JsonFormatter;

impl LogFormatter for JsonFormatter {
	fn format(&self, record: &LogRecord) -> String {
		// LogRecord contains nothing that can fail to serialize.
		serde_json::to_string(record).unwrap_or_else(|_| record.message.clone())
	}
}

/// Escape control characters and non-ASCII bytes as `\xNN`.
///
/// Applied to text headed for the host's output panel, where a raw control
/// sequence would mangle the display.
pub fn escape_control_chars(s: &str) -> String {
	let mut result = String::with_capacity(s.len());

	for ch in s.chars() {
		if ch.is_control() || !ch.is_ascii() {
			for byte in ch.to_string().as_bytes() {
				result.push_str(&format!("\\x{:02x}", byte));
			}
		} else {
			result.push(ch);
		}
	}

	result
}
