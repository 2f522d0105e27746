use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggingError {
	#[error("failed to open log file {path}: {source}")]
	File {
		path: PathBuf,
		source: std::io::Error,
	},
}
