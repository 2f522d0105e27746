//! Repeated-initialization behavior inside one long-lived host process.

use std::sync::{Arc, Mutex};

use geotool_logging::{
	HostSeverity, LogLevel, LoggingError, LoggingManager, MessageSink, SessionConfig,
	close_session, init_session, session_active,
};

struct RecordingSink {
	posts: Mutex<Vec<(HostSeverity, String)>>,
}

impl RecordingSink {
	fn new() -> Arc<Self> {
		Arc::new(Self {
			posts: Mutex::new(Vec::new()),
		})
	}

	fn posts(&self) -> Vec<(HostSeverity, String)> {
		self.posts.lock().unwrap().clone()
	}
}

impl MessageSink for RecordingSink {
	fn post(&self, severity: HostSeverity, text: &str) {
		self.posts.lock().unwrap().push((severity, text.to_string()));
	}
}

#[tokio::test]
async fn test_repeated_init_does_not_accumulate_handlers() {
	let manager = LoggingManager::new();
	let logger = manager.get_logger("buffer_tool");

	let sink = RecordingSink::new();
	let config = SessionConfig::default().with_host_sink(sink.clone());

	// Simulate five tool runs inside one host session.
	for _ in 0..5 {
		init_session(&logger, &config).await.unwrap();
	}

	assert_eq!(logger.handler_count(), 1);
}

#[tokio::test]
async fn test_init_twice_keeps_configured_handler_set() {
	let dir = tempfile::tempdir().unwrap();
	let log_path = dir.path().join("tool.log");

	let manager = LoggingManager::new();
	let logger = manager.get_logger("clip_tool");

	let sink = RecordingSink::new();
	let config = SessionConfig::default()
		.with_file(&log_path, true)
		.with_host_sink(sink.clone());

	init_session(&logger, &config).await.unwrap();
	init_session(&logger, &config).await.unwrap();

	// One file handler plus one host handler, not four.
	assert_eq!(logger.handler_count(), 2);
}

#[tokio::test]
async fn test_reinit_after_clear_is_idempotent() {
	let manager = LoggingManager::new();
	let logger = manager.get_logger("merge_tool");

	let sink = RecordingSink::new();
	let config = SessionConfig::default().with_host_sink(sink.clone());

	init_session(&logger, &config).await.unwrap();
	assert!(session_active(&logger));

	logger.clear_handlers().await;
	assert!(!session_active(&logger));

	init_session(&logger, &config).await.unwrap();
	assert_eq!(logger.handler_count(), 1);
	assert!(session_active(&logger));
}

#[tokio::test]
async fn test_init_applies_configured_level() {
	let manager = LoggingManager::new();
	let logger = manager.get_logger("dissolve_tool");

	let sink = RecordingSink::new();
	let config = SessionConfig::default()
		.with_level(LogLevel::Warning)
		.with_host_sink(sink.clone());

	init_session(&logger, &config).await.unwrap();

	logger.info("below threshold".to_string()).await;
	logger.warning("at threshold".to_string()).await;

	let posts = sink.posts();
	assert_eq!(posts.len(), 1);
	assert_eq!(posts[0].0, HostSeverity::Warning);
}

#[tokio::test]
async fn test_init_without_sinks_leaves_logger_clean() {
	let manager = LoggingManager::new();
	let logger = manager.get_logger("bare_tool");

	init_session(&logger, &SessionConfig::default()).await.unwrap();

	assert_eq!(logger.handler_count(), 0);
	assert!(!session_active(&logger));
}

#[tokio::test]
async fn test_close_session_flushes_file_output() {
	let dir = tempfile::tempdir().unwrap();
	let log_path = dir.path().join("tool.log");

	let manager = LoggingManager::new();
	let logger = manager.get_logger("depth_tool");

	let config = SessionConfig::default().with_file(&log_path, true);
	init_session(&logger, &config).await.unwrap();

	logger.info("water depth computed".to_string()).await;
	close_session(&logger).await;

	let contents = std::fs::read_to_string(&log_path).unwrap();
	assert!(contents.contains("water depth computed"));
}

#[tokio::test]
async fn test_truncate_mode_discards_previous_run_output() {
	let dir = tempfile::tempdir().unwrap();
	let log_path = dir.path().join("tool.log");

	let manager = LoggingManager::new();
	let logger = manager.get_logger("union_tool");

	let config = SessionConfig::default().with_file(&log_path, false);

	init_session(&logger, &config).await.unwrap();
	logger.info("first run".to_string()).await;
	close_session(&logger).await;

	init_session(&logger, &config).await.unwrap();
	logger.info("second run".to_string()).await;
	close_session(&logger).await;

	let contents = std::fs::read_to_string(&log_path).unwrap();
	assert!(contents.contains("second run"));
	assert!(!contents.contains("first run"));
}

#[tokio::test]
async fn test_append_mode_keeps_previous_run_output() {
	let dir = tempfile::tempdir().unwrap();
	let log_path = dir.path().join("tool.log");

	let manager = LoggingManager::new();
	let logger = manager.get_logger("intersect_tool");

	let config = SessionConfig::default().with_file(&log_path, true);

	init_session(&logger, &config).await.unwrap();
	logger.info("first run".to_string()).await;
	close_session(&logger).await;

	init_session(&logger, &config).await.unwrap();
	logger.info("second run".to_string()).await;
	close_session(&logger).await;

	let contents = std::fs::read_to_string(&log_path).unwrap();
	assert!(contents.contains("first run"));
	assert!(contents.contains("second run"));
}

#[tokio::test]
async fn test_init_with_unopenable_log_file_fails_cleanly() {
	let dir = tempfile::tempdir().unwrap();
	// Parent directory does not exist, so the open must fail.
	let bad_path = dir.path().join("missing").join("tool.log");

	let manager = LoggingManager::new();
	let logger = manager.get_logger("broken_tool");

	let config = SessionConfig::default().with_file(&bad_path, true);
	let err = init_session(&logger, &config).await.unwrap_err();

	match err {
		LoggingError::File { path, .. } => assert!(path.ends_with("tool.log")),
	}

	// The reset already ran; no half-configured handler set remains.
	assert_eq!(logger.handler_count(), 0);
	assert!(!session_active(&logger));
}

#[tokio::test]
async fn test_manager_returns_same_logger_for_same_name() {
	let manager = LoggingManager::new();
	let first = manager.get_logger("shared_tool");
	let second = manager.get_logger("shared_tool");

	assert!(Arc::ptr_eq(&first, &second));

	// This aliasing is why init must reset: a handler attached through one
	// handle is visible through the other.
	let sink = RecordingSink::new();
	let config = SessionConfig::default().with_host_sink(sink);
	init_session(&first, &config).await.unwrap();
	assert_eq!(second.handler_count(), 1);
}
