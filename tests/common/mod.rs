/*!
 * Common test utilities for the mdtrans test suite
 */

use anyhow::Result;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};
use tempfile::TempDir;

static CAPTURED: Mutex<Vec<(ThreadId, Level, String)>> = Mutex::new(Vec::new());
static INSTALL_CAPTURE: Once = Once::new();

/// Logger that keeps records in memory, tagged with the emitting thread
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if let Ok(mut captured) = CAPTURED.lock() {
            captured.push((thread::current().id(), record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

/// Installs the in-memory logger for this test binary and clears what the
/// current thread logged so far
pub fn capture_logs() {
    INSTALL_CAPTURE.call_once(|| {
        if log::set_boxed_logger(Box::new(CaptureLogger)).is_ok() {
            log::set_max_level(LevelFilter::Info);
        }
    });
    take_logs(Level::Trace);
}

/// Drains the messages the current thread logged at `level` or more severe
///
/// `#[tokio::test]` runs on the test thread, so records from concurrently
/// running tests are not mixed in.
pub fn take_logs(level: Level) -> Vec<String> {
    let current = thread::current().id();
    let Ok(mut captured) = CAPTURED.lock() else {
        return Vec::new();
    };

    let (mine, others): (Vec<_>, Vec<_>) = captured.drain(..).partition(|(id, _, _)| *id == current);
    *captured = others;
    mine.into_iter()
        .filter(|(_, record_level, _)| *record_level <= level)
        .map(|(_, _, message)| message)
        .collect()
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Writes a direct translator config pointing at the given endpoint
pub fn create_test_config(dir: &Path, api_key: Option<&str>, endpoint: &str) -> Result<PathBuf> {
    let mut config = serde_json::json!({ "endpoint": endpoint, "timeout_secs": 5 });
    if let Some(key) = api_key {
        config["api_key"] = serde_json::Value::String(key.to_string());
    }
    create_test_file(dir, "config.json", &serde_json::to_string_pretty(&config)?)
}

/// A well-formed analysis reply wrapped in a fenced block
pub fn fenced_analysis_reply(translate: &[&str], keep: &[(&str, &str)]) -> String {
    let keep: serde_json::Map<String, serde_json::Value> = keep.iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect();
    let body = serde_json::json!({
        "translate": translate,
        "keep": keep,
        "context": { "type": "technical", "confidence": 0.9 }
    });
    format!("Here is the analysis:\n```json\n{}\n```", serde_json::to_string_pretty(&body).unwrap_or_default())
}

/// Body of a successful messages API response
pub fn anthropic_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "content": [{ "type": "text", "text": text }],
        "usage": { "input_tokens": 12, "output_tokens": 5 }
    })
}

/// Body of a non-streamed chat response
pub fn ollama_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "model": "translation-helper",
        "created_at": "2024-01-01T00:00:00Z",
        "message": { "role": "assistant", "content": content },
        "done": true
    })
}
