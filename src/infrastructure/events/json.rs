//! JSON Event Sink
//!
//! Outputs publish events as NDJSON for CI/automation consumption.

use crate::domain::ports::{PublishEvent, PublishEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    command: &'static str,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Write a final error event (outside the use-case event stream)
    pub fn error(&self, message: &str, exit_code: i32) {
        self.write_event(serde_json::json!({
            "event": "error",
            "command": self.command,
            "message": message,
            "exit_code": exit_code,
        }));
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl PublishEventSink for JsonEventSink {
    fn on_event(&self, event: PublishEvent) {
        let command = self.command;
        let json = match event {
            PublishEvent::Resolved { version } => serde_json::json!({
                "event": "resolved",
                "command": command,
                "version": version,
            }),

            PublishEvent::CleanStarted { url, prefix } => serde_json::json!({
                "event": "start",
                "command": command,
                "url": url,
                "prefix": prefix,
            }),

            PublishEvent::CleanCompleted { prefix, removed } => serde_json::json!({
                "event": "complete",
                "command": command,
                "prefix": prefix,
                "removed": removed,
            }),

            PublishEvent::PublishStarted { url } => serde_json::json!({
                "event": "start",
                "command": command,
                "url": url,
            }),

            PublishEvent::AlreadyPublished {
                index_url,
                console_url,
            } => serde_json::json!({
                "event": "conflict",
                "command": command,
                "index_url": index_url,
                "console_url": console_url,
            }),

            PublishEvent::StepStarted { step } => serde_json::json!({
                "event": "step_start",
                "command": command,
                "step": step.as_str(),
            }),

            PublishEvent::StepSkipped { step } => serde_json::json!({
                "event": "step_skipped",
                "command": command,
                "step": step.as_str(),
                "reason": "dry_run",
            }),

            PublishEvent::Published { index_url } => serde_json::json!({
                "event": "complete",
                "command": command,
                "index_url": index_url,
            }),
        };

        self.write_event(json);
    }
}
