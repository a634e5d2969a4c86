//! Console Event Sink
//!
//! Renders publish events as human-readable lines. Progress goes to stdout;
//! the already-published report goes to stderr.

use crate::ui::context::UiContext;
use crate::ui::views::{clean, publish};
use asset_publisher::domain::ports::{PublishEvent, PublishEventSink};

pub struct ConsoleEventSink {
    ui: UiContext,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    /// Lines for an event, and whether they belong on stderr
    pub(crate) fn render(&self, event: &PublishEvent) -> (String, bool) {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        match event {
            PublishEvent::Resolved { version } => (publish::render_resolved(version, color), false),
            PublishEvent::CleanStarted { url, .. } => (clean::render_clean_start(url), false),
            PublishEvent::CleanCompleted { prefix, removed } => (
                clean::render_clean_completed(prefix, *removed, color, unicode),
                false,
            ),
            PublishEvent::PublishStarted { url } => (publish::render_publish_start(url), false),
            PublishEvent::AlreadyPublished {
                index_url,
                console_url,
            } => (
                publish::render_conflict(index_url, console_url, color)
                    .trim_end()
                    .to_string(),
                true,
            ),
            PublishEvent::StepStarted { step } => {
                (publish::render_step(*step, color, unicode), false)
            }
            PublishEvent::StepSkipped { step } => {
                (publish::render_step_skipped(*step, color, unicode), false)
            }
            PublishEvent::Published { index_url } => {
                (publish::render_published(index_url, color, unicode), false)
            }
        }
    }
}

impl PublishEventSink for ConsoleEventSink {
    fn on_event(&self, event: PublishEvent) {
        let (text, to_stderr) = self.render(&event);
        if to_stderr {
            eprintln!("{}", text);
        } else {
            println!("{}", text);
        }
    }
}
