use catalog_query::prelude::*;
use std::fmt;
use std::sync::{Arc, Mutex};

/// One call made on the reporter
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    Message(String),
    Progress {
        current: usize,
        total: usize,
        message: Option<String>,
    },
    Error(String),
    Completed(String),
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::Message(m) => write!(f, "{}", m),
            ProgressEvent::Progress {
                current,
                total,
                message: Some(m),
            } => write!(f, "Progress: {}/{} - {}", current, total, m),
            ProgressEvent::Progress { current, total, .. } => {
                write!(f, "Progress: {}/{}", current, total)
            }
            ProgressEvent::Error(m) => write!(f, "Error: {}", m),
            ProgressEvent::Completed(m) => write!(f, "Completed: {}", m),
        }
    }
}

/// Mock ProgressReporter recording every call, progress ticks included
///
/// Clones share the same event log, so a test can keep a handle after
/// moving the reporter into a use case.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Events rendered as text, one line per call
    pub fn get_messages(&self) -> Vec<String> {
        self.events().iter().map(ToString::to_string).collect()
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.get_messages().iter().any(|m| m.contains(fragment))
    }

    /// Stage numbers passed to `report_progress`, in call order
    pub fn stages(&self) -> Vec<usize> {
        self.events()
            .iter()
            .filter_map(|event| match event {
                ProgressEvent::Progress { current, .. } => Some(*current),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.record(ProgressEvent::Message(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.record(ProgressEvent::Progress {
            current,
            total,
            message: message.map(str::to_string),
        });
    }

    fn report_error(&self, message: &str) {
        self.record(ProgressEvent::Error(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.record(ProgressEvent::Completed(message.to_string()));
    }
}
