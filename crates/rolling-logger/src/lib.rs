//! Rolling Logger
//!
//! `tracing_subscriber` layer that keeps the most recent lines in a circular
//! buffer and echoes each line to the browser console (wasm) or stderr
//! (native).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

static BUFFER: OnceLock<Arc<LogRingBuffer>> = OnceLock::new();

/// Logger errors
#[derive(Debug)]
pub enum LoggerError {
    AlreadyInitialized,
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::AlreadyInitialized => write!(f, "Logger already initialized"),
        }
    }
}

impl std::error::Error for LoggerError {}

/// Fixed-size buffer of formatted lines, oldest first
pub struct LogRingBuffer {
    capacity: usize,
    lines: RwLock<VecDeque<String>>,
}

impl LogRingBuffer {
    /// A capacity of zero still keeps the latest line
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            lines: RwLock::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.write() {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .read()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.read().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collects the `message` field and any extra `key=value` fields of an event
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }
}

/// Layer writing every event it sees into a [`LogRingBuffer`]
pub struct RollingLayer {
    app_name: String,
    buffer: Arc<LogRingBuffer>,
}

impl RollingLayer {
    pub fn new(app_name: &str, buffer: Arc<LogRingBuffer>) -> Self {
        Self {
            app_name: app_name.to_string(),
            buffer,
        }
    }

    fn format_line(&self, level: &Level, target: &str, visitor: &MessageVisitor) -> String {
        let mut line = format!(
            "[{}] {:<5} {} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            level,
            self.app_name,
            target,
            visitor.message
        );
        for field in &visitor.fields {
            line.push(' ');
            line.push_str(field);
        }
        line
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let line = self.format_line(meta.level(), meta.target(), &visitor);
        emit(meta.level(), &line);
        self.buffer.push(line);
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: &Level, line: &str) {
    match *level {
        Level::ERROR => web_sys::console::error_1(&line.into()),
        Level::WARN => web_sys::console::warn_1(&line.into()),
        _ => web_sys::console::log_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: &Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global subscriber: a level filter in front of a [`RollingLayer`]
pub fn init_logger(app_name: &str, level: LevelFilter, capacity: usize) -> Result<(), LoggerError> {
    if BUFFER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    let buffer = Arc::new(LogRingBuffer::new(capacity));
    tracing_subscriber::registry()
        .with(level)
        .with(RollingLayer::new(app_name, buffer.clone()))
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    let _ = BUFFER.set(buffer);
    Ok(())
}

/// Recent lines from the global logger, oldest first. Empty before
/// [`init_logger`] ran.
pub fn recent_lines() -> Vec<String> {
    BUFFER.get().map(|buffer| buffer.lines()).unwrap_or_default()
}
