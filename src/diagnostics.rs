//! Injectable sink for resolver trace events.
//!
//! The resolver reports which recipe matched, why a derived record size was
//! rejected and which values it guessed through `tracing`. [`DiagnosticsLayer`]
//! hands those events to a caller-supplied callback, or keeps them in a
//! bounded buffer, without requiring any particular subscriber setup.
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::{Event, Subscriber, field::Visit};
use tracing_subscriber::layer::{Context, Layer};

const BUFFER_CAPACITY: usize = 1000;

#[derive(Clone, Debug)]
pub struct TraceEntry {
    pub level: tracing::Level,
    pub timestamp: String,
    pub message: String,
    pub target: String,
}

impl TraceEntry {
    pub fn new(level: tracing::Level, message: String, target: String) -> Self {
        let timestamp = chrono::Utc::now().format("%H:%M:%S%.3f").to_string();
        Self {
            level,
            timestamp,
            message,
            target,
        }
    }
}

type Callback = Arc<dyn Fn(&TraceEntry) + Send + Sync>;

/// `tracing` layer forwarding events under the crate's target to a callback.
#[derive(Clone)]
pub struct DiagnosticsLayer {
    callback: Callback,
    all_targets: bool,
}

impl DiagnosticsLayer {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&TraceEntry) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
            all_targets: false,
        }
    }

    /// A layer collecting entries into a shared buffer that keeps the most
    /// recent events.
    pub fn buffered() -> (Self, Arc<Mutex<VecDeque<TraceEntry>>>) {
        let buffer = Arc::new(Mutex::new(VecDeque::with_capacity(BUFFER_CAPACITY)));
        let sink = Arc::clone(&buffer);
        let layer = Self::new(move |entry| {
            if let Ok(mut buf) = sink.lock() {
                if buf.len() == BUFFER_CAPACITY {
                    buf.pop_front();
                }
                buf.push_back(entry.clone());
            }
        });
        (layer, buffer)
    }

    /// Also forward events from other crates.
    pub fn with_all_targets(mut self) -> Self {
        self.all_targets = true;
        self
    }
}

impl fmt::Debug for DiagnosticsLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticsLayer")
            .field("all_targets", &self.all_targets)
            .finish_non_exhaustive()
    }
}

struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

impl<S> Layer<S> for DiagnosticsLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        if !self.all_targets && !target.starts_with(env!("CARGO_CRATE_NAME")) {
            return;
        }

        let mut visitor = MessageVisitor {
            message: String::new(),
        };
        event.record(&mut visitor);

        let message = if visitor.message.is_empty() {
            target.to_string()
        } else {
            visitor.message
        };

        (self.callback)(&TraceEntry::new(
            *metadata.level(),
            message,
            target.to_string(),
        ));
    }
}
