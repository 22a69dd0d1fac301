//! crates/logging/src/tracing_bridge.rs
//! Bridge from the tracing crate into a [`LevelLogger`].
//!
//! [`LevelLoggerLayer`] is a tracing-subscriber layer that turns every tracing
//! event into a write on a [`LevelLogger`], so code instrumented with
//! `tracing::info!` and friends ends up behind the same threshold and sink as
//! direct calls.
//!
//! | tracing level | Severity |
//! |---------------|----------|
//! | TRACE, DEBUG  | Debug    |
//! | INFO          | Info     |
//! | WARN          | Warning  |
//! | ERROR         | Error    |
//!
//! tracing has no fatal level, so the bridge never terminates the process.
//! Events emitted by the logger itself (target `levellog::config`) are not
//! forwarded.
//!
//! ```rust,ignore
//! logging::init_tracing()?;
//! tracing::warn!("queue is {}% full", 90);
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::global::global;
use crate::levels::Severity;
use crate::logger::LevelLogger;

const INTERNAL_TARGET: &str = "levellog::config";

enum Target {
    Global,
    Owned(Arc<LevelLogger>),
}

/// Tracing layer forwarding events to a [`LevelLogger`].
pub struct LevelLoggerLayer {
    target: Target,
}

impl LevelLoggerLayer {
    /// Forwards events to the process-wide logger.
    #[must_use]
    pub const fn global() -> Self {
        Self {
            target: Target::Global,
        }
    }

    /// Forwards events to `logger`.
    #[must_use]
    pub const fn new(logger: Arc<LevelLogger>) -> Self {
        Self {
            target: Target::Owned(logger),
        }
    }

    fn logger(&self) -> &LevelLogger {
        match &self.target {
            Target::Global => global(),
            Target::Owned(logger) => logger,
        }
    }

    const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Info,
            Level::DEBUG | Level::TRACE => Severity::Debug,
        }
    }
}

impl fmt::Debug for LevelLoggerLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = match self.target {
            Target::Global => "global",
            Target::Owned(_) => "owned",
        };
        f.debug_struct("LevelLoggerLayer")
            .field("target", &target)
            .finish()
    }
}

impl<S> Layer<S> for LevelLoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if metadata.target() == INTERNAL_TARGET {
            return;
        }

        let severity = Self::severity_for(metadata.level());
        let logger = self.logger();
        if !severity.passes(logger.threshold()) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            // A layer has no caller to report a sink failure to.
            let _ = logger.write(severity, &message);
        }
    }
}

/// Visitor extracting the `message` field of an event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global tracing subscriber that forwards to the process-wide logger.
pub fn init_tracing() -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LevelLoggerLayer::global())
        .try_init()
}
