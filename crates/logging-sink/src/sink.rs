use crate::error::SinkError;

/// Destination for messages that already passed the logger's severity gate.
///
/// The contract has exactly one method per severity. The logger maps each
/// severity onto exactly one of them (fatal messages go to
/// [`critical`](Self::critical)), so an implementation can rely on the method
/// it receives a message through to know its severity.
///
/// Messages arrive exactly as the caller wrote them. Implementations that want
/// a visible severity label prepend it themselves.
///
/// # Examples
///
/// ```
/// use std::sync::Mutex;
/// use logging_sink::{Sink, SinkError};
///
/// #[derive(Default)]
/// struct Collect(Mutex<Vec<String>>);
///
/// impl Collect {
///     fn push(&self, tag: &str, msg: &str) -> Result<(), SinkError> {
///         self.0.lock().unwrap().push(format!("{tag}|{msg}"));
///         Ok(())
///     }
/// }
///
/// impl Sink for Collect {
///     fn debug(&self, msg: &str) -> Result<(), SinkError> { self.push("d", msg) }
///     fn info(&self, msg: &str) -> Result<(), SinkError> { self.push("i", msg) }
///     fn warning(&self, msg: &str) -> Result<(), SinkError> { self.push("w", msg) }
///     fn error(&self, msg: &str) -> Result<(), SinkError> { self.push("e", msg) }
///     fn critical(&self, msg: &str) -> Result<(), SinkError> { self.push("c", msg) }
/// }
///
/// let sink = Collect::default();
/// sink.warning("low disk").unwrap();
/// assert_eq!(sink.0.lock().unwrap()[0], "w|low disk");
/// ```
pub trait Sink: Send + Sync {
    /// Accepts a debug-severity message.
    fn debug(&self, msg: &str) -> Result<(), SinkError>;

    /// Accepts an info-severity message.
    fn info(&self, msg: &str) -> Result<(), SinkError>;

    /// Accepts a warning-severity message.
    fn warning(&self, msg: &str) -> Result<(), SinkError>;

    /// Accepts an error-severity message.
    fn error(&self, msg: &str) -> Result<(), SinkError>;

    /// Accepts a fatal message. The process is about to terminate.
    fn critical(&self, msg: &str) -> Result<(), SinkError>;
}
