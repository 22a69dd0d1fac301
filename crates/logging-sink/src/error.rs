use std::io;

use thiserror::Error;

/// Error reported by a [`Sink`](crate::Sink) that failed to accept a message.
///
/// The logger never retries; the error is handed back to whoever issued the
/// write so the caller decides what a lost diagnostic means.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The underlying writer or transport failed.
    #[error("sink write failed: {0}")]
    Io(#[from] io::Error),
    /// The message cannot be represented by the transport (for example an
    /// interior NUL byte on a C string based API).
    #[error("message cannot be delivered: {reason}")]
    InvalidMessage {
        /// Why the message was rejected.
        reason: &'static str,
    },
    /// The destination refused the message for a sink-specific reason.
    #[error("sink rejected message: {0}")]
    Rejected(String),
}

impl SinkError {
    /// Convenience constructor for [`SinkError::Rejected`].
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_and_keep_their_message() {
        let err: SinkError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, SinkError::Io(_)));
        assert_eq!(err.to_string(), "sink write failed: pipe closed");
    }

    #[test]
    fn rejected_formats_reason() {
        let err = SinkError::rejected("collector unreachable");
        assert_eq!(
            err.to_string(),
            "sink rejected message: collector unreachable"
        );
    }

    #[test]
    fn invalid_message_formats_reason() {
        let err = SinkError::InvalidMessage {
            reason: "interior NUL byte",
        };
        assert_eq!(
            err.to_string(),
            "message cannot be delivered: interior NUL byte"
        );
    }
}
