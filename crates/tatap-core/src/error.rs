/// Errors surfaced by the event decoder.
///
/// The comparator is infallible; every failure here belongs to a single
/// decode call and is reported to the immediate caller without retry.
use thiserror::Error;

/// Failure of one decode or read-and-decode call.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Copying a record (or growing the read buffer) could not allocate.
    #[error("failed to allocate {requested} bytes for an event record")]
    AllocationFailure { requested: usize },

    /// A record's declared size runs past the valid region of the buffer.
    ///
    /// Records before `offset` were already handed to the sink.
    #[error(
        "truncated event record at offset {offset}: needs {record_size} bytes, {available} available"
    )]
    Framing {
        offset: usize,
        record_size: usize,
        available: usize,
    },

    /// A name handed to [`EventRecord::encode`](crate::EventRecord::encode)
    /// is longer than `NAME_MAX`.
    #[error("event name is {len} bytes, longer than NAME_MAX")]
    NameTooLong { len: usize },

    /// The single read from the notification source failed.
    #[error("failed to read from notification source: {0}")]
    Io(#[from] std::io::Error),

    /// The sink no longer accepts records (e.g. channel receiver dropped).
    #[error("event sink is closed")]
    SinkClosed,
}

/// Result alias used throughout the decoder.
pub type NotifyResult<T> = Result<T, NotifyError>;
