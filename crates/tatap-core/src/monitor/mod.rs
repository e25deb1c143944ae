/// Change-event decoder — frames raw inotify buffers into owned records.
///
/// The kernel hands back a packed run of variable-length records per read.
/// This module splits that run into heap-owned [`EventRecord`]s and pushes
/// them, in order, into a caller-supplied [`EventSink`]. Registering
/// watches and scheduling reads belong to the host application.
///
/// # Usage
///
/// ```ignore
/// let mut reader = EventReader::new(DecoderConfig::default())?;
/// let mut queue = VecDeque::new();
/// // `inotify` is any `Read` over the inotify descriptor, woken by poll.
/// reader.read_and_enqueue(&mut inotify, &mut queue)?;
/// ```
///
/// # Errors
///
/// A record whose declared size runs past the bytes the read returned is a
/// [`NotifyError::Framing`](crate::NotifyError::Framing). Records before it
/// remain in the sink.
pub mod config;
pub mod decoder;
pub mod record;
pub mod sink;

pub use config::{DecoderConfig, DEFAULT_READ_CAPACITY, MIN_READ_CAPACITY};
pub use decoder::{decode_and_enqueue, EventReader};
pub use record::{mask, EventRecord, HEADER_LEN, NAME_MAX};
pub use sink::EventSink;
