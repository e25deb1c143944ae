/// Framing of raw inotify buffers into owned records.
use super::config::DecoderConfig;
use super::record::{declared_record_size, EventRecord, HEADER_LEN};
use super::sink::EventSink;
use crate::error::{NotifyError, NotifyResult};
use std::io::Read;
use tracing::{debug, warn};

/// Split `buffer` into records and hand each one to `sink`, in order.
///
/// Every byte of `buffer` is treated as valid. Returns the number of records
/// enqueued.
///
/// Records are copied out of `buffer` before any of them reaches the sink:
/// - on [`NotifyError::AllocationFailure`] the sink is left untouched;
/// - on [`NotifyError::Framing`] the records before the bad offset are
///   handed over first and stay there.
pub fn decode_and_enqueue<S: EventSink + ?Sized>(
    buffer: &[u8],
    sink: &mut S,
) -> NotifyResult<usize> {
    decode_with(buffer, sink, EventRecord::copy_from)
}

/// [`decode_and_enqueue`] with the per-record copy supplied by the caller.
fn decode_with<S, F>(buffer: &[u8], sink: &mut S, mut copy: F) -> NotifyResult<usize>
where
    S: EventSink + ?Sized,
    F: FnMut(&[u8]) -> NotifyResult<EventRecord>,
{
    let mut staged: Vec<EventRecord> = Vec::new();
    let mut offset = 0usize;

    let framing = loop {
        if offset >= buffer.len() {
            break None;
        }

        let remaining = &buffer[offset..];
        // A fragment shorter than a header cannot even declare its size.
        let record_size = declared_record_size(remaining).unwrap_or(HEADER_LEN);

        if record_size > remaining.len() {
            warn!(
                "Decoder: record at offset {} needs {} bytes, only {} valid",
                offset,
                record_size,
                remaining.len()
            );
            break Some(NotifyError::Framing {
                offset,
                record_size,
                available: remaining.len(),
            });
        }

        staged
            .try_reserve(1)
            .map_err(|_| NotifyError::AllocationFailure {
                requested: std::mem::size_of::<EventRecord>(),
            })?;
        staged.push(copy(&remaining[..record_size])?);

        offset += record_size;
    };

    let count = staged.len();
    for record in staged {
        sink.accept(record)?;
    }

    match framing {
        Some(err) => Err(err),
        None => {
            debug!("Decoder: {} records from {} bytes", count, buffer.len());
            Ok(count)
        }
    }
}

/// Reads a notification source into a fixed-capacity scratch buffer and
/// decodes what each read returns.
///
/// The reader owns its buffer, so a single instance can be driven by the
/// host's poll loop without reallocating per call.
pub struct EventReader {
    buffer: Vec<u8>,
    config: DecoderConfig,
}

impl EventReader {
    /// Allocate the scratch buffer described by `config`.
    pub fn new(config: DecoderConfig) -> NotifyResult<Self> {
        let capacity = config.effective_capacity();
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|_| NotifyError::AllocationFailure {
                requested: capacity,
            })?;
        buffer.resize(capacity, 0);
        Ok(Self { buffer, config })
    }

    /// The configuration this reader was built with.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Number of bytes requested per read.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Perform exactly one `read` from `source` and enqueue the records it
    /// delivered.
    ///
    /// Only the bytes the read reported are decoded. A zero-byte read
    /// enqueues nothing. `ErrorKind::Interrupted` and `WouldBlock` surface
    /// as [`NotifyError::Io`]; retrying is the caller's decision.
    pub fn read_and_enqueue<R, S>(&mut self, source: &mut R, sink: &mut S) -> NotifyResult<usize>
    where
        R: Read + ?Sized,
        S: EventSink + ?Sized,
    {
        let filled = source.read(&mut self.buffer)?;
        decode_and_enqueue(&self.buffer[..filled], sink)
    }
}
