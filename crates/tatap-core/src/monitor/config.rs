/// Decoder configuration.
use super::record::{HEADER_LEN, NAME_MAX};
use serde::{Deserialize, Serialize};

/// Bytes requested from the notification source per read.
///
/// A pending batch larger than this is left for the next read; a single
/// record larger than this cannot be read at all (the kernel answers
/// `EINVAL`). That is a property of the source, not something the decoder
/// recovers from.
pub const DEFAULT_READ_CAPACITY: usize = 30_000;

/// Smallest capacity that always fits one event with a full-length name.
pub const MIN_READ_CAPACITY: usize = HEADER_LEN + NAME_MAX + 1;

/// Tunables for [`EventReader`](super::EventReader).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Size of the scratch buffer filled by each read.
    pub read_capacity: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            read_capacity: DEFAULT_READ_CAPACITY,
        }
    }
}

impl DecoderConfig {
    /// Set the read capacity, raised to at least [`MIN_READ_CAPACITY`].
    pub fn with_read_capacity(mut self, capacity: usize) -> Self {
        self.read_capacity = capacity.max(MIN_READ_CAPACITY);
        self
    }

    /// The capacity actually used for reads.
    pub fn effective_capacity(&self) -> usize {
        self.read_capacity.max(MIN_READ_CAPACITY)
    }
}
