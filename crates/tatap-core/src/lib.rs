/// Tatap Core — filename ordering and change-event decoding.
///
/// This crate holds the two pieces of the Tatap file manager that carry
/// real logic. It has no CLI or UI dependencies so any frontend can reuse it.
///
/// # Modules
///
/// - [`sort`] — Natural-order filename comparator and stem/extension split.
/// - [`monitor`] — Decoder that frames raw inotify buffers into owned records.
/// - [`error`] — Error type shared by the decoder.
pub mod error;
pub mod monitor;
pub mod sort;

pub use error::{NotifyError, NotifyResult};
pub use monitor::{decode_and_enqueue, DecoderConfig, EventReader, EventRecord, EventSink};
pub use sort::{compare_filenames, sort_filenames, FilenameKey};
