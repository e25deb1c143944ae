/// Owned inotify event records.
///
/// The kernel delivers `struct inotify_event` records packed back to back:
/// a 16-byte header (`wd: i32`, `mask: u32`, `cookie: u32`, `len: u32`, all
/// in native byte order) followed by `len` bytes of NUL-padded name.
use crate::error::{NotifyError, NotifyResult};
use std::borrow::Cow;
use std::fmt;

/// Size of the fixed header that precedes every name field.
pub const HEADER_LEN: usize = 16;

/// Longest filename the kernel reports (`NAME_MAX`).
pub const NAME_MAX: usize = 255;

const WD_AT: usize = 0;
const MASK_AT: usize = 4;
const COOKIE_AT: usize = 8;
const LEN_AT: usize = 12;

/// Kernel event mask bits (`<sys/inotify.h>`).
pub mod mask {
    pub const IN_ACCESS: u32 = 0x0000_0001;
    pub const IN_MODIFY: u32 = 0x0000_0002;
    pub const IN_ATTRIB: u32 = 0x0000_0004;
    pub const IN_CLOSE_WRITE: u32 = 0x0000_0008;
    pub const IN_CLOSE_NOWRITE: u32 = 0x0000_0010;
    pub const IN_OPEN: u32 = 0x0000_0020;
    pub const IN_MOVED_FROM: u32 = 0x0000_0040;
    pub const IN_MOVED_TO: u32 = 0x0000_0080;
    pub const IN_CREATE: u32 = 0x0000_0100;
    pub const IN_DELETE: u32 = 0x0000_0200;
    pub const IN_DELETE_SELF: u32 = 0x0000_0400;
    pub const IN_MOVE_SELF: u32 = 0x0000_0800;
    pub const IN_UNMOUNT: u32 = 0x0000_2000;
    pub const IN_Q_OVERFLOW: u32 = 0x0000_4000;
    pub const IN_IGNORED: u32 = 0x0000_8000;
    pub const IN_ISDIR: u32 = 0x4000_0000;

    const NAMES: [(u32, &str); 16] = [
        (IN_ACCESS, "ACCESS"),
        (IN_MODIFY, "MODIFY"),
        (IN_ATTRIB, "ATTRIB"),
        (IN_CLOSE_WRITE, "CLOSE_WRITE"),
        (IN_CLOSE_NOWRITE, "CLOSE_NOWRITE"),
        (IN_OPEN, "OPEN"),
        (IN_MOVED_FROM, "MOVED_FROM"),
        (IN_MOVED_TO, "MOVED_TO"),
        (IN_CREATE, "CREATE"),
        (IN_DELETE, "DELETE"),
        (IN_DELETE_SELF, "DELETE_SELF"),
        (IN_MOVE_SELF, "MOVE_SELF"),
        (IN_UNMOUNT, "UNMOUNT"),
        (IN_Q_OVERFLOW, "Q_OVERFLOW"),
        (IN_IGNORED, "IGNORED"),
        (IN_ISDIR, "ISDIR"),
    ];

    /// Names of the known bits set in `mask`, lowest bit first.
    pub fn names(mask: u32) -> Vec<&'static str> {
        NAMES
            .iter()
            .filter(|(bit, _)| mask & bit != 0)
            .map(|&(_, name)| name)
            .collect()
    }
}

/// Total size of the record starting at `raw`, as declared by its header.
///
/// Returns `None` when fewer than [`HEADER_LEN`] bytes are available.
pub(crate) fn declared_record_size(raw: &[u8]) -> Option<usize> {
    let header = raw.get(..HEADER_LEN)?;
    let name_len = u32::from_ne_bytes(word(header, LEN_AT)) as usize;
    Some(HEADER_LEN.saturating_add(name_len))
}

fn word(bytes: &[u8], at: usize) -> [u8; 4] {
    let mut out = [0u8; 4];
    out.copy_from_slice(&bytes[at..at + 4]);
    out
}

/// A heap copy of one raw event record, byte-identical to the source.
#[derive(Clone, PartialEq, Eq)]
pub struct EventRecord {
    bytes: Box<[u8]>,
}

impl EventRecord {
    /// Copy one framed record out of a read buffer.
    ///
    /// `raw` must hold exactly one record (header plus declared name).
    pub(crate) fn copy_from(raw: &[u8]) -> NotifyResult<Self> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(raw.len())
            .map_err(|_| NotifyError::AllocationFailure {
                requested: raw.len(),
            })?;
        bytes.extend_from_slice(raw);
        Ok(Self {
            bytes: bytes.into_boxed_slice(),
        })
    }

    /// Build a record the way the kernel lays it out: the name is
    /// NUL-terminated and padded to a multiple of [`HEADER_LEN`]. An empty
    /// name produces a header-only record.
    ///
    /// Names longer than [`NAME_MAX`] bytes are rejected with
    /// [`NotifyError::NameTooLong`], so the padded length always fits the
    /// header's `u32` field.
    ///
    /// Used to produce fixture dumps and for replaying captured events.
    pub fn encode(wd: i32, mask: u32, cookie: u32, name: &[u8]) -> NotifyResult<Self> {
        if name.len() > NAME_MAX {
            return Err(NotifyError::NameTooLong { len: name.len() });
        }
        let padded = if name.is_empty() {
            0
        } else {
            (name.len() + 1).div_ceil(HEADER_LEN) * HEADER_LEN
        };

        let mut bytes = Vec::with_capacity(HEADER_LEN + padded);
        bytes.extend_from_slice(&wd.to_ne_bytes());
        bytes.extend_from_slice(&mask.to_ne_bytes());
        bytes.extend_from_slice(&cookie.to_ne_bytes());
        bytes.extend_from_slice(&(padded as u32).to_ne_bytes());
        bytes.extend_from_slice(name);
        bytes.resize(HEADER_LEN + padded, 0);

        Ok(Self {
            bytes: bytes.into_boxed_slice(),
        })
    }

    /// The raw record bytes, header first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Total record size in bytes (header plus name field).
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`: a record holds at least its header.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Watch descriptor the event belongs to.
    pub fn wd(&self) -> i32 {
        i32::from_ne_bytes(word(&self.bytes, WD_AT))
    }

    /// Event mask bits; see the [`mask`](mod@mask) module for the constants.
    pub fn mask(&self) -> u32 {
        u32::from_ne_bytes(word(&self.bytes, MASK_AT))
    }

    /// Cookie pairing `IN_MOVED_FROM` with its `IN_MOVED_TO`; zero otherwise.
    pub fn cookie(&self) -> u32 {
        u32::from_ne_bytes(word(&self.bytes, COOKIE_AT))
    }

    /// Declared length of the name field, padding included.
    pub fn name_len(&self) -> usize {
        self.bytes.len() - HEADER_LEN
    }

    /// `true` if every bit of `bits` is set in the mask.
    pub fn has(&self, bits: u32) -> bool {
        self.mask() & bits == bits
    }

    /// Name bytes up to the first NUL, or `None` for events on the watched
    /// object itself.
    pub fn name(&self) -> Option<&[u8]> {
        let field = &self.bytes[HEADER_LEN..];
        let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
        (end > 0).then(|| &field[..end])
    }

    /// The name decoded as UTF-8, replacing invalid sequences.
    pub fn name_lossy(&self) -> Option<Cow<'_, str>> {
        self.name().map(String::from_utf8_lossy)
    }

    /// The name as an OS string, byte-for-byte.
    #[cfg(unix)]
    pub fn name_os(&self) -> Option<&std::ffi::OsStr> {
        use std::os::unix::ffi::OsStrExt;
        self.name().map(std::ffi::OsStr::from_bytes)
    }
}

impl fmt::Debug for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRecord")
            .field("wd", &self.wd())
            .field("mask", &format_args!("{:#x}", self.mask()))
            .field("cookie", &self.cookie())
            .field("name", &self.name_lossy())
            .finish()
    }
}
