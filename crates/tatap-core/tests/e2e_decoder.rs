/// End-to-end decoder tests.
///
/// These drive `EventReader` against real files and channels rather than
/// in-memory slices: a captured dump is written with `tempfile`, read back
/// through `std::fs::File`, and records are handed across a thread via a
/// crossbeam channel, the way the host's watcher thread feeds its UI.
use std::collections::VecDeque;
use std::fs;
use std::io::{self, Read};
use std::time::Duration;
use tatap_core::monitor::{mask, EventRecord, HEADER_LEN};
use tatap_core::{decode_and_enqueue, DecoderConfig, EventReader, NotifyError};
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// A realistic burst: a file saved via rename-over plus a directory creation.
///
/// ```text
/// CREATE        .draft.swp
/// MOVED_FROM    .draft.swp   (cookie 7)
/// MOVED_TO      draft.md     (cookie 7)
/// CREATE|ISDIR  assets
/// ```
fn save_burst() -> Vec<EventRecord> {
    vec![
        EventRecord::encode(1, mask::IN_CREATE, 0, b".draft.swp").unwrap(),
        EventRecord::encode(1, mask::IN_MOVED_FROM, 7, b".draft.swp").unwrap(),
        EventRecord::encode(1, mask::IN_MOVED_TO, 7, b"draft.md").unwrap(),
        EventRecord::encode(1, mask::IN_CREATE | mask::IN_ISDIR, 0, b"assets").unwrap(),
    ]
}

fn to_bytes(records: &[EventRecord]) -> Vec<u8> {
    records.iter().flat_map(|r| r.as_bytes().iter().copied()).collect()
}

/// A source that returns at most `chunk` bytes per read, like a pipe.
struct Chunked {
    data: Vec<u8>,
    pos: usize,
    chunk: usize,
}

impl Read for Chunked {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.chunk.min(buf.len()).min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// A dump file read in one call yields every record, in order, unchanged.
#[test]
fn decodes_dump_file_in_order() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let path = tmp.path().join("events.bin");
    let burst = save_burst();
    fs::write(&path, to_bytes(&burst)).unwrap();

    let mut file = fs::File::open(&path).unwrap();
    let mut reader = EventReader::new(DecoderConfig::default()).unwrap();
    let mut queue: VecDeque<EventRecord> = VecDeque::new();

    let n = reader.read_and_enqueue(&mut file, &mut queue).unwrap();
    assert_eq!(n, burst.len());

    let names: Vec<String> = queue
        .iter()
        .map(|r| r.name_lossy().unwrap_or_default().into_owned())
        .collect();
    assert_eq!(names, [".draft.swp", ".draft.swp", "draft.md", "assets"]);

    // Rename halves are paired by cookie.
    assert_eq!(queue[1].cookie(), queue[2].cookie());
    assert!(queue[3].has(mask::IN_CREATE | mask::IN_ISDIR));

    for (got, want) in queue.iter().zip(&burst) {
        assert_eq!(got.as_bytes(), want.as_bytes());
    }
}

/// An empty dump is a successful zero-record read.
#[test]
fn empty_dump_file() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let path = tmp.path().join("empty.bin");
    fs::write(&path, b"").unwrap();

    let mut file = fs::File::open(&path).unwrap();
    let mut reader = EventReader::new(DecoderConfig::default()).unwrap();
    let mut queue: Vec<EventRecord> = Vec::new();

    assert_eq!(reader.read_and_enqueue(&mut file, &mut queue).unwrap(), 0);
    assert!(queue.is_empty());
}

/// A read that stops mid-record is reported, not silently truncated.
#[test]
fn short_read_mid_record_is_framing_error() {
    let burst = save_burst();
    let first = burst[0].len();
    let mut source = Chunked {
        data: to_bytes(&burst),
        pos: 0,
        chunk: first + HEADER_LEN + 2,
    };

    let mut reader = EventReader::new(DecoderConfig::default()).unwrap();
    let mut queue: Vec<EventRecord> = Vec::new();

    let err = reader.read_and_enqueue(&mut source, &mut queue).unwrap_err();
    match err {
        NotifyError::Framing { offset, .. } => assert_eq!(offset, first),
        other => panic!("expected Framing, got {other:?}"),
    }
    // The first record was complete and stays enqueued.
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].as_bytes(), burst[0].as_bytes());
}

/// Records decoded on a watcher thread arrive on the consumer side in order.
#[test]
fn channel_sink_across_threads() {
    let (tx, rx) = crossbeam_channel::bounded::<EventRecord>(16);
    let bytes = to_bytes(&save_burst());

    let producer = std::thread::spawn(move || {
        let mut tx = tx;
        decode_and_enqueue(&bytes, &mut tx)
    });

    let mut wds_and_masks = Vec::new();
    while let Ok(record) = rx.recv_timeout(Duration::from_secs(5)) {
        wds_and_masks.push((record.wd(), record.mask()));
    }

    assert_eq!(producer.join().unwrap().unwrap(), 4);
    assert_eq!(
        wds_and_masks,
        vec![
            (1, mask::IN_CREATE),
            (1, mask::IN_MOVED_FROM),
            (1, mask::IN_MOVED_TO),
            (1, mask::IN_CREATE | mask::IN_ISDIR),
        ]
    );
}

/// Repeated reads over a pipe-like source drain a long burst in chunks that
/// end on record boundaries.
#[test]
fn polling_loop_drains_source() {
    let burst = save_burst();
    let bytes = to_bytes(&burst);
    let mut source = Chunked {
        data: bytes,
        pos: 0,
        chunk: burst[0].len() + burst[1].len(),
    };

    let mut reader = EventReader::new(DecoderConfig::default()).unwrap();
    let mut queue: VecDeque<EventRecord> = VecDeque::new();
    let mut reads = 0;
    loop {
        let n = reader.read_and_enqueue(&mut source, &mut queue).unwrap();
        reads += 1;
        if n == 0 {
            break;
        }
    }

    assert_eq!(queue.len(), burst.len());
    assert!(reads >= 3, "expected several reads, got {reads}");
}
