/// Destinations for decoded records.
///
/// The decoder hands each record over by value and never touches it again.
/// Any FIFO the host application uses can be a sink; the common ones are
/// implemented here.
use super::record::EventRecord;
use crate::error::{NotifyError, NotifyResult};
use crossbeam_channel::Sender;
use std::collections::VecDeque;

/// A FIFO that takes ownership of decoded records in arrival order.
pub trait EventSink {
    /// Take ownership of `record`.
    fn accept(&mut self, record: EventRecord) -> NotifyResult<()>;
}

impl EventSink for VecDeque<EventRecord> {
    fn accept(&mut self, record: EventRecord) -> NotifyResult<()> {
        self.push_back(record);
        Ok(())
    }
}

impl EventSink for Vec<EventRecord> {
    fn accept(&mut self, record: EventRecord) -> NotifyResult<()> {
        self.push(record);
        Ok(())
    }
}

/// Blocks while a bounded channel is full. A dropped receiver yields
/// [`NotifyError::SinkClosed`].
impl EventSink for Sender<EventRecord> {
    fn accept(&mut self, record: EventRecord) -> NotifyResult<()> {
        self.send(record).map_err(|_| NotifyError::SinkClosed)
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn accept(&mut self, record: EventRecord) -> NotifyResult<()> {
        (**self).accept(record)
    }
}
