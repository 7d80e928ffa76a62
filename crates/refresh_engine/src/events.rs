use std::sync::mpsc;

use crate::WatchEvent;

pub trait EventSink: Send + Sync {
    fn emit(&self, event: WatchEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<WatchEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<WatchEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: WatchEvent) {
        // A dropped receiver only means nobody is listening.
        let _ = self.tx.send(event);
    }
}
