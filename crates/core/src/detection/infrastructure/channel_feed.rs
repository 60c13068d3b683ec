use crossbeam_channel::{Receiver, Sender, TryRecvError};

use crate::detection::domain::detection_feed::{
    DetectionFeed, FeedEvent, MountError, TimedFeedEvent,
};
use crate::detection::domain::face::DetectionEvent;

const DEFAULT_CHANNEL_CAPACITY: usize = 8;

enum FeedMessage {
    Event(TimedFeedEvent),
    Mount(MountError),
}

/// Producer half of a [`channel_feed`] pair.
///
/// Cloneable; camera-host callbacks may fire from any thread, and pushing
/// through the channel is what serializes them for the single consumer.
/// Send methods return `false` once the consumer is gone.
#[derive(Clone)]
pub struct FeedSender {
    tx: Sender<FeedMessage>,
}

impl FeedSender {
    pub fn send_event(&self, event: TimedFeedEvent) -> bool {
        self.tx.send(FeedMessage::Event(event)).is_ok()
    }

    pub fn send_detection(&self, event: DetectionEvent, at_ms: f64) -> bool {
        self.send_event(TimedFeedEvent {
            at_ms,
            event: FeedEvent::Detection(event),
        })
    }

    pub fn send_rotation(&self, rotation_degrees: f64, at_ms: f64) -> bool {
        self.send_event(TimedFeedEvent {
            at_ms,
            event: FeedEvent::Rotation(rotation_degrees),
        })
    }

    pub fn report_mount_error(&self, error: MountError) -> bool {
        self.tx.send(FeedMessage::Mount(error)).is_ok()
    }
}

/// Result of a non-blocking [`ChannelFeed::poll`].
#[derive(Debug, PartialEq)]
pub enum FeedPoll {
    Event(TimedFeedEvent),
    /// No event queued right now; producers are still connected.
    Empty,
    /// All senders dropped; the feed will produce nothing further.
    Closed,
}

/// Consumer half: bridges concurrently-produced camera-host callbacks into
/// the serial stream the overlay controller requires.
///
/// Use the blocking [`DetectionFeed`] impl for event-driven consumers, or
/// [`poll`](ChannelFeed::poll) from a tick loop that samples the transform
/// at its own rate.
pub struct ChannelFeed {
    rx: Receiver<FeedMessage>,
}

impl ChannelFeed {
    pub fn poll(&self) -> Result<FeedPoll, MountError> {
        match self.rx.try_recv() {
            Ok(FeedMessage::Event(event)) => Ok(FeedPoll::Event(event)),
            Ok(FeedMessage::Mount(err)) => Err(err),
            Err(TryRecvError::Empty) => Ok(FeedPoll::Empty),
            Err(TryRecvError::Disconnected) => Ok(FeedPoll::Closed),
        }
    }
}

impl DetectionFeed for ChannelFeed {
    fn next_event(&mut self) -> Result<Option<TimedFeedEvent>, Box<dyn std::error::Error>> {
        match self.rx.recv() {
            Ok(FeedMessage::Event(event)) => Ok(Some(event)),
            Ok(FeedMessage::Mount(err)) => Err(Box::new(err)),
            Err(_) => Ok(None),
        }
    }
}

/// Creates a connected sender/feed pair with the default channel capacity.
pub fn channel_feed() -> (FeedSender, ChannelFeed) {
    channel_feed_with_capacity(DEFAULT_CHANNEL_CAPACITY)
}

pub fn channel_feed_with_capacity(capacity: usize) -> (FeedSender, ChannelFeed) {
    let (tx, rx) = crossbeam_channel::bounded(capacity);
    (FeedSender { tx }, ChannelFeed { rx })
}
