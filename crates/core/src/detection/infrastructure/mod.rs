pub mod channel_feed;
pub mod scripted_feed;
