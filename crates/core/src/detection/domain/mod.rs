pub mod detection_feed;
pub mod detector_config;
pub mod face;
