pub mod detection;
pub mod overlay;
pub mod shared;
