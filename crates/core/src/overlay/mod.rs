pub mod controller;
pub mod state;
pub mod timed_value;
pub mod transform;
