pub mod bounds;
pub mod constants;
