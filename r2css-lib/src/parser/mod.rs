pub mod minimize;
pub mod segment;
