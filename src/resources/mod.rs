pub mod discovery;
pub mod persist;
