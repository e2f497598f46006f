pub mod aurora;
pub mod error;
