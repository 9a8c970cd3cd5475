pub mod config;
pub mod control;
pub mod error;
pub mod serial;
pub mod track;
pub mod wire;

pub(crate) type Result<T> = std::result::Result<T, crate::error::Error>;
