use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    ConfigParse(#[from] toml::de::Error),
    #[error("frame dimensions must be positive, got {width}x{height}")]
    BadFrameSize { width: f32, height: f32 },
}
