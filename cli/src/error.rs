use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Backend(#[from] backend::error::Error),
    #[error(transparent)]
    Ctrlc(#[from] ctrlc::Error),
    #[error("no serial device found, pass --port or set TURRET_PORT")]
    NoDevice,
}
