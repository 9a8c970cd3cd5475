use std::path::{Path, PathBuf};
use std::time::Duration;

use serial2::SerialPort;
use thiserror::Error;

/// Byte sink for encoded corrections.
///
/// A failed send is non-fatal by contract: the controller reports it and
/// moves on to the next frame, it never retries within a cycle.
pub trait Transport {
    fn send(&mut self, message: &[u8]) -> Result<(), TransportError>;
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("serial write failed: {0}")]
    Write(#[from] std::io::Error),
}

/// Serial link to the actuator controller. The device is opened up front;
/// the tracking loop only ever writes.
pub struct SerialLink {
    port: SerialPort,
}

impl SerialLink {
    /// Opens `path` at `baud` with a write timeout, so a wedged link costs
    /// at most one cycle instead of stalling the loop forever.
    pub fn open(path: impl AsRef<Path>, baud: u32, write_timeout: Duration) -> crate::Result<Self> {
        let mut port = SerialPort::open(path, baud)?;
        port.set_write_timeout(write_timeout)?;
        Ok(Self { port })
    }
}

impl Transport for SerialLink {
    fn send(&mut self, message: &[u8]) -> Result<(), TransportError> {
        self.port.write_all(message)?;
        Ok(())
    }
}

/// Candidate serial devices on this machine.
pub fn list_devices() -> crate::Result<Vec<PathBuf>> {
    Ok(SerialPort::available_ports()?)
}
