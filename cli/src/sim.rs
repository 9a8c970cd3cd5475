//! Synthetic collaborators for exercising the turret without a camera:
//! a frame source and detector that sweep one target across the frame,
//! and a stdout transport for dry runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use backend::control::{Detector, FrameSource};
use backend::serial::{Transport, TransportError};
use backend::track::geometry::Region;
use backend::wire::FRAME_DELIMITER;

/// A bench frame carries nothing but its dimensions and sequence number;
/// the sweep detector fabricates the target from those.
pub struct SimFrame {
    pub index: u32,
    pub width: i32,
    pub height: i32,
}

/// Emits `frames` synthetic frames at a fixed period, then raises the stop
/// flag so the controller's run loop winds down like a Ctrl-C would.
pub struct SweepSource {
    width: f32,
    height: f32,
    frames: u32,
    period: Duration,
    emitted: u32,
    stop: Arc<AtomicBool>,
}

impl SweepSource {
    pub fn new(
        width: f32,
        height: f32,
        frames: u32,
        period: Duration,
        stop: Arc<AtomicBool>,
    ) -> Self {
        Self {
            width,
            height,
            frames,
            period,
            emitted: 0,
            stop,
        }
    }
}

impl FrameSource for SweepSource {
    type Frame = SimFrame;

    fn frame_size(&mut self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn next_frame(&mut self) -> Option<SimFrame> {
        if self.emitted >= self.frames {
            self.stop.store(true, Ordering::Relaxed);
            return None;
        }
        // stand in for the blocking camera read
        thread::sleep(self.period);

        let frame = SimFrame {
            index: self.emitted,
            width: self.width as i32,
            height: self.height as i32,
        };
        self.emitted += 1;
        Some(frame)
    }
}

/// "Detects" a square target walking left to right through the frame at a
/// fixed height, wrapping when it reaches the edge.
pub struct SweepDetector {
    target_size: i32,
    stride: i32,
}

impl SweepDetector {
    pub fn new(target_size: i32, stride: i32) -> Self {
        Self {
            target_size,
            stride,
        }
    }
}

impl Detector for SweepDetector {
    type Frame = SimFrame;

    fn detect(&mut self, frame: &SimFrame) -> Vec<Region> {
        let travel = (frame.width - self.target_size).max(1);
        let min_x = (frame.index as i32 * self.stride) % travel;
        let min_y = (frame.height - self.target_size) / 2;

        vec![Region {
            min_x,
            min_y,
            max_x: min_x + self.target_size,
            max_y: min_y + self.target_size,
        }]
    }
}

/// Prints each payload to stdout instead of a serial device.
pub struct ConsoleTransport;

impl Transport for ConsoleTransport {
    fn send(&mut self, message: &[u8]) -> Result<(), TransportError> {
        let payload = message.strip_suffix(&[FRAME_DELIMITER]).unwrap_or(message);
        println!("{}", String::from_utf8_lossy(payload));
        Ok(())
    }
}
