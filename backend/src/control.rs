use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, trace, warn};

use crate::config::TrackerConfig;
use crate::serial::Transport;
use crate::track::angle::{Axis, Converter};
use crate::track::geometry::Region;
use crate::track::zone::{DeadZone, FrameSize};
use crate::wire::Correction;

/// Blocking frame supplier. Opening and configuring the capture device is
/// the caller's concern; the controller only pulls frames from it.
pub trait FrameSource {
    type Frame;

    /// Capture dimensions, queried once per session.
    fn frame_size(&mut self) -> (f32, f32);

    /// Blocks until the next frame. `None` means no usable frame this
    /// cycle; the controller skips it without sending anything.
    fn next_frame(&mut self) -> Option<Self::Frame>;
}

/// External detector producing candidate target regions for one frame, in
/// its own preference order.
pub trait Detector {
    type Frame;

    fn detect(&mut self, frame: &Self::Frame) -> Vec<Region>;
}

/// Closed-loop tracking controller.
///
/// One synchronous loop: pull a frame, detect, take the first region,
/// turn its center into a dead-zone-filtered correction and push that out
/// over the transport. Session state (dead zone, converter) is computed at
/// construction and read-only afterwards.
pub struct TurretController<S, D, T> {
    source: S,
    detector: D,
    transport: T,
    converter: Converter,
    zone: DeadZone,
}

impl<S, D, T> TurretController<S, D, T>
where
    S: FrameSource,
    D: Detector<Frame = S::Frame>,
    T: Transport,
{
    pub fn new(
        mut source: S,
        detector: D,
        transport: T,
        config: &TrackerConfig,
    ) -> crate::Result<Self> {
        let (width, height) = source.frame_size();
        let size = FrameSize::new(width, height)?;
        let zone = DeadZone::for_frame(size, config.tolerance_x(), config.tolerance_y());
        debug!(
            "session: frame {}x{}, x band [{}, {}], y band [{}, {}]",
            size.width(),
            size.height(),
            zone.x.lower,
            zone.x.upper,
            zone.y.lower,
            zone.y.upper
        );

        Ok(Self {
            source,
            detector,
            transport,
            converter: Converter::from_config(config),
            zone,
        })
    }

    /// Runs cycles until `stop` is set. Nothing inside a cycle ends the
    /// loop; a dropped frame or a failed write only costs that cycle.
    pub fn run(&mut self, stop: &AtomicBool) {
        while !stop.load(Ordering::Relaxed) {
            self.cycle();
        }
    }

    /// One acquisition, detection, correction, transmit pass.
    pub fn cycle(&mut self) {
        let Some(frame) = self.source.next_frame() else {
            trace!("no frame this cycle");
            return;
        };

        let regions = self.detector.detect(&frame);
        // First detected region wins; the rest are ignored by policy.
        // Inverted rectangles are skipped instead of fed to the geometry.
        let Some(region) = regions.into_iter().find(|region| {
            if region.is_well_formed() {
                true
            } else {
                warn!("detector produced inverted region {region:?}, skipping");
                false
            }
        }) else {
            return;
        };

        let center = region.center();
        let correction = Correction {
            base: self
                .converter
                .correction(Axis::Pan, center.x, &self.zone.x, self.zone.center.x),
            side: self
                .converter
                .correction(Axis::Tilt, center.y, &self.zone.y, self.zone.center.y),
        };
        if correction.is_hold() {
            trace!("target centered at ({}, {})", center.x, center.y);
        } else {
            debug!(
                "target at ({}, {}): base {} side {}",
                center.x, center.y, correction.base, correction.side
            );
        }

        if let Err(err) = self.transport.send(&correction.encode()) {
            warn!("dropping correction, {err}");
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::serial::TransportError;

    struct NoFrames(f32, f32);

    impl FrameSource for NoFrames {
        type Frame = ();

        fn frame_size(&mut self) -> (f32, f32) {
            (self.0, self.1)
        }

        fn next_frame(&mut self) -> Option<()> {
            None
        }
    }

    struct NoDetections;

    impl Detector for NoDetections {
        type Frame = ();

        fn detect(&mut self, _frame: &()) -> Vec<Region> {
            Vec::new()
        }
    }

    struct NoLink;

    impl Transport for NoLink {
        fn send(&mut self, _message: &[u8]) -> Result<(), TransportError> {
            Ok(())
        }
    }

    #[test]
    fn rejects_degenerate_capture_dimensions() {
        let result = TurretController::new(
            NoFrames(0.0, 480.0),
            NoDetections,
            NoLink,
            &TrackerConfig::default(),
        );
        assert!(matches!(result, Err(Error::BadFrameSize { .. })));
    }
}
