use crate::error::Error;
use crate::track::geometry::CenterPoint;

/// Capture dimensions, queried once from the frame source and fixed for
/// the whole tracking session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSize {
    width: f32,
    height: f32,
}

impl FrameSize {
    pub fn new(width: f32, height: f32) -> crate::Result<Self> {
        if width <= 0.0 || height <= 0.0 {
            return Err(Error::BadFrameSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center(&self) -> CenterPoint {
        CenterPoint {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }
}

/// Acceptable band around a frame-center coordinate: `center ± tolerance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub lower: f32,
    pub upper: f32,
}

impl Band {
    pub fn around(center: f32, tolerance: f32) -> Self {
        Self {
            lower: center - tolerance,
            upper: center + tolerance,
        }
    }

    /// Strictly inside the band. A coordinate exactly on an edge is not
    /// "inside", but it still ends up with a zero correction: no branch of
    /// the step policy matches it either.
    pub fn contains(&self, coordinate: f32) -> bool {
        self.lower < coordinate && coordinate < self.upper
    }
}

/// Session dead zone, one band per axis. Computed once after the capture
/// device reports its dimensions, read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeadZone {
    pub x: Band,
    pub y: Band,
    pub center: CenterPoint,
}

impl DeadZone {
    pub fn for_frame(size: FrameSize, tolerance_x: f32, tolerance_y: f32) -> Self {
        let center = size.center();
        Self {
            x: Band::around(center.x, tolerance_x),
            y: Band::around(center.y, tolerance_y),
            center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_is_symmetric_around_center() {
        let band = Band::around(320.0, 50.0);
        assert!(band.lower <= 320.0 && 320.0 <= band.upper);
        assert_eq!(band.upper - band.lower, 100.0);
    }

    #[test]
    fn bands_for_vga_frame() {
        let size = FrameSize::new(640.0, 480.0).unwrap();
        let zone = DeadZone::for_frame(size, 50.0, 50.0);
        assert_eq!(zone.x, Band { lower: 270.0, upper: 370.0 });
        assert_eq!(zone.y, Band { lower: 190.0, upper: 290.0 });
        assert_eq!(zone.center, CenterPoint { x: 320.0, y: 240.0 });
    }

    #[test]
    fn edge_coordinates_are_not_inside() {
        let band = Band::around(320.0, 50.0);
        assert!(band.contains(320.0));
        assert!(!band.contains(270.0));
        assert!(!band.contains(370.0));
    }

    #[test]
    fn zero_tolerance_band_contains_nothing() {
        let band = Band::around(240.0, 0.0);
        assert!(!band.contains(240.0));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(matches!(
            FrameSize::new(0.0, 480.0),
            Err(Error::BadFrameSize { .. })
        ));
        assert!(matches!(
            FrameSize::new(640.0, -1.0),
            Err(Error::BadFrameSize { .. })
        ));
    }
}
