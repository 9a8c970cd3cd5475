/// Axis-aligned detection rectangle in frame-pixel coordinates.
///
/// Produced fresh every frame by the detector; never outlives the cycle
/// that consumed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterPoint {
    pub x: f32,
    pub y: f32,
}

impl Region {
    /// Detectors promise `max >= min` per axis; anything else is garbage
    /// geometry and gets skipped by the controller.
    pub fn is_well_formed(&self) -> bool {
        self.max_x >= self.min_x && self.max_y >= self.min_y
    }

    /// Geometric midpoint, measured back from the far corner.
    ///
    /// The half-extent is halved in integer space before converting to
    /// float. The truncation for odd extents is deliberate: the servo
    /// calibration was done against the truncated center.
    pub fn center(&self) -> CenterPoint {
        CenterPoint {
            x: (self.max_x - (self.max_x - self.min_x) / 2) as f32,
            y: (self.max_y - (self.max_y - self.min_y) / 2) as f32,
        }
    }
}
