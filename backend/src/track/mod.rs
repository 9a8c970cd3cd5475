pub mod angle;
pub mod geometry;
pub mod zone;
