//! Geometry and transform definitions, free of any I/O.

pub mod point;
pub mod ports;
pub mod transform;
