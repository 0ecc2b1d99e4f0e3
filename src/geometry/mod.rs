// src/geometry/mod.rs
pub mod enclosure;
pub mod polygon;

pub use enclosure::*;
pub use polygon::*;
