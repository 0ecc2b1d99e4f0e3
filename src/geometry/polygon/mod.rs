// src/geometry/polygon/mod.rs
pub mod core;
pub mod properties;

pub use self::core::Polygon;
pub use self::properties::PolygonProperties;
