// src/types/point.rs
use super::*;
use crate::utils::constants::KEY_SCALE;
use serde::{Deserialize, Serialize};

/// 3D-Messpunkt in Metern.
///
/// Gleichheit für Constraint-Zwecke läuft über Koordinatenschlüssel
/// (auf 0.1 m gerundete Koordinaten), nicht über exakte Floats.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Koordinatenschlüssel: Koordinate auf 0.1 m gerundet, als ganze Zahl.
pub type CoordKey = i64;

/// Rundet eine einzelne Koordinate auf ihren Schlüssel.
pub fn coord_key(value: f64) -> CoordKey {
    (value * KEY_SCALE).round() as CoordKey
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euklidische Distanz im Raum
    pub fn distance_to(&self, other: Point3) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }

    /// Distanz in der XY-Ebene (Grundriss)
    pub fn distance_xy(&self, other: Point3) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Distanz in der XZ-Ebene
    pub fn distance_xz(&self, other: Point3) -> f64 {
        ((self.x - other.x).powi(2) + (self.z - other.z).powi(2)).sqrt()
    }

    /// Distanz in der YZ-Ebene
    pub fn distance_yz(&self, other: Point3) -> f64 {
        ((self.y - other.y).powi(2) + (self.z - other.z).powi(2)).sqrt()
    }

    pub fn key_x(&self) -> CoordKey {
        coord_key(self.x)
    }

    pub fn key_y(&self) -> CoordKey {
        coord_key(self.y)
    }

    pub fn key_z(&self) -> CoordKey {
        coord_key(self.z)
    }

    /// Alle drei Koordinatenschlüssel auf einmal
    pub fn keys(&self) -> (CoordKey, CoordKey, CoordKey) {
        (self.key_x(), self.key_y(), self.key_z())
    }

    /// Projektion auf den Grundriss
    pub fn xy(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

// Conversion traits
impl From<nalgebra::Point3<f64>> for Point3 {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

impl From<Point3> for nalgebra::Point3<f64> {
    fn from(p: Point3) -> Self {
        nalgebra::Point3::new(p.x, p.y, p.z)
    }
}

impl From<Point3> for Vector3<f64> {
    fn from(p: Point3) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_3d() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 2.0, 2.0);
        assert_relative_eq!(a.distance_to(b), 3.0);
    }

    #[test]
    fn test_planar_distances() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 12.0);
        assert_relative_eq!(a.distance_xy(b), 5.0);
        assert_relative_eq!(a.distance_xz(b), (9.0f64 + 144.0).sqrt());
        assert_relative_eq!(a.distance_yz(b), (16.0f64 + 144.0).sqrt());
    }

    #[test]
    fn test_coord_keys() {
        let p = Point3::new(1.2499, 0.05, 2.0);
        assert_eq!(p.key_x(), 12);
        assert_eq!(p.key_y(), 1); // 0.05 rundet auf 0.1
        assert_eq!(p.key_z(), 20);
    }

    #[test]
    fn test_key_equality_at_tenth_meter() {
        let a = Point3::new(1.04, 0.0, 0.0);
        let b = Point3::new(0.96, 0.0, 0.0);
        assert_eq!(a.key_x(), b.key_x());
    }
}
