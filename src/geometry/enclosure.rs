// src/geometry/enclosure.rs

use crate::geometry::polygon::{Polygon, PolygonProperties};
use crate::{error::*, types::*};

/// Raumvolumen: Grundriss-Polygon plus Deckenhöhe
///
/// Definiert den zulässigen 3D-Bereich vor Abzug der Randabstände.
#[derive(Debug, Clone, PartialEq)]
pub struct Enclosure {
    polygon: Polygon,
    height: f64,
}

impl Enclosure {
    pub fn new(polygon: Polygon, height: f64) -> PlacementResult<Self> {
        if !height.is_finite() || height <= 0.0 {
            return Err(PlacementError::InvalidEnclosure {
                reason: format!("height must be positive, got {height}"),
            });
        }

        Ok(Self { polygon, height })
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Grundfläche in m²
    pub fn footprint_area(&self) -> f64 {
        self.polygon.area()
    }

    /// Liegt der Punkt mit Sicherheitsabstand zu allen Flächen im Raum?
    ///
    /// Prüft Enthaltensein im Grundriss, Mindestabstand zu jeder Wandkante
    /// sowie den Abstand zu Boden und Decke.
    pub fn contains_with_margin(&self, point: Point3, margin: f64) -> bool {
        if point.z < margin || point.z > self.height - margin {
            return false;
        }

        let xy = point.xy();
        self.polygon.contains_point(xy) && self.polygon.min_edge_distance(xy) >= margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Enclosure {
        let polygon = Polygon::closed(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(3.0, 0.0),
            Point2D::new(3.0, 2.0),
            Point2D::new(0.0, 2.0),
        ])
        .unwrap();
        Enclosure::new(polygon, 2.5).unwrap()
    }

    #[test]
    fn test_rejects_invalid_height() {
        let polygon = room().polygon().clone();
        assert!(Enclosure::new(polygon.clone(), 0.0).is_err());
        assert!(Enclosure::new(polygon, -1.0).is_err());
    }

    #[test]
    fn test_contains_with_margin() {
        let room = room();
        assert!(room.contains_with_margin(Point3::new(1.5, 1.0, 1.2), 0.5));
        // Zu nah an der Wand
        assert!(!room.contains_with_margin(Point3::new(0.3, 1.0, 1.2), 0.5));
        // Zu nah am Boden bzw. an der Decke
        assert!(!room.contains_with_margin(Point3::new(1.5, 1.0, 0.4), 0.5));
        assert!(!room.contains_with_margin(Point3::new(1.5, 1.0, 2.1), 0.5));
        // Auf der Grenze ist zulässig
        assert!(room.contains_with_margin(Point3::new(0.5, 1.0, 0.5), 0.5));
    }
}
