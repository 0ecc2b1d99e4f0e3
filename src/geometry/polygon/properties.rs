// src/geometry/polygon/properties.rs

use crate::geometry::polygon::Polygon;
use crate::types::*;
use crate::utils::constants::EPSILON;

/// Trait für Polygon-Eigenschaften
pub trait PolygonProperties {
    /// Berechnet die Fläche des Polygons (Shoelace-Formel, Betrag)
    fn area(&self) -> f64;

    /// Prüft ob ein Punkt innerhalb des Polygons liegt (Ray-Casting)
    fn contains_point(&self, point: Point2D) -> bool;

    /// Minimale Distanz eines Punktes zu irgendeiner Polygonkante
    fn min_edge_distance(&self, point: Point2D) -> f64;
}

impl PolygonProperties for Polygon {
    fn area(&self) -> f64 {
        let n = self.corner_count();
        if n < 3 {
            return 0.0;
        }

        let vertices = self.vertices();
        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += vertices[i].x * vertices[j].y;
            area -= vertices[j].x * vertices[i].y;
        }

        (area * 0.5).abs()
    }

    fn contains_point(&self, point: Point2D) -> bool {
        let n = self.corner_count();
        if n < 3 {
            return false;
        }

        let vertices = self.vertices();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = vertices[i];
            let vj = vertices[j];

            // Epsilon im Nenner fängt (nahezu) horizontale Kanten ab,
            // bei denen der Strahltest sonst durch ~0 teilen würde.
            if ((vi.y > point.y) != (vj.y > point.y))
                && (point.x
                    < (vj.x - vi.x) * (point.y - vi.y) / ((vj.y - vi.y) + EPSILON) + vi.x)
            {
                inside = !inside;
            }
            j = i;
        }

        inside
    }

    fn min_edge_distance(&self, point: Point2D) -> f64 {
        self.edges()
            .map(|(a, b)| segment_distance(point, a, b))
            .fold(f64::INFINITY, f64::min)
    }
}

/// Distanz von `point` zur Strecke `a`-`b` (Projektion auf die Strecke geklemmt)
pub fn segment_distance(point: Point2D, a: Point2D, b: Point2D) -> f64 {
    let ab: Vector2<f64> = b - a;
    let ap: Vector2<f64> = point - a;

    let len_sq = ab.norm_squared();
    if len_sq < EPSILON {
        // Degenerierte Kante: beide Endpunkte fallen zusammen
        return ap.norm();
    }

    let t = (ap.dot(&ab) / len_sq).clamp(0.0, 1.0);
    let projection = a + ab * t;
    (point - projection).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::{Area, Contains};

    fn rect() -> Polygon {
        Polygon::closed(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(3.0, 0.0),
            Point2D::new(3.0, 2.0),
            Point2D::new(0.0, 2.0),
        ])
        .unwrap()
    }

    fn l_shape() -> Polygon {
        Polygon::closed(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 2.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(2.0, 4.0),
            Point2D::new(0.0, 4.0),
        ])
        .unwrap()
    }

    fn to_geo(polygon: &Polygon) -> geo::Polygon<f64> {
        let coords: Vec<(f64, f64)> = polygon.vertices().iter().map(|v| (v.x, v.y)).collect();
        geo::Polygon::new(geo::LineString::from(coords), vec![])
    }

    #[test]
    fn test_area_shoelace() {
        assert_relative_eq!(rect().area(), 6.0);
        assert_relative_eq!(l_shape().area(), 12.0);
    }

    #[test]
    fn test_area_matches_geo() {
        for polygon in [rect(), l_shape()] {
            assert_relative_eq!(
                polygon.area(),
                to_geo(&polygon).unsigned_area(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_area_winding_independent() {
        let reversed = Polygon::closed(vec![
            Point2D::new(0.0, 2.0),
            Point2D::new(3.0, 2.0),
            Point2D::new(3.0, 0.0),
            Point2D::new(0.0, 0.0),
        ])
        .unwrap();
        assert_relative_eq!(reversed.area(), 6.0);
    }

    #[test]
    fn test_contains_point() {
        let polygon = l_shape();
        assert!(polygon.contains_point(Point2D::new(1.0, 1.0)));
        assert!(polygon.contains_point(Point2D::new(1.0, 3.0)));
        // Die ausgeschnittene Ecke des L
        assert!(!polygon.contains_point(Point2D::new(3.0, 3.0)));
        assert!(!polygon.contains_point(Point2D::new(-0.5, 1.0)));
    }

    #[test]
    fn test_contains_matches_geo() {
        let polygon = l_shape();
        let reference = to_geo(&polygon);
        for x in [-1.0, 0.5, 1.5, 2.5, 3.5, 4.5] {
            for y in [-1.0, 0.5, 1.5, 2.5, 3.5, 4.5] {
                assert_eq!(
                    polygon.contains_point(Point2D::new(x, y)),
                    reference.contains(&geo::point!(x: x, y: y)),
                    "divergence at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_min_edge_distance() {
        let polygon = rect();
        assert_relative_eq!(polygon.min_edge_distance(Point2D::new(1.5, 1.0)), 1.0);
        assert_relative_eq!(polygon.min_edge_distance(Point2D::new(0.3, 1.0)), 0.3);
        // Außerhalb: Distanz zur nächsten Ecke
        assert_relative_eq!(
            polygon.min_edge_distance(Point2D::new(4.0, 3.0)),
            2.0f64.sqrt()
        );
    }

    #[test]
    fn test_segment_distance_clamps() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(2.0, 0.0);
        assert_relative_eq!(segment_distance(Point2D::new(1.0, 1.0), a, b), 1.0);
        assert_relative_eq!(segment_distance(Point2D::new(-1.0, 0.0), a, b), 1.0);
        assert_relative_eq!(segment_distance(Point2D::new(3.0, 0.0), a, b), 1.0);
    }
}
