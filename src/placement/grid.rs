// src/placement/grid.rs

use super::rules::PlacementRules;
use crate::geometry::{Enclosure, PolygonProperties};
use crate::utils::constants::GRID_EPSILON;
use crate::{error::*, types::*};
use log::debug;
use std::collections::HashMap;

/// Kandidatengitter: alle Gitterpunkte, die Randabstand und
/// Enthaltensein bereits erfüllen
///
/// Wird einmal je Geometrieänderung gebaut und über beliebig viele
/// Suchläufe wiederverwendet. Der Z-Index (`by_z`) erlaubt während der
/// Suche den Zugriff auf eine komplette Höhenebene in O(Ebene).
#[derive(Debug, Clone)]
pub struct CandidateGrid {
    points: Vec<Point3>,
    by_z: HashMap<CoordKey, Vec<usize>>,
    z_levels: Vec<f64>,
}

impl CandidateGrid {
    pub fn build(enclosure: &Enclosure, rules: &PlacementRules) -> PlacementResult<Self> {
        rules.validate()?;

        let polygon = enclosure.polygon();
        let bounds = polygon
            .bounds()
            .ok_or_else(|| PlacementError::GeometricFailure {
                operation: "CandidateGrid::build - polygon has no bounds".to_string(),
            })?;

        let margin = rules.margin;
        let step = rules.step;

        // Startwert auf das Raster aufrunden, Obergrenze inklusiv mit Toleranz
        let start_x = ((bounds.min.x + margin) / step - GRID_EPSILON).ceil() * step;
        let start_y = ((bounds.min.y + margin) / step - GRID_EPSILON).ceil() * step;
        let xs = axis_values(start_x, bounds.max.x - margin, step);
        let ys = axis_values(start_y, bounds.max.y - margin, step);

        let mut cells: Vec<Point2D> = Vec::new();
        for &x in &xs {
            for &y in &ys {
                let cell = Point2D::new(x, y);
                if polygon.contains_point(cell)
                    && polygon.min_edge_distance(cell) >= margin - GRID_EPSILON
                {
                    cells.push(cell);
                }
            }
        }

        // Höhenebenen beginnen exakt beim Randabstand, nicht am Raster
        let zs = axis_values(margin, enclosure.height() - margin, step);

        let mut points = Vec::with_capacity(cells.len() * zs.len());
        let mut by_z: HashMap<CoordKey, Vec<usize>> = HashMap::new();
        for &z in &zs {
            let key = coord_key(z);
            let level = by_z.entry(key).or_default();
            for cell in &cells {
                level.push(points.len());
                points.push(Point3::new(cell.x, cell.y, z));
            }
        }

        debug!(
            "CandidateGrid::build - {} xy cells ({} raw), {} z levels, {} candidates",
            cells.len(),
            xs.len() * ys.len(),
            zs.len(),
            points.len()
        );

        Ok(Self {
            points,
            by_z,
            z_levels: zs,
        })
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Alle Höhenebenen, aufsteigend sortiert
    pub fn z_levels(&self) -> &[f64] {
        &self.z_levels
    }

    /// Kandidaten-Indizes einer Höhenebene
    pub fn level(&self, key: CoordKey) -> &[usize] {
        self.by_z.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Rastert ein Intervall `[start, end]` inklusiv ab (indexbasiert,
/// damit sich Schrittfehler nicht aufsummieren)
fn axis_values(start: f64, end: f64, step: f64) -> Vec<f64> {
    let mut values = Vec::new();
    let mut i = 0usize;
    loop {
        let value = start + i as f64 * step;
        if value > end + GRID_EPSILON {
            break;
        }
        values.push(value);
        i += 1;
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Polygon;

    fn rect_room() -> Enclosure {
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
    fn test_axis_values_inclusive() {
        let values = axis_values(0.5, 2.5, 0.1);
        assert_eq!(values.len(), 21);
        assert_eq!(values[0], 0.5);
        assert!((values[20] - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_rect_scenario_counts() {
        // 3 x 2 m Grundriss, 2.5 m hoch: 21 x 11 = 231 XY-Zellen,
        // 16 Höhenebenen (0.5 .. 2.0), 3696 Kandidaten.
        let grid = CandidateGrid::build(&rect_room(), &PlacementRules::default()).unwrap();
        assert_eq!(grid.z_levels().len(), 16);
        assert_eq!(grid.len(), 3696);
        assert_eq!(grid.len() / grid.z_levels().len(), 231);
    }

    #[test]
    fn test_all_candidates_respect_margin() {
        let room = rect_room();
        let grid = CandidateGrid::build(&room, &PlacementRules::default()).unwrap();
        for point in grid.points() {
            assert!(
                room.contains_with_margin(*point, 0.5 - 1e-6),
                "candidate {point:?} violates margin"
            );
        }
    }

    #[test]
    fn test_level_lookup() {
        let grid = CandidateGrid::build(&rect_room(), &PlacementRules::default()).unwrap();
        let level = grid.level(coord_key(1.0));
        assert_eq!(level.len(), 231);
        for &idx in level {
            assert_eq!(grid.points()[idx].key_z(), 10);
        }
    }

    #[test]
    fn test_too_small_room_has_no_candidates() {
        let polygon = Polygon::closed(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(0.8, 0.0),
            Point2D::new(0.8, 0.8),
            Point2D::new(0.0, 0.8),
        ])
        .unwrap();
        let room = Enclosure::new(polygon, 2.5).unwrap();
        let grid = CandidateGrid::build(&room, &PlacementRules::default()).unwrap();
        assert!(grid.is_empty());
    }
}
