// src/geometry/polygon/core.rs

use crate::{error::*, types::*};
use std::fmt;

/// Grundriss-Polygon des Raums
///
/// Die Umlaufrichtung ist für Fläche und Enthaltensein irrelevant
/// (Betrag bzw. Ray-Casting). Ein Polygon kann offen oder geschlossen
/// gespeichert sein; geschlossene wiederholen den ersten Vertex am Ende.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2D>,
    is_closed: bool,
}

impl Polygon {
    /// Erstellt ein neues Polygon aus Vertices
    pub fn new(vertices: Vec<Point2D>) -> PlacementResult<Self> {
        Self::from_vertices(vertices, false)
    }

    /// Erstellt ein geschlossenes Polygon
    pub fn closed(vertices: Vec<Point2D>) -> PlacementResult<Self> {
        Self::from_vertices(vertices, true)
    }

    /// Erstellt Polygon mit Validierung
    fn from_vertices(mut vertices: Vec<Point2D>, force_closed: bool) -> PlacementResult<Self> {
        if vertices.len() < 3 {
            return Err(PlacementError::InsufficientPoints {
                expected: 3,
                actual: vertices.len(),
            });
        }

        // Automatisch schließen wenn erwünscht und nicht bereits geschlossen
        let is_closed = if force_closed {
            if vertices.first() != vertices.last() {
                vertices.push(vertices[0]);
            }
            true
        } else {
            vertices.first() == vertices.last()
        };

        Ok(Self {
            vertices,
            is_closed,
        })
    }

    /// Zugriff auf Vertices
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// Anzahl der gespeicherten Vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Anzahl der tatsächlichen Ecken (ohne duplizierten Schlusspunkt)
    pub fn corner_count(&self) -> usize {
        if self.is_closed {
            self.vertices.len() - 1
        } else {
            self.vertices.len()
        }
    }

    /// Iteriert über alle Kanten als Punktpaare
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = self.corner_count();
        (0..n).map(move |i| {
            let j = (i + 1) % n;
            (self.vertices[i], self.vertices[j])
        })
    }

    /// Bounding Box berechnen
    pub fn bounds(&self) -> Option<Bounds2D> {
        Bounds2D::from_points_iter(self.vertices.iter().copied())
    }
}

/// Display-Implementierung für Debugging
impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon({} vertices", self.vertices.len())?;
        if self.is_closed {
            write!(f, ", closed")?;
        }
        write!(f, ")")?;
        Ok(())
    }
}

impl TryFrom<Vec<Point2D>> for Polygon {
    type Error = PlacementError;

    fn try_from(vertices: Vec<Point2D>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Polygon {
        Polygon::closed(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(3.0, 0.0),
            Point2D::new(3.0, 2.0),
            Point2D::new(0.0, 2.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_too_few_vertices() {
        let result = Polygon::new(vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0)]);
        assert!(matches!(
            result,
            Err(PlacementError::InsufficientPoints { .. })
        ));
    }

    #[test]
    fn test_closed_duplicates_first_vertex() {
        let polygon = rect();
        assert!(polygon.is_closed());
        assert_eq!(polygon.len(), 5);
        assert_eq!(polygon.corner_count(), 4);
    }

    #[test]
    fn test_edges_wrap_around() {
        let polygon = rect();
        let edges: Vec<_> = polygon.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (Point2D::new(0.0, 2.0), Point2D::new(0.0, 0.0)));
    }

    #[test]
    fn test_bounds() {
        let bounds = rect().bounds().unwrap();
        assert_eq!(bounds.min, Point2D::new(0.0, 0.0));
        assert_eq!(bounds.max, Point2D::new(3.0, 2.0));
    }
}
