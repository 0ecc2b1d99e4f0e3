// src/placement/anchor.rs

use crate::types::*;
use serde::{Deserialize, Serialize};

/// Rolle eines Quellankers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorRole {
    F1,
    F2,
}

/// Quellanker (Lautsprecherposition)
///
/// Inaktive Anker sind von sämtlichen Constraint-Prüfungen ausgenommen,
/// reservieren aber auch keine Gitterzelle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub position: Point3,
    pub role: AnchorRole,
    pub active: bool,
}

impl Anchor {
    pub fn new(position: Point3, role: AnchorRole, active: bool) -> Self {
        Self {
            position,
            role,
            active,
        }
    }

    pub fn active(position: Point3, role: AnchorRole) -> Self {
        Self::new(position, role, true)
    }

    pub fn inactive(role: AnchorRole) -> Self {
        Self::new(Point3::new(0.0, 0.0, 0.0), role, false)
    }
}

/// Die beiden Quellanker F1 und F2
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPair {
    pub f1: Anchor,
    pub f2: Anchor,
}

impl AnchorPair {
    pub fn new(f1: Anchor, f2: Anchor) -> Self {
        Self { f1, f2 }
    }

    /// Nur F1 aktiv
    pub fn single(f1: Point3) -> Self {
        Self {
            f1: Anchor::active(f1, AnchorRole::F1),
            f2: Anchor::inactive(AnchorRole::F2),
        }
    }

    /// Beide Anker aktiv
    pub fn both(f1: Point3, f2: Point3) -> Self {
        Self {
            f1: Anchor::active(f1, AnchorRole::F1),
            f2: Anchor::active(f2, AnchorRole::F2),
        }
    }

    /// Keine aktiven Anker
    pub fn none() -> Self {
        Self {
            f1: Anchor::inactive(AnchorRole::F1),
            f2: Anchor::inactive(AnchorRole::F2),
        }
    }

    /// Positionen der aktiven Anker
    pub fn active_positions(&self) -> Vec<Point3> {
        [self.f1, self.f2]
            .iter()
            .filter(|a| a.active)
            .map(|a| a.position)
            .collect()
    }

    /// Achsweiser Anker-Anker-Abstand, jede Achse unabhängig geprüft
    ///
    /// Liefert `[x_ok, y_ok, z_ok]`; trivially erfüllt sobald einer der
    /// beiden Anker inaktiv ist. Dient der Diagnose — die Suche bricht
    /// bei Verstößen nicht ab.
    pub fn axis_gap_ok(&self, min_gap: f64) -> [bool; 3] {
        if !(self.f1.active && self.f2.active) {
            return [true, true, true];
        }

        let a = self.f1.position;
        let b = self.f2.position;
        [
            (a.x - b.x).abs() >= min_gap,
            (a.y - b.y).abs() >= min_gap,
            (a.z - b.z).abs() >= min_gap,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_anchor_excluded() {
        let pair = AnchorPair::single(Point3::new(0.5, 1.5, 1.8));
        assert_eq!(pair.active_positions().len(), 1);
        assert_eq!(AnchorPair::none().active_positions().len(), 0);
    }

    #[test]
    fn test_axis_gap_per_axis() {
        let pair = AnchorPair::both(
            Point3::new(0.5, 1.5, 1.8),
            Point3::new(2.5, 0.5, 1.7),
        );
        // x: 2.0 ok, y: 1.0 ok, z: 0.1 zu knapp
        assert_eq!(pair.axis_gap_ok(0.7), [true, true, false]);
    }

    #[test]
    fn test_axis_gap_trivial_when_single() {
        let pair = AnchorPair::single(Point3::new(0.5, 1.5, 1.8));
        assert_eq!(pair.axis_gap_ok(0.7), [true, true, true]);
    }
}
