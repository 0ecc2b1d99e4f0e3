// src/placement/constraints.rs

use super::rules::PlacementRules;
use crate::geometry::Enclosure;
use crate::types::*;

/// Mindestabstand zu allen aktiven Ankern eingehalten?
pub fn anchor_distance_ok(point: Point3, anchors: &[Point3], min_distance: f64) -> bool {
    anchors
        .iter()
        .all(|a| point.distance_to(*a) >= min_distance)
}

/// Mindestabstand zu allen bereits gewählten Punkten eingehalten?
pub fn point_distance_ok(point: Point3, chosen: &[Point3], min_distance: f64) -> bool {
    chosen
        .iter()
        .all(|p| point.distance_to(*p) >= min_distance)
}

/// Punkt mit Randabstand im Raum?
pub fn margin_ok(point: Point3, enclosure: &Enclosure, margin: f64) -> bool {
    enclosure.contains_with_margin(point, margin)
}

/// Entlang des Suchpfads belegte Koordinatenschlüssel
///
/// Explizite Stapel mit Push beim Abstieg und Pop beim Backtracking,
/// statt Mengen an jedem Ast zu klonen. Anker belegen nur X und Y —
/// die Z-Eindeutigkeit gilt allein unter den Messpunkten.
#[derive(Debug, Clone, Default)]
pub struct UsedKeys {
    x: Vec<CoordKey>,
    y: Vec<CoordKey>,
    z: Vec<CoordKey>,
}

impl UsedKeys {
    /// Initialer Zustand: X-/Y-Schlüssel der aktiven Anker sind belegt
    pub fn from_anchors(anchors: &[Point3]) -> Self {
        Self {
            x: anchors.iter().map(Point3::key_x).collect(),
            y: anchors.iter().map(Point3::key_y).collect(),
            z: Vec::new(),
        }
    }

    /// Sind X- und Y-Schlüssel des Punktes noch frei?
    pub fn xy_free(&self, point: &Point3) -> bool {
        !self.x.contains(&point.key_x()) && !self.y.contains(&point.key_y())
    }

    /// Ist die Höhenebene noch frei?
    pub fn z_free(&self, key: CoordKey) -> bool {
        !self.z.contains(&key)
    }

    /// Belegt die Schlüssel eines gewählten Punktes
    pub fn push(&mut self, point: &Point3) {
        self.x.push(point.key_x());
        self.y.push(point.key_y());
        self.z.push(point.key_z());
    }

    /// Gibt die Schlüssel der letzten Wahl wieder frei
    pub fn pop(&mut self) {
        self.x.pop();
        self.y.pop();
        self.z.pop();
    }
}

/// Absteigende Filterstufen des Fallback-Degraders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterLevel {
    /// Alle Regeln
    Full,
    /// Ohne Punkt-Punkt-Abstand
    NoPointDistance,
    /// Nur Koordinaten-Eindeutigkeit
    KeysOnly,
    /// Keine Prüfung
    Anything,
}

impl FilterLevel {
    pub const DESCENDING: [FilterLevel; 4] = [
        FilterLevel::Full,
        FilterLevel::NoPointDistance,
        FilterLevel::KeysOnly,
        FilterLevel::Anything,
    ];

    /// Besteht der Kandidat diese Filterstufe?
    pub fn passes(
        &self,
        point: Point3,
        used: &UsedKeys,
        anchors: &[Point3],
        chosen: &[Point3],
        rules: &PlacementRules,
    ) -> bool {
        match self {
            FilterLevel::Full => {
                used.xy_free(&point)
                    && used.z_free(point.key_z())
                    && anchor_distance_ok(point, anchors, rules.min_anchor_distance)
                    && point_distance_ok(point, chosen, rules.min_point_distance)
            }
            FilterLevel::NoPointDistance => {
                used.xy_free(&point)
                    && used.z_free(point.key_z())
                    && anchor_distance_ok(point, anchors, rules.min_anchor_distance)
            }
            FilterLevel::KeysOnly => used.xy_free(&point) && used.z_free(point.key_z()),
            FilterLevel::Anything => true,
        }
    }
}

/// Verletzte Regeln einer Punktmenge, strukturiert für den Aufrufer
#[derive(Debug, Clone, PartialEq)]
pub enum RuleViolation {
    /// Punkt `index` verletzt den Randabstand
    Margin { index: usize },
    /// Punkte bzw. Anker teilen sich einen Koordinatenschlüssel
    DuplicateKey { axis: char, key: CoordKey },
    /// Punkt `index` liegt zu nah an einem aktiven Anker
    AnchorDistance { index: usize, distance: f64 },
    /// Zwei Messpunkte liegen zu nah beieinander
    PointDistance { a: usize, b: usize, distance: f64 },
}

/// Prüft eine fertige Punktmenge gegen das komplette Regelwerk
///
/// Liefert alle Verstöße; leer genau dann, wenn die Menge gültig ist.
/// Die sprachliche Aufbereitung für die Anzeige obliegt dem Aufrufer.
pub fn check_placement(
    points: &[Point3],
    anchors: &[Point3],
    enclosure: &Enclosure,
    rules: &PlacementRules,
) -> Vec<RuleViolation> {
    let mut violations = Vec::new();

    for (i, point) in points.iter().enumerate() {
        if !margin_ok(*point, enclosure, rules.margin) {
            violations.push(RuleViolation::Margin { index: i });
        }
        for anchor in anchors {
            let distance = point.distance_to(*anchor);
            if distance < rules.min_anchor_distance {
                violations.push(RuleViolation::AnchorDistance { index: i, distance });
            }
        }
    }

    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let distance = points[i].distance_to(points[j]);
            if distance < rules.min_point_distance {
                violations.push(RuleViolation::PointDistance {
                    a: i,
                    b: j,
                    distance,
                });
            }
        }
    }

    // X/Y-Eindeutigkeit über Punkte und aktive Anker, Z nur über Punkte
    let xy_pool: Vec<Point3> = points.iter().chain(anchors.iter()).copied().collect();
    for axis in ['x', 'y'] {
        duplicate_keys(&xy_pool, axis, &mut violations);
    }
    duplicate_keys(points, 'z', &mut violations);

    violations
}

fn duplicate_keys(points: &[Point3], axis: char, violations: &mut Vec<RuleViolation>) {
    let mut seen: Vec<CoordKey> = Vec::new();
    for point in points {
        let key = match axis {
            'x' => point.key_x(),
            'y' => point.key_y(),
            _ => point.key_z(),
        };
        if seen.contains(&key) {
            if !violations.contains(&RuleViolation::DuplicateKey { axis, key }) {
                violations.push(RuleViolation::DuplicateKey { axis, key });
            }
        } else {
            seen.push(key);
        }
    }
}
