// src/placement/refine.rs

use super::constraints::{anchor_distance_ok, point_distance_ok};
use super::grid::CandidateGrid;
use super::rules::PlacementRules;
use super::score::maximin_score;
use crate::types::*;
use log::debug;

/// Anzahl der Verbesserungsdurchläufe
const PASSES: usize = 2;

/// Lokale Nachbesserung einer gültigen Punktmenge
///
/// Je Durchlauf wird jeder Punkt einzeln gegen Alternativen derselben
/// Höhenebene getauscht, sofern die Alternative alle Regeln gegen die
/// übrigen vier Punkte und die Anker einhält und ihren Maximin-Score
/// strikt verbessert. Koordinatenabstieg, keine Neuoptimierung der
/// Gesamtmenge; Reihenfolge und Größe der Menge bleiben unverändert.
pub fn refine_placement(
    points: &mut [Point3],
    grid: &CandidateGrid,
    anchors: &[Point3],
    rules: &PlacementRules,
) {
    let mut swaps = 0usize;

    for _ in 0..PASSES {
        for i in 0..points.len() {
            if let Some(better) = improve_slot(points, i, grid, anchors, rules) {
                points[i] = better;
                swaps += 1;
            }
        }
    }

    if swaps > 0 {
        debug!("refine_placement - {swaps} points swapped for better spread");
    }
}

/// Sucht für Slot `i` eine strikt besser bewertete, regelkonforme
/// Alternative auf derselben Höhenebene
///
/// Die übrigen Punkte bleiben dabei fixiert; `None` heißt, der aktuelle
/// Punkt ist unter allen zulässigen Alternativen bereits der beste.
fn improve_slot(
    points: &[Point3],
    i: usize,
    grid: &CandidateGrid,
    anchors: &[Point3],
    rules: &PlacementRules,
) -> Option<Point3> {
    let current = points[i];
    let others: Vec<Point3> = points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .map(|(_, p)| *p)
        .collect();

    let mut best = current;
    let mut best_score = maximin_score(current, &others, anchors);

    for &idx in grid.level(current.key_z()) {
        let candidate = grid.points()[idx];
        if candidate == current {
            continue;
        }
        if collides_xy(candidate, &others, anchors) {
            continue;
        }
        if !anchor_distance_ok(candidate, anchors, rules.min_anchor_distance) {
            continue;
        }
        if !point_distance_ok(candidate, &others, rules.min_point_distance) {
            continue;
        }

        let score = maximin_score(candidate, &others, anchors);
        if score > best_score {
            best = candidate;
            best_score = score;
        }
    }

    (best != current).then_some(best)
}

/// Kollidiert der Kandidat auf X- oder Y-Schlüssel mit den übrigen
/// Punkten oder den aktiven Ankern?
fn collides_xy(candidate: Point3, others: &[Point3], anchors: &[Point3]) -> bool {
    others
        .iter()
        .chain(anchors.iter())
        .any(|p| p.key_x() == candidate.key_x() || p.key_y() == candidate.key_y())
}
