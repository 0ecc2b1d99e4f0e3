// src/placement/score.rs

use crate::probability::Mulberry32;
use crate::types::*;

/// Ersatzdistanz wenn ein Beitrag fehlt (keine Anker bzw. keine
/// gewählten Punkte). Endlich statt unendlich, damit die Rangfolge
/// definiert bleibt und keine NaN entstehen.
const FAR: f64 = 1.0e6;

/// Obergrenze des Zufallsrauschens beim Ranking während der Suche
pub const SCORE_JITTER: f64 = 0.05;

/// Maximin-Bewertung eines Kandidaten
///
/// `score = 10·min(d_b, d_r) + 2·d_b + d_r`, wobei `d_b` der minimale
/// Abstand zu den bereits gewählten Punkten ist (bzw. zur vereinigten
/// Anker+Punkt-Menge, solange noch nichts gewählt wurde) und `d_r` der
/// minimale Abstand zu den aktiven Ankern. Der dominante Minimum-Term
/// belohnt die Entlastung der gerade engsten Abstandsregel, die
/// Nebenterme eine insgesamt weite Streuung.
pub fn maximin_score(candidate: Point3, chosen: &[Point3], anchors: &[Point3]) -> f64 {
    let d_r = min_distance(candidate, anchors).unwrap_or(FAR);

    let d_b = if chosen.is_empty() {
        min_distance(candidate, anchors).unwrap_or(FAR)
    } else {
        min_distance(candidate, chosen).unwrap_or(FAR)
    };

    10.0 * d_b.min(d_r) + 2.0 * d_b + d_r
}

/// Maximin-Bewertung plus kleines Rauschen zum Aufbrechen exakter
/// Gleichstände im Suchranking
pub fn maximin_score_jittered(
    candidate: Point3,
    chosen: &[Point3],
    anchors: &[Point3],
    rng: &mut Mulberry32,
) -> f64 {
    maximin_score(candidate, chosen, anchors) + rng.next_f64() * SCORE_JITTER
}

fn min_distance(point: Point3, others: &[Point3]) -> Option<f64> {
    others
        .iter()
        .map(|o| point.distance_to(*o))
        .min_by(|a, b| a.total_cmp(b))
}
