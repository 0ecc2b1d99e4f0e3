// src/placement/fallback.rs

use super::constraints::{FilterLevel, UsedKeys};
use super::grid::CandidateGrid;
use super::rules::PlacementRules;
use super::score::maximin_score;
use super::search::Placement;
use crate::probability::Mulberry32;
use crate::types::*;
use log::warn;

/// Aus wie vielen Bestbewerteten je Slot zufällig gewählt wird
const PICK_POOL: usize = 20;

/// Notlösung wenn die Suche keine gültige Konfiguration findet
///
/// Füllt die Slots gierig aus einer deterministisch gemischten
/// Kandidatenliste und lockert die Regeln je Slot stufenweise, bis
/// irgendetwas passt. Das Ergebnis trägt `feasible = false`; welche
/// Regeln konkret verletzt bleiben, ermittelt der Aufrufer selbst.
pub fn degrade(
    grid: &CandidateGrid,
    anchors: &[Point3],
    rules: &PlacementRules,
    rng: &mut Mulberry32,
) -> Placement {
    let mut order: Vec<usize> = (0..grid.len()).collect();
    rng.shuffle(&mut order);

    let slots = rules.point_count();
    let mut chosen: Vec<Point3> = Vec::with_capacity(slots);
    let mut used = UsedKeys::from_anchors(anchors);

    for _ in 0..slots {
        let Some(pick) = pick_for_slot(grid, &order, &used, anchors, &chosen, rules, rng) else {
            break;
        };
        used.push(&pick);
        chosen.push(pick);
    }

    // Restplätze mit Zufallskandidaten auffüllen (Duplikate erlaubt)
    while chosen.len() < slots && !grid.is_empty() {
        let idx = rng.next_index(grid.len());
        chosen.push(grid.points()[idx]);
    }

    warn!(
        "fallback::degrade - returning degraded placement with {} points",
        chosen.len()
    );
    Placement {
        points: chosen,
        feasible: false,
    }
}

/// Erste Filterstufe mit Treffern entscheidet: Top-Kandidaten nach
/// Maximin-Score ranken, daraus gleichverteilt einen ziehen
fn pick_for_slot(
    grid: &CandidateGrid,
    order: &[usize],
    used: &UsedKeys,
    anchors: &[Point3],
    chosen: &[Point3],
    rules: &PlacementRules,
    rng: &mut Mulberry32,
) -> Option<Point3> {
    for level in FilterLevel::DESCENDING {
        let mut matches: Vec<(f64, Point3)> = order
            .iter()
            .map(|&idx| grid.points()[idx])
            .filter(|&p| level.passes(p, used, anchors, chosen, rules))
            .map(|p| (maximin_score(p, chosen, anchors), p))
            .collect();

        if matches.is_empty() {
            continue;
        }

        matches.sort_by(|a, b| b.0.total_cmp(&a.0));
        matches.truncate(PICK_POOL);
        return Some(matches[rng.next_index(matches.len())].1);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Enclosure, Polygon};

    fn cramped_grid() -> CandidateGrid {
        // 1 x 1 m Grundriss: eine einzige XY-Zelle, drei Höhenebenen
        let polygon = Polygon::closed(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(0.0, 1.0),
        ])
        .unwrap();
        let room = Enclosure::new(polygon, 1.2).unwrap();
        CandidateGrid::build(&room, &PlacementRules::default()).unwrap()
    }

    #[test]
    fn test_always_five_points_when_candidates_exist() {
        let grid = cramped_grid();
        assert_eq!(grid.len(), 3);

        let rules = PlacementRules::default();
        let mut rng = Mulberry32::new(294);
        let placement = degrade(&grid, &[], &rules, &mut rng);

        assert!(!placement.feasible);
        assert_eq!(placement.points.len(), 5);
    }

    #[test]
    fn test_deterministic_for_same_rng_seed() {
        let grid = cramped_grid();
        let rules = PlacementRules::default();
        let anchors = [Point3::new(0.5, 0.5, 0.5)];

        let a = degrade(&grid, &anchors, &rules, &mut Mulberry32::new(7));
        let b = degrade(&grid, &anchors, &rules, &mut Mulberry32::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_prefers_stricter_levels_when_possible() {
        // Großer Raum: die ersten Slots kommen ohne Regel-Lockerung aus,
        // das Ergebnis erfüllt dort alle Abstände untereinander.
        let polygon = Polygon::closed(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(6.0, 0.0),
            Point2D::new(6.0, 5.0),
            Point2D::new(0.0, 5.0),
        ])
        .unwrap();
        let room = Enclosure::new(polygon, 3.0).unwrap();
        let rules = PlacementRules::default();
        let grid = CandidateGrid::build(&room, &rules).unwrap();

        let mut rng = Mulberry32::new(42);
        let placement = degrade(&grid, &[], &rules, &mut rng);

        assert_eq!(placement.points.len(), 5);
        for i in 0..placement.points.len() {
            for j in (i + 1)..placement.points.len() {
                assert!(
                    placement.points[i].distance_to(placement.points[j])
                        >= rules.min_point_distance
                );
            }
        }
    }
}
