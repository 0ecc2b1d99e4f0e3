// src/placement/search.rs

use super::anchor::AnchorPair;
use super::constraints::{UsedKeys, anchor_distance_ok, point_distance_ok};
use super::fallback;
use super::grid::CandidateGrid;
use super::refine;
use super::rules::PlacementRules;
use super::score::maximin_score_jittered;
use crate::probability::{Mulberry32, SeedSource};
use crate::types::*;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Höhenebenen, die je Slot höchstens probiert werden
const Z_PREFS_PER_SLOT: usize = 18;
/// Bestbewertete Kandidaten, in die je Ebene abgestiegen wird
const RANKED_PER_LEVEL: usize = 22;
/// Kapazität des Lösungspools
const POOL_CAPACITY: usize = 20;
/// Globales Knotenbudget; garantiert die Terminierung der Suche
const NODE_BUDGET: u32 = 60_000;
/// Rauschen bei der Sortierung der Höhenebenen
const ORDER_JITTER: f64 = 1e-3;

/// Ergebnis eines Generierungslaufs
///
/// `feasible = true` garantiert, dass sämtliche Abstands- und
/// Eindeutigkeitsregeln exakt eingehalten sind. `feasible = false`
/// kennzeichnet ein bestmögliches, möglicherweise regelverletzendes
/// Ergebnis des Fallback-Degraders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub points: Vec<Point3>,
    pub feasible: bool,
}

impl Placement {
    pub fn infeasible_empty() -> Self {
        Self {
            points: Vec::new(),
            feasible: false,
        }
    }
}

/// Beschränkte Backtracking-Suche über dem Kandidatengitter
///
/// Ein Engine-Wert bündelt Gitter, Anker und Regelwerk für beliebig
/// viele Generierungsläufe; der veränderliche Suchzustand lebt je Lauf
/// in einem eigenen [`SearchState`] und wird explizit durchgereicht.
pub struct PlacementEngine<'a> {
    grid: &'a CandidateGrid,
    anchors: AnchorPair,
    rules: &'a PlacementRules,
    nodes: u32,
}

/// Veränderlicher Zustand eines einzelnen Suchlaufs
struct SearchState {
    rng: Mulberry32,
    used: UsedKeys,
    chosen: Vec<Point3>,
    pool: Vec<Vec<Point3>>,
    nodes: u32,
}

impl<'a> PlacementEngine<'a> {
    pub fn new(grid: &'a CandidateGrid, anchors: AnchorPair, rules: &'a PlacementRules) -> Self {
        Self {
            grid,
            anchors,
            rules,
            nodes: 0,
        }
    }

    /// Expandierte Suchknoten des letzten Laufs
    pub fn nodes_expanded(&self) -> u32 {
        self.nodes
    }

    /// Erzeugt eine Punktmenge
    ///
    /// Mit `seed` ist das Ergebnis über Läufe hinweg bitidentisch;
    /// ohne Seed rotiert `call_counter` sowohl die Startäste der Suche
    /// als auch die Auswahl aus dem Lösungspool, damit wiederholtes
    /// Generieren sichtbar unterschiedliche Ergebnisse liefert.
    pub fn generate(&mut self, seed: Option<&str>, call_counter: u32) -> Placement {
        if self.grid.is_empty() {
            info!("PlacementEngine::generate - empty candidate grid, nothing to place");
            return Placement::infeasible_empty();
        }

        let source = match seed {
            Some(text) => SeedSource::from_text(text),
            None => SeedSource::from_clock(call_counter),
        };
        let anchor_positions = self.anchors.active_positions();

        let mut state = SearchState {
            rng: source.rng(),
            used: UsedKeys::from_anchors(&anchor_positions),
            chosen: Vec::with_capacity(self.rules.point_count()),
            pool: Vec::new(),
            nodes: 0,
        };

        let z_orders = self.z_preference_orders(&mut state.rng, source.is_deterministic());
        self.select(&mut state, &z_orders, &anchor_positions, 0);
        self.nodes = state.nodes;

        debug!(
            "PlacementEngine::generate - {} solutions, {} nodes expanded",
            state.pool.len(),
            state.nodes
        );

        if state.pool.is_empty() {
            warn!("PlacementEngine::generate - no valid configuration, degrading");
            return fallback::degrade(self.grid, &anchor_positions, self.rules, &mut state.rng);
        }

        let index = if source.is_deterministic() {
            0
        } else {
            call_counter as usize % state.pool.len()
        };
        let mut points = std::mem::take(&mut state.pool[index]);
        refine::refine_placement(&mut points, self.grid, &anchor_positions, self.rules);

        info!(
            "PlacementEngine::generate - solution {}/{} selected",
            index + 1,
            state.pool.len()
        );
        Placement {
            points,
            feasible: true,
        }
    }

    /// Bevorzugte Reihenfolge der Höhenebenen, eine Liste je Slot
    ///
    /// Ebenen werden nach `|Ebene - Zielhöhe|` plus winzigem Rauschen
    /// sortiert; ungeseedet wird zusätzlich zyklisch rotiert, damit die
    /// Suche nicht immer im selben Ast beginnt.
    fn z_preference_orders(&self, rng: &mut Mulberry32, deterministic: bool) -> Vec<Vec<f64>> {
        self.rules
            .target_heights
            .iter()
            .map(|&target| {
                let mut scored: Vec<(f64, f64)> = self
                    .grid
                    .z_levels()
                    .iter()
                    .map(|&level| ((level - target).abs() + rng.next_f64() * ORDER_JITTER, level))
                    .collect();
                scored.sort_by(|a, b| a.0.total_cmp(&b.0));

                let mut order: Vec<f64> = scored.into_iter().map(|(_, level)| level).collect();
                if !deterministic && order.len() > 1 {
                    let offset = rng.next_index(order.len());
                    order.rotate_left(offset);
                }
                order
            })
            .collect()
    }

    /// Ein Suchknoten: wählt den Punkt für `slot`
    ///
    /// Rückgabe `true` beendet die Suche (Pool voll oder Budget
    /// aufgebraucht) und propagiert nach oben.
    fn select(
        &self,
        state: &mut SearchState,
        z_orders: &[Vec<f64>],
        anchors: &[Point3],
        slot: usize,
    ) -> bool {
        state.nodes += 1;
        if state.nodes > NODE_BUDGET {
            return true;
        }

        if slot == self.rules.point_count() {
            state.pool.push(state.chosen.clone());
            return state.pool.len() >= POOL_CAPACITY;
        }

        for &level in z_orders[slot].iter().take(Z_PREFS_PER_SLOT) {
            let key = coord_key(level);
            if !state.used.z_free(key) {
                continue;
            }

            let mut ranked: Vec<(f64, Point3)> = Vec::new();
            for &idx in self.grid.level(key) {
                let candidate = self.grid.points()[idx];
                if !state.used.xy_free(&candidate) {
                    continue;
                }
                if !anchor_distance_ok(candidate, anchors, self.rules.min_anchor_distance) {
                    continue;
                }
                if !point_distance_ok(candidate, &state.chosen, self.rules.min_point_distance) {
                    continue;
                }
                let score =
                    maximin_score_jittered(candidate, &state.chosen, anchors, &mut state.rng);
                ranked.push((score, candidate));
            }

            ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
            ranked.truncate(RANKED_PER_LEVEL);

            for (_, candidate) in ranked {
                state.used.push(&candidate);
                state.chosen.push(candidate);
                let done = self.select(state, z_orders, anchors, slot + 1);
                state.chosen.pop();
                state.used.pop();
                if done {
                    return true;
                }
            }
        }

        false
    }
}
