// src/lib.rs

//! Platzierung von Messpunkten in einem Raumvolumen.
//!
//! Der Kern ist eine beschränkte Backtracking-Suche über einem
//! Kandidatengitter: fünf Messpunkte werden so gesetzt, dass
//! Randabstände zum Raumpolygon, 3D-Mindestabstände zu den beiden
//! Quellankern F1/F2 und untereinander sowie die Eindeutigkeit der auf
//! 0.1 m gerundeten Koordinaten eingehalten sind. Findet die Suche
//! keine gültige Konfiguration, liefert ein Fallback-Degrader ein
//! bestmögliches Ergebnis mit `feasible = false`.

pub mod error;
pub mod geometry;
pub mod placement;
pub mod probability;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{PlacementError, PlacementResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{PlacementError, PlacementResult},
        geometry::{Enclosure, Polygon, PolygonProperties},
        placement::{
            Anchor, AnchorPair, AnchorRole, CandidateGrid, Placement, PlacementEngine,
            PlacementRules, constraints::RuleViolation, constraints::check_placement,
        },
        probability::{Mulberry32, SeedSource},
        types::*,
    };
}
