// src/placement/rules.rs

use crate::error::*;
use serde::{Deserialize, Serialize};

/// Regelwerk für die Punktplatzierung
///
/// Die Standardwerte entsprechen den üblichen messtechnischen Vorgaben:
/// 0.5 m Abstand zu allen Raumflächen, 0.7 m zwischen Messpunkten,
/// 1.0 m zwischen Quelle und Messpunkt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementRules {
    /// Sicherheitsabstand zu Wänden, Boden und Decke (m)
    pub margin: f64,
    /// Rasterschritt des Kandidatengitters (m)
    pub step: f64,
    /// Mindestabstand zwischen zwei Messpunkten, 3D (m)
    pub min_point_distance: f64,
    /// Mindestabstand Quellanker zu Messpunkt, 3D (m)
    pub min_anchor_distance: f64,
    /// Achsweiser Mindestabstand der beiden Anker zueinander (m)
    pub min_anchor_axis_gap: f64,
    /// Bevorzugte Messhöhen, eine je Punkt-Slot (m)
    pub target_heights: Vec<f64>,
}

impl Default for PlacementRules {
    fn default() -> Self {
        Self {
            margin: 0.5,
            step: 0.1,
            min_point_distance: 0.7,
            min_anchor_distance: 1.0,
            min_anchor_axis_gap: 0.7,
            target_heights: vec![1.0, 1.1, 1.2, 1.3, 1.4],
        }
    }
}

impl PlacementRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_point_distance(mut self, distance: f64) -> Self {
        self.min_point_distance = distance;
        self
    }

    pub fn with_anchor_distance(mut self, distance: f64) -> Self {
        self.min_anchor_distance = distance;
        self
    }

    pub fn with_target_heights(mut self, heights: Vec<f64>) -> Self {
        self.target_heights = heights;
        self
    }

    /// Anzahl der zu platzierenden Punkte (ein Slot je Zielhöhe)
    pub fn point_count(&self) -> usize {
        self.target_heights.len()
    }

    pub fn validate(&self) -> PlacementResult<()> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(PlacementError::InvalidConfiguration {
                message: format!("step must be positive, got {}", self.step),
            });
        }
        if self.margin < 0.0
            || self.min_point_distance < 0.0
            || self.min_anchor_distance < 0.0
            || self.min_anchor_axis_gap < 0.0
        {
            return Err(PlacementError::InvalidConfiguration {
                message: "margins and minimum distances must be non-negative".to_string(),
            });
        }
        if self.target_heights.is_empty() {
            return Err(PlacementError::InvalidConfiguration {
                message: "at least one target height is required".to_string(),
            });
        }
        Ok(())
    }
}
