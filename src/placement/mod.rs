// src/placement/mod.rs
pub mod anchor;
pub mod constraints;
pub mod fallback;
pub mod grid;
pub mod refine;
pub mod rules;
pub mod score;
pub mod search;

pub use anchor::{Anchor, AnchorPair, AnchorRole};
pub use grid::CandidateGrid;
pub use rules::PlacementRules;
pub use search::{Placement, PlacementEngine};
