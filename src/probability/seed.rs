// src/probability/seed.rs

use super::prng::Mulberry32;
use std::time::{SystemTime, UNIX_EPOCH};

/// Herkunft des Suchseeds
///
/// Ein Textseed macht die Suche vollständig reproduzierbar; ohne Seed
/// wird die Wanduhr mit dem Aufrufzähler verknüpft, damit wiederholtes
/// "Neu generieren" unterschiedliche Äste der Suche erkundet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSource {
    seed: u32,
    deterministic: bool,
}

impl SeedSource {
    /// Seed aus Text: Summe der Zeichencodes (wrapping)
    pub fn from_text<S: AsRef<str>>(text: S) -> Self {
        let seed = text
            .as_ref()
            .chars()
            .fold(0u32, |acc, c| acc.wrapping_add(c as u32));
        Self {
            seed,
            deterministic: true,
        }
    }

    /// Expliziter numerischer Seed (deterministisch)
    pub fn from_seed(seed: u32) -> Self {
        Self {
            seed,
            deterministic: true,
        }
    }

    /// Ungeseedet: Wanduhr XOR Aufrufzähler
    pub fn from_clock(call_counter: u32) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u32)
            .unwrap_or_else(|_| rand::random::<u32>());
        Self {
            seed: millis ^ call_counter,
            deterministic: false,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Wurde der Seed explizit vorgegeben?
    pub fn is_deterministic(&self) -> bool {
        self.deterministic
    }

    pub fn rng(&self) -> Mulberry32 {
        Mulberry32::new(self.seed)
    }
}
