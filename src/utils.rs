// src/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f64 = 1e-9;
    /// Toleranz für die inklusiven Obergrenzen beim Gitteraufbau.
    /// Größer als EPSILON, da sich beim Abschreiten des Rasters
    /// Rundungsfehler in der Größenordnung des Schritts ansammeln.
    pub const GRID_EPSILON: f64 = 1e-6;
    /// Skalierung für Koordinatenschlüssel (0.1 m Auflösung).
    pub const KEY_SCALE: f64 = 10.0;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f64) -> bool {
        a.abs() < EPSILON
    }

    /// `a <= b` mit Toleranz (für inklusive Obergrenzen)
    pub fn less_or_equal_eps(a: f64, b: f64, epsilon: f64) -> bool {
        a <= b + epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::comparison::*;

    #[test]
    fn test_nearly_equal() {
        assert!(nearly_equal(0.1 + 0.2, 0.3));
        assert!(!nearly_equal(0.1, 0.2));
    }

    #[test]
    fn test_less_or_equal_eps() {
        assert!(less_or_equal_eps(2.5000000001, 2.5, 1e-6));
        assert!(!less_or_equal_eps(2.6, 2.5, 1e-6));
    }
}
