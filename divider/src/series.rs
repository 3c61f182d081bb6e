//! Standard E-series resistor values.
//!
//! Every table holds the normalized mantissas of one decade, i.e. values in
//! `[1, 10)`. Decade exponents are applied by the resolver, never stored here.

use serde::Serialize;

use crate::core::DividerError;

/// A named series of preferred values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Series {
    pub name: &'static str,
    pub values: &'static [f64],
}

impl Series {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub const E3: Series = Series {
    name: "E3",
    values: &[1.0, 2.2, 4.7],
};

pub const E6: Series = Series {
    name: "E6",
    values: &[1.0, 1.5, 2.2, 3.3, 4.7, 6.8],
};

pub const E12: Series = Series {
    name: "E12",
    values: &[1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2],
};

pub const E24: Series = Series {
    name: "E24",
    values: &[
        1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1,
        5.6, 6.2, 6.8, 7.5, 8.2, 9.1,
    ],
};

pub const E48: Series = Series {
    name: "E48",
    values: &[
        1.00, 1.05, 1.10, 1.15, 1.21, 1.27, 1.33, 1.40, 1.47, 1.54, 1.62, 1.69, 1.78, 1.87, 1.96,
        2.05, 2.15, 2.26, 2.37, 2.49, 2.61, 2.74, 2.87, 3.01, 3.16, 3.32, 3.48, 3.65, 3.83, 4.02,
        4.22, 4.42, 4.64, 4.87, 5.11, 5.36, 5.62, 5.90, 6.19, 6.49, 6.81, 7.15, 7.50, 7.87, 8.25,
        8.66, 9.09, 9.53,
    ],
};

pub const E96: Series = Series {
    name: "E96",
    values: &[
        1.00, 1.02, 1.05, 1.07, 1.10, 1.13, 1.15, 1.18, 1.21, 1.24, 1.27, 1.30, 1.33, 1.37, 1.40,
        1.43, 1.47, 1.50, 1.54, 1.58, 1.62, 1.65, 1.69, 1.74, 1.78, 1.82, 1.87, 1.91, 1.96, 2.00,
        2.05, 2.10, 2.15, 2.21, 2.26, 2.32, 2.37, 2.43, 2.49, 2.55, 2.61, 2.67, 2.74, 2.80, 2.87,
        2.94, 3.01, 3.09, 3.16, 3.24, 3.32, 3.40, 3.48, 3.57, 3.65, 3.74, 3.83, 3.92, 4.02, 4.12,
        4.22, 4.32, 4.42, 4.53, 4.64, 4.75, 4.87, 4.99, 5.11, 5.23, 5.36, 5.49, 5.62, 5.76, 5.90,
        6.04, 6.19, 6.34, 6.49, 6.65, 6.81, 6.98, 7.15, 7.32, 7.50, 7.68, 7.87, 8.06, 8.25, 8.45,
        8.66, 8.87, 9.09, 9.31, 9.53, 9.76,
    ],
};

static CATALOG: [&Series; 6] = [&E3, &E6, &E12, &E24, &E48, &E96];

/// Name of the series used when none is requested.
pub const DEFAULT_SERIES: &str = "E12";

/// All known series, sparsest first.
pub fn all() -> &'static [&'static Series] {
    &CATALOG
}

/// Look up a series by name (case-insensitive).
pub fn lookup(name: &str) -> Result<&'static Series, DividerError> {
    CATALOG
        .iter()
        .copied()
        .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| DividerError::UnknownSeries(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_sizes() {
        assert_eq!(E3.len(), 3);
        assert_eq!(E6.len(), 6);
        assert_eq!(E12.len(), 12);
        assert_eq!(E24.len(), 24);
        assert_eq!(E48.len(), 48);
        assert_eq!(E96.len(), 96);
    }

    #[test]
    fn test_mantissas_are_normalized_and_ascending() {
        for series in all() {
            for v in series.values {
                assert!((1.0..10.0).contains(v), "{} has {} outside [1, 10)", series.name, v);
            }
            assert!(
                series.values.windows(2).all(|w| w[0] < w[1]),
                "{} is not strictly ascending",
                series.name
            );
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("E24").unwrap().name, "E24");
        assert_eq!(lookup("e12").unwrap().name, "E12");
        assert_eq!(lookup(DEFAULT_SERIES).unwrap(), &E12);
    }

    #[test]
    fn test_lookup_unknown() {
        match lookup("E7") {
            Err(DividerError::UnknownSeries(name)) => assert_eq!(name, "E7"),
            other => panic!("Expected UnknownSeries, got {:?}", other),
        }
    }
}
