//! Resistor values and the closest-value resolver.

use std::fmt;

use serde::Serialize;

use crate::core::DividerError;
use crate::series::Series;
use crate::units;

/// A resistor expressed as a series mantissa scaled by a power of ten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resistor {
    pub mantissa: f64,
    pub exponent: i32,
}

impl Resistor {
    pub fn new(mantissa: f64, exponent: i32) -> Self {
        Self { mantissa, exponent }
    }

    /// Resistance in ohms.
    pub fn value(&self) -> f64 {
        self.mantissa * 10f64.powi(self.exponent)
    }
}

impl fmt::Display for Resistor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&units::format_resistor(self))
    }
}

/// Find the series value closest to `target` in relative terms.
///
/// Mantissas are evaluated in the decade of `target` as well as the decades
/// directly below and above it, so that e.g. 9.99 can resolve to 10 rather
/// than being stuck with 8.2. Exponents are scanned outer and mantissas inner,
/// both ascending; on a tie the first candidate wins.
pub fn find_closest(target: f64, series: &Series) -> Result<Resistor, DividerError> {
    if !target.is_finite() {
        return Err(DividerError::Domain(format!(
            "cannot resolve non-finite magnitude {}",
            target
        )));
    }
    if target <= 0.0 {
        return Err(DividerError::Domain(format!(
            "cannot resolve non-positive magnitude {}",
            target
        )));
    }
    if series.is_empty() {
        return Err(DividerError::Domain(format!(
            "series {} has no values",
            series.name
        )));
    }

    let base_exponent = target.log10().floor() as i32;
    let mut best: Option<(Resistor, f64)> = None;

    for exponent in (base_exponent - 1)..=(base_exponent + 1) {
        for &mantissa in series.values {
            let candidate = Resistor::new(mantissa, exponent);
            let error = relative_error(target, candidate.value());
            match best {
                Some((_, best_error)) if error >= best_error => {}
                _ => best = Some((candidate, error)),
            }
        }
    }

    best.map(|(resistor, _)| resistor).ok_or_else(|| {
        DividerError::Domain(format!("no candidate found for {}", target))
    })
}

fn relative_error(target: f64, value: f64) -> f64 {
    (target - value).abs() / target
}
