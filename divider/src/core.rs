//! Core divider search shared by the CLI and library users.
//! Validates input, then enumerates and ranks candidates.

use crate::configuration::RatioType;
use crate::search::{enumerate, rank_by, DividerResult, SortKey};
use crate::series::{self, DEFAULT_SERIES};

#[derive(Debug, thiserror::Error)]
pub enum DividerError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Series '{0}' doesn't exist")]
    UnknownSeries(String),
    #[error("Domain error: {0}")]
    Domain(String),
}

impl DividerError {
    /// Errors caused by the caller's input rather than by the computation.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DividerError::InvalidInput(_) | DividerError::UnknownSeries(_)
        )
    }
}

/// What the divider should achieve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Target {
    /// Input and output voltage of a voltage divider.
    Voltage { v_in: f64, v_out: f64 },
    /// Direct resistor ratio `R1 / R2`.
    Resistor { ratio: f64 },
}

impl Target {
    /// Check the target and return the desired ratio with its interpretation.
    pub fn validate(&self) -> Result<(f64, RatioType), DividerError> {
        match *self {
            Target::Voltage { v_in, v_out } => {
                if !v_in.is_finite() || !v_out.is_finite() {
                    return Err(invalid("Voltages must be finite numbers"));
                }
                if v_in <= 0.0 {
                    return Err(invalid("v_in must be positive"));
                }
                if v_out < 0.0 {
                    return Err(invalid("Voltage ratio can not be negative"));
                }
                if v_out > v_in {
                    return Err(invalid("v_out can't be larger than v_in"));
                }
                let ratio = v_out / v_in;
                if ratio == 0.0 || ratio == 1.0 {
                    return Err(invalid(
                        "Voltage ratio must lie strictly between 0 and 1 for a divider",
                    ));
                }
                // R1 / R2 of the divider
                check_representable(ratio, (1.0 - ratio) / ratio)?;
                Ok((ratio, RatioType::Voltage))
            }
            Target::Resistor { ratio } => {
                if !ratio.is_finite() {
                    return Err(invalid("Resistor ratio must be a finite number"));
                }
                if ratio < 0.0 {
                    return Err(invalid("Resistor ratio can not be negative"));
                }
                if ratio == 0.0 {
                    return Err(invalid("Resistor ratio must be positive"));
                }
                check_representable(ratio, ratio)?;
                Ok((ratio, RatioType::Resistor))
            }
        }
    }
}

fn invalid(message: &str) -> DividerError {
    DividerError::InvalidInput(message.to_string())
}

/// Partners of anchors in `[1, 10)` lie within `[r1_over_r2, 10 * r1_over_r2)`
/// and `(1 / r1_over_r2, 10 / r1_over_r2]`; all of them must be finite and
/// non-zero for the resolver to work on them.
fn check_representable(ratio: f64, r1_over_r2: f64) -> Result<(), DividerError> {
    let bounds = [
        r1_over_r2,
        10.0 * r1_over_r2,
        1.0 / r1_over_r2,
        10.0 / r1_over_r2,
    ];
    if bounds.iter().all(|b| b.is_finite() && *b > 0.0) {
        Ok(())
    } else {
        Err(DividerError::InvalidInput(format!(
            "Ratio {} is too extreme to realize with standard resistor values",
            ratio
        )))
    }
}

/// Options for a search run (CLI or library).
#[derive(Clone, Debug)]
pub struct DividerOptions {
    pub series: String,
    pub num_results: usize,
    pub sort_key: SortKey,
}

impl Default for DividerOptions {
    fn default() -> Self {
        Self {
            series: DEFAULT_SERIES.to_string(),
            num_results: 1,
            sort_key: SortKey::Relative,
        }
    }
}

/// Core search API used by the CLI.
pub struct DividerCore;

impl DividerCore {
    /// Find the best resistor pairs for `target`.
    ///
    /// Input is fully validated before any candidate is built, so an error
    /// never comes with partial results.
    pub fn solve(
        target: Target,
        options: DividerOptions,
    ) -> Result<DividerResult, DividerError> {
        let (desired_ratio, ratio_type) = target.validate()?;
        let series = series::lookup(&options.series)?;

        tracing::debug!(
            "Searching {} for {} = {} ({} results, {:?} error)",
            series.name,
            ratio_type.label(),
            desired_ratio,
            options.num_results,
            options.sort_key
        );

        let configs = enumerate(series, desired_ratio, ratio_type)?;
        let result = rank_by(
            configs,
            desired_ratio,
            ratio_type,
            series.name,
            options.num_results,
            options.sort_key,
        );

        if let Some(best) = result.best() {
            tracing::debug!("Best match: {}", best);
        }
        Ok(result)
    }
}
