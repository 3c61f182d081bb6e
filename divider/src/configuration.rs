//! Divider configurations: one anchored resistor plus the best-matching partner.
//!
//! ```text
//!         R1           R2
//!     --[======]-----[======]--
//!     |            |            |
//!   V_in         V_out         GND
//! ```
//!
//! For a voltage divider `V_out / V_in = R2 / (R1 + R2)`, for a resistor
//! ratio the target is `R1 / R2` directly.

use std::fmt;

use serde::Serialize;

use crate::core::DividerError;
use crate::resistor::{find_closest, Resistor};
use crate::series::Series;

/// How the desired ratio is to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RatioType {
    /// `V_out / V_in = R2 / (R1 + R2)`
    Voltage,
    /// `R1 / R2`
    Resistor,
}

impl RatioType {
    /// Ratio produced by the given resistor values.
    pub fn ratio(&self, val1: f64, val2: f64) -> f64 {
        match self {
            RatioType::Voltage => val2 / (val1 + val2),
            RatioType::Resistor => val1 / val2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatioType::Voltage => "V_out / V_in",
            RatioType::Resistor => "R1 / R2",
        }
    }
}

/// The resistor that is given when building a configuration. The other one is
/// always derived from the series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    R1(Resistor),
    R2(Resistor),
}

/// A fully determined pair of resistors and how well it meets the target.
#[derive(Debug, Clone, Serialize)]
pub struct Configuration {
    pub res1: Resistor,
    pub res2: Resistor,
    pub desired_ratio: f64,
    pub ratio_type: RatioType,
    pub series: &'static str,
    pub achieved_ratio: f64,
    pub error_abs: f64,
    pub error_rel: f64,
}

impl Configuration {
    /// Build a configuration from `anchor`, resolving the partner resistor
    /// to the closest value of `series`.
    pub fn new(
        anchor: Anchor,
        desired_ratio: f64,
        ratio_type: RatioType,
        series: &'static Series,
    ) -> Result<Self, DividerError> {
        check_ratio(desired_ratio, ratio_type)?;

        let (res1, res2) = match anchor {
            Anchor::R1(res1) => {
                let ideal = ideal_partner_of_r1(res1.value(), desired_ratio, ratio_type);
                (res1, find_closest(ideal, series)?)
            }
            Anchor::R2(res2) => {
                let ideal = ideal_partner_of_r2(res2.value(), desired_ratio, ratio_type);
                (find_closest(ideal, series)?, res2)
            }
        };

        let achieved_ratio = ratio_type.ratio(res1.value(), res2.value());
        let error_abs = desired_ratio - achieved_ratio;
        let error_rel = error_abs / desired_ratio;

        Ok(Self {
            res1,
            res2,
            desired_ratio,
            ratio_type,
            series: series.name,
            achieved_ratio,
            error_abs,
            error_rel,
        })
    }

    pub fn val1(&self) -> f64 {
        self.res1.value()
    }

    pub fn val2(&self) -> f64 {
        self.res2.value()
    }

    /// Identity of the physical resistor pair, used for deduplication.
    pub fn key(&self) -> (u64, u64) {
        (self.val1().to_bits(), self.val2().to_bits())
    }
}

fn check_ratio(desired_ratio: f64, ratio_type: RatioType) -> Result<(), DividerError> {
    let valid = desired_ratio.is_finite()
        && match ratio_type {
            RatioType::Voltage => desired_ratio > 0.0 && desired_ratio < 1.0,
            RatioType::Resistor => desired_ratio > 0.0,
        };
    if valid {
        Ok(())
    } else {
        Err(DividerError::Domain(format!(
            "no divider realizes {} = {}",
            ratio_type.label(),
            desired_ratio
        )))
    }
}

fn ideal_partner_of_r1(val1: f64, ratio: f64, ratio_type: RatioType) -> f64 {
    match ratio_type {
        RatioType::Voltage => val1 * ratio / (1.0 - ratio),
        RatioType::Resistor => val1 / ratio,
    }
}

fn ideal_partner_of_r2(val2: f64, ratio: f64, ratio_type: RatioType) -> f64 {
    match ratio_type {
        RatioType::Voltage => val2 * (1.0 - ratio) / ratio,
        RatioType::Resistor => val2 * ratio,
    }
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Configuration {}

impl std::hash::Hash for Configuration {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R1 = {}, R2 = {}, e_rel = {:3.2}%, ratio = {:6.5}",
            self.res1,
            self.res2,
            self.error_rel * 100.0,
            self.achieved_ratio
        )
    }
}
