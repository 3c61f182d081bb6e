//! Candidate enumeration and ranking.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::configuration::{Anchor, Configuration, RatioType};
use crate::core::DividerError;
use crate::resistor::Resistor;
use crate::series::Series;

/// Decade at which every series value is anchored during enumeration.
/// The resolver's neighbouring-decade window lets the partner roam freely.
pub const ANCHOR_EXPONENT: i32 = 0;

/// Criterion used to order configurations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// `|error_rel|`
    #[default]
    Relative,
    /// `|error_abs|`
    Absolute,
}

impl SortKey {
    fn error_of(&self, conf: &Configuration) -> f64 {
        match self {
            SortKey::Relative => conf.error_rel.abs(),
            SortKey::Absolute => conf.error_abs.abs(),
        }
    }
}

/// Build every candidate configuration for `series`.
///
/// Each series value is anchored once as R1 and once as R2. Configurations
/// that land on the same `(val1, val2)` pair are kept only once, in the order
/// they were first produced.
pub fn enumerate(
    series: &'static Series,
    desired_ratio: f64,
    ratio_type: RatioType,
) -> Result<Vec<Configuration>, DividerError> {
    let mut seen = HashSet::with_capacity(series.len() * 2);
    let mut configurations = Vec::with_capacity(series.len() * 2);

    for &mantissa in series.values {
        let resistor = Resistor::new(mantissa, ANCHOR_EXPONENT);
        for anchor in [Anchor::R1(resistor), Anchor::R2(resistor)] {
            let conf = Configuration::new(anchor, desired_ratio, ratio_type, series)?;
            if seen.insert(conf.key()) {
                configurations.push(conf);
            }
        }
    }

    tracing::debug!(
        "Enumerated {} unique configurations from {} anchors in {}",
        configurations.len(),
        series.len() * 2,
        series.name
    );
    Ok(configurations)
}

/// Rank `configs` by relative error and keep the best `count`.
pub fn rank(
    configs: Vec<Configuration>,
    desired_ratio: f64,
    ratio_type: RatioType,
    series_name: &str,
    count: usize,
) -> DividerResult {
    rank_by(
        configs,
        desired_ratio,
        ratio_type,
        series_name,
        count,
        SortKey::Relative,
    )
}

/// Rank `configs` by the chosen error measure and keep the best `count`.
///
/// Equal errors are ordered by `(val1, val2)` so the outcome does not depend
/// on the order of `configs`.
pub fn rank_by(
    mut configs: Vec<Configuration>,
    desired_ratio: f64,
    ratio_type: RatioType,
    series_name: &str,
    count: usize,
    sort_key: SortKey,
) -> DividerResult {
    configs.sort_by(|a, b| {
        compare(a, b, sort_key)
            .then_with(|| a.val1().total_cmp(&b.val1()))
            .then_with(|| a.val2().total_cmp(&b.val2()))
    });
    configs.truncate(count);

    DividerResult {
        series_name: series_name.to_string(),
        desired_ratio,
        ratio_type,
        sort_key,
        configurations: configs,
    }
}

/// Outcome of a completed search, best configuration first.
#[derive(Debug, Clone, Serialize)]
pub struct DividerResult {
    pub series_name: String,
    pub desired_ratio: f64,
    pub ratio_type: RatioType,
    pub sort_key: SortKey,
    pub configurations: Vec<Configuration>,
}

impl DividerResult {
    pub fn best(&self) -> Option<&Configuration> {
        self.configurations.first()
    }

    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }
}

impl fmt::Display for DividerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} best results for ratio {} = {:6.5} using series {}:",
            self.configurations.len(),
            self.ratio_type.label(),
            self.desired_ratio,
            self.series_name
        )?;
        for conf in &self.configurations {
            writeln!(f, "{}", conf)?;
        }
        Ok(())
    }
}

/// Compare two configurations by the given error measure only.
fn compare(a: &Configuration, b: &Configuration, sort_key: SortKey) -> Ordering {
    sort_key.error_of(a).total_cmp(&sort_key.error_of(b))
}
