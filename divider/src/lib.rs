//! Divider - resistor divider calculator for standard E-series values
//!
//! This library finds pairs of resistors from a standard series (E3 … E96)
//! that best approximate a desired voltage-divider ratio `V_out / V_in` or a
//! direct resistor ratio `R1 / R2`.
//!
//! # Quick Start
//!
//! ```no_run
//! use divider::{DividerCore, DividerOptions, Target};
//!
//! let options = DividerOptions {
//!     num_results: 3,
//!     ..DividerOptions::default()
//! };
//! let result = DividerCore::solve(
//!     Target::Voltage { v_in: 5.0, v_out: 3.3 },
//!     options,
//! ).unwrap();
//!
//! print!("{}", result);
//! ```
//!
//! # How it works
//!
//! - **Series catalog**: normalized mantissas per series
//! - **Resolver**: closest series value to any magnitude, across decades
//! - **Configurations**: one anchored resistor, partner resolved from the series
//! - **Search**: every series value anchored as R1 and as R2, deduplicated and ranked

pub mod configuration;
pub mod core;
pub mod resistor;
pub mod search;
pub mod series;
pub mod units;

// Re-export main types
pub use configuration::{Anchor, Configuration, RatioType};
pub use core::{DividerCore, DividerError, DividerOptions, Target};
pub use resistor::{find_closest, Resistor};
pub use search::{enumerate, rank, rank_by, DividerResult, SortKey};
pub use series::Series;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        DividerCore, DividerError, DividerOptions, DividerResult, RatioType, SortKey, Target,
    };
}
