//! Human-readable resistance formatting.

use crate::resistor::Resistor;

/// Unit suffix for a resistor at the given decade exponent.
///
/// Exponents outside the milliohm..gigaohm range fall back to literal
/// power-of-ten notation.
pub fn unit_suffix(exponent: i32) -> String {
    match prefix_for(exponent) {
        Some((_, prefix)) => format!("{}Ohm", prefix),
        None => format!("* 10^{} Ohm", exponent),
    }
}

/// Format a resistor with its mantissa scaled into the matching unit,
/// e.g. `(8.2, -1)` becomes `820 mOhm` and `(4.7, 3)` becomes `4.7 kOhm`.
pub fn format_resistor(resistor: &Resistor) -> String {
    match prefix_for(resistor.exponent) {
        Some((base, _)) => {
            let scaled = resistor.mantissa * 10f64.powi(resistor.exponent - base);
            format!("{} {}", trim_number(scaled), unit_suffix(resistor.exponent))
        }
        None => format!(
            "{} {}",
            trim_number(resistor.mantissa),
            unit_suffix(resistor.exponent)
        ),
    }
}

// (exponent of the unit, SI prefix)
fn prefix_for(exponent: i32) -> Option<(i32, &'static str)> {
    match exponent {
        -3..=-1 => Some((-3, "m")),
        0..=2 => Some((0, "")),
        3..=5 => Some((3, "k")),
        6..=8 => Some((6, "M")),
        9..=11 => Some((9, "G")),
        _ => None,
    }
}

fn trim_number(value: f64) -> String {
    let text = format!("{:.4}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_string()
}
