//! Simple example: find the best divider for a pair of voltages and print it.

use divider::prelude::*;

fn main() -> Result<(), DividerError> {
    let mut args = std::env::args().skip(1);
    let v_in: f64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(5.0);
    let v_out: f64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(3.3);

    let options = DividerOptions {
        series: "E24".to_string(),
        num_results: 3,
        sort_key: SortKey::Relative,
    };

    let result = match DividerCore::solve(Target::Voltage { v_in, v_out }, options) {
        Ok(result) => result,
        Err(e) if e.is_input_error() => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: cargo run --example simple_divider [v_in] [v_out]");
            std::process::exit(1);
        }
        Err(e) => return Err(e),
    };

    print!("{}", result);

    if let Some(best) = result.best() {
        println!(
            "\nUse R1 = {} and R2 = {} ({:+.3}% off).",
            best.res1,
            best.res2,
            best.error_rel * 100.0
        );
    }
    Ok(())
}
