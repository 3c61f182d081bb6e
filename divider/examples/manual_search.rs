//! Example: using the series catalog, enumerator and ranker directly (without DividerCore).
//! Run with: cargo run --example manual_search [ratio] [series]

use divider::{enumerate, rank_by, series, RatioType, SortKey};

fn main() -> Result<(), divider::DividerError> {
    let mut args = std::env::args().skip(1);
    let ratio: f64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(4.7);
    let name = args.next().unwrap_or_else(|| "E12".to_string());

    let series = series::lookup(&name)?;
    let candidates = enumerate(series, ratio, RatioType::Resistor)?;
    println!(
        "{} unique pairs from {} anchors in {}",
        candidates.len(),
        series.len() * 2,
        series.name
    );

    for key in [SortKey::Relative, SortKey::Absolute] {
        let result = rank_by(
            candidates.clone(),
            ratio,
            RatioType::Resistor,
            series.name,
            3,
            key,
        );
        println!("\nBy {:?} error:", key);
        for conf in &result.configurations {
            println!("  {}", conf);
        }
    }
    Ok(())
}
