//! Divider CLI - find standard resistor values for a divider from the command line.

use clap::{Parser, ValueEnum};
use divider::{
    series, DividerCore, DividerError, DividerOptions, DividerResult, RatioType, SortKey, Target,
};
use std::process;
use tracing_subscriber::filter::LevelFilter;

const SCHEMATIC: &str = r"
        R1           R2
    --[======]-----[======]--
    |            |            |
  V_in         V_out         GND
";

#[derive(Parser)]
#[command(name = "divider")]
#[command(
    about = "Resistor divider calculator for standard E-series values",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Input voltage of the divider
    #[arg(
        long,
        alias = "v_in",
        value_name = "VOLTS",
        requires = "v_out",
        allow_negative_numbers = true
    )]
    v_in: Option<f64>,

    /// Output voltage of the divider
    #[arg(
        long,
        alias = "v_out",
        value_name = "VOLTS",
        requires = "v_in",
        allow_negative_numbers = true
    )]
    v_out: Option<f64>,

    /// Resistor ratio R1 / R2
    #[arg(
        long,
        alias = "res_ratio",
        value_name = "RATIO",
        conflicts_with_all = ["v_in", "v_out"],
        allow_negative_numbers = true
    )]
    res_ratio: Option<f64>,

    /// Series to pick values from
    #[arg(short, long, default_value = series::DEFAULT_SERIES)]
    series: String,

    /// Number of configurations to print
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    num_results: i64,

    /// Error measure used to rank configurations
    #[arg(long, value_enum, default_value = "relative")]
    sort: SortBy,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// List the available series and exit
    #[arg(long)]
    list_series: bool,

    /// Log search details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for scripts
    Json,
}

#[derive(Clone, ValueEnum)]
enum SortBy {
    /// Relative error |desired - achieved| / desired
    Relative,
    /// Absolute error |desired - achieved|
    Absolute,
}

impl From<SortBy> for SortKey {
    fn from(sort: SortBy) -> Self {
        match sort {
            SortBy::Relative => SortKey::Relative,
            SortBy::Absolute => SortKey::Absolute,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = if cli.list_series {
        handle_list_series(&cli.format)
    } else {
        handle_solve(cli)
    };

    process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn target_from(cli: &Cli) -> Result<Target, DividerError> {
    match (cli.v_in, cli.v_out, cli.res_ratio) {
        (Some(v_in), Some(v_out), _) => Ok(Target::Voltage { v_in, v_out }),
        (_, _, Some(ratio)) => Ok(Target::Resistor { ratio }),
        _ => Err(DividerError::InvalidInput(
            "Either specify --v-in and --v-out, or --res-ratio".to_string(),
        )),
    }
}

fn handle_solve(cli: Cli) -> i32 {
    let target = match target_from(&cli) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let options = DividerOptions {
        series: cli.series,
        // A negative count asks for nothing
        num_results: usize::try_from(cli.num_results).unwrap_or(0),
        sort_key: cli.sort.into(),
    };

    match DividerCore::solve(target, options) {
        Ok(result) => output_result(&result, &cli.format),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn output_result(result: &DividerResult, format: &OutputFormat) -> i32 {
    match format {
        OutputFormat::Human => {
            output_human(result);
            0
        }
        OutputFormat::Json => print_json(result),
    }
}

fn output_human(result: &DividerResult) {
    if result.ratio_type == RatioType::Voltage {
        println!("{}", SCHEMATIC);
    }
    print!("{}", result);
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn handle_list_series(format: &OutputFormat) -> i32 {
    match format {
        OutputFormat::Human => {
            println!("Available series:\n");
            for s in series::all() {
                let values: Vec<String> = s.values.iter().map(|v| v.to_string()).collect();
                println!("  {} ({} values per decade)", s.name, s.len());
                println!("    {}", values.join(", "));
                println!();
            }
            0
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "series": series::all(),
                "default": series::DEFAULT_SERIES,
            });
            print_json(&output)
        }
    }
}
