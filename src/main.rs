use anyhow::{Context, Result};
use attenuation::{
    split_power, supported_wavelengths, BudgetCheck, Coefficients, LossBudget, LossCalculator,
};
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use configuration::{load_config, Config};
use core_types::{FiberType, Measurement, MeasurementInput, Wavelength};
use ledger::MeasurementLedger;
use report::{JsonExporter, PathReport, ReportExporter};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the OptiCalc link-loss application.
fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Estimate(args) => handle_estimate(args, &config),
        Commands::Report(args) => handle_report(args, &config),
        Commands::Splitter(args) => handle_splitter(args),
        Commands::Wavelengths => handle_wavelengths(),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A link-loss calculator for fiber-optic networks.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file. Defaults to `opticalc.toml` in the
    /// working directory when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the loss breakdown for a single link.
    Estimate(EstimateArgs),
    /// Build a path report from a JSON file of measurement inputs.
    Report(ReportArgs),
    /// Compute the ideal splitting loss of a passive optical splitter.
    Splitter(SplitterArgs),
    /// List the supported fiber/wavelength pairs and their coefficients.
    Wavelengths,
}

#[derive(Parser)]
struct EstimateArgs {
    /// The fiber type ("singlemode" or "multimode").
    #[arg(long)]
    fiber_type: FiberType,

    /// The operating wavelength in nm (850, 1300, 1310 or 1550).
    #[arg(long)]
    wavelength: Wavelength,

    /// Cable length in meters.
    #[arg(long)]
    length_m: Decimal,

    /// Number of splices along the link.
    #[arg(long, default_value_t = 0)]
    splices: u32,

    /// Number of connectors along the link.
    #[arg(long, default_value_t = 0)]
    connectors: u32,

    /// Label for the near end of the link.
    #[arg(long, default_value = "Start")]
    start: String,

    /// Label for the far end of the link.
    #[arg(long, default_value = "End")]
    end: String,

    /// Judge the result against the configured loss budget.
    #[arg(long)]
    check_budget: bool,
}

#[derive(Parser)]
struct ReportArgs {
    /// Path to a JSON array of measurement inputs.
    #[arg(long)]
    input: PathBuf,

    /// Write the report as JSON to this file.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the report as JSON to stdout instead of a table.
    #[arg(long)]
    json: bool,

    /// Judge every measurement against the configured loss budget.
    #[arg(long)]
    check_budget: bool,
}

#[derive(Parser)]
struct SplitterArgs {
    /// Input power in dBm (may be negative).
    #[arg(long, allow_negative_numbers = true)]
    input_power_dbm: Decimal,

    /// Number of output ports (at least 2).
    #[arg(long)]
    ports: u32,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Handles a one-off loss estimate for a single link.
fn handle_estimate(args: EstimateArgs, config: &Config) -> Result<()> {
    let calculator = LossCalculator::new();
    let measurement = calculator.measure(MeasurementInput {
        fiber_type: args.fiber_type,
        wavelength: args.wavelength,
        start_location: args.start,
        end_location: args.end,
        cable_length_m: args.length_m,
        splice_count: args.splices,
        connector_count: args.connectors,
    })?;

    println!(
        "Link {} ({} @ {} nm, {} m)",
        measurement.link_label(),
        measurement.fiber_type,
        measurement.wavelength,
        measurement.cable_length_m
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Loss term", "dB"]);
    table.add_row(vec![
        "Fiber".to_string(),
        measurement.results.fiber_loss_db.to_string(),
    ]);
    table.add_row(vec![
        "Splices".to_string(),
        measurement.results.splice_loss_db.to_string(),
    ]);
    table.add_row(vec![
        "Connectors".to_string(),
        measurement.results.connector_loss_db.to_string(),
    ]);
    table.add_row(vec![
        "Total".to_string(),
        measurement.results.total_loss_db.to_string(),
    ]);
    println!("{table}");

    if args.check_budget {
        let budget = LossBudget::from_settings(&config.limits)?;
        let check = budget.evaluate(&measurement)?;
        print_budget_verdict(&budget, &check);
    }

    Ok(())
}

/// Handles the batch workflow: read inputs, compute every link, assemble the
/// ledger and emit the report.
fn handle_report(args: ReportArgs, config: &Config) -> Result<()> {
    let file = File::open(&args.input)
        .context(format!("Failed to open input file at {:?}", &args.input))?;
    let inputs: Vec<MeasurementInput> = serde_json::from_reader(BufReader::new(file))
        .context("Failed to parse the measurement input file")?;

    let calculator = LossCalculator::new();
    let mut path = MeasurementLedger::new();
    for input in inputs {
        path.append(calculator.measure(input)?);
    }

    let report = PathReport::from_ledger(&path);

    if let Some(output) = &args.output {
        let mut file = File::create(output)
            .context(format!("Failed to create report file at {:?}", output))?;
        JsonExporter.export(&report, &mut file)?;
        println!("Report written to {}", output.display());
    }

    if args.json {
        JsonExporter.export(&report, &mut std::io::stdout())?;
    } else {
        println!("{}", measurement_table(&report.measurements));
        println!(
            "Total distance: {} m | Total loss: {} dB",
            report.total_distance_m, report.total_loss_db
        );
    }

    if args.check_budget {
        let budget = LossBudget::from_settings(&config.limits)?;
        println!("{}", budget_table(&budget, &report.measurements)?);
    }

    Ok(())
}

/// Handles the passive-splitter estimate.
fn handle_splitter(args: SplitterArgs) -> Result<()> {
    let split = split_power(args.input_power_dbm, args.ports)?;
    println!(
        "{} ports at {} dBm in: splitting loss {} dB, output power {} dBm per port",
        args.ports, args.input_power_dbm, split.splitting_loss_db, split.output_power_dbm
    );
    Ok(())
}

/// Prints the coefficient table for every supported fiber/wavelength pair.
fn handle_wavelengths() -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Fiber type",
            "Wavelength (nm)",
            "Fiber (dB/km)",
            "Splice (dB)",
            "Connector (dB)",
        ]);

    for fiber_type in [FiberType::Singlemode, FiberType::Multimode] {
        for &wavelength in supported_wavelengths(fiber_type) {
            if let Some(coefficients) = Coefficients::for_pair(fiber_type, wavelength) {
                table.add_row(vec![
                    fiber_type.to_string(),
                    wavelength.nanometers().to_string(),
                    coefficients.fiber_db_per_km.to_string(),
                    coefficients.splice_db.to_string(),
                    coefficients.connector_db.to_string(),
                ]);
            }
        }
    }

    println!("{table}");
    Ok(())
}

// ==============================================================================
// Rendering Helpers
// ==============================================================================

fn measurement_table(measurements: &[Measurement]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "#",
            "Link",
            "Fiber",
            "nm",
            "Length (m)",
            "Splices",
            "Connectors",
            "Loss (dB)",
        ]);

    for (index, measurement) in measurements.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            measurement.link_label(),
            measurement.fiber_type.to_string(),
            measurement.wavelength.to_string(),
            measurement.cable_length_m.to_string(),
            measurement.splice_count.to_string(),
            measurement.connector_count.to_string(),
            measurement.results.total_loss_db.to_string(),
        ]);
    }

    table
}

fn budget_table(budget: &LossBudget, measurements: &[Measurement]) -> Result<Table> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Link",
            "Expected (dB)",
            "Max (dB)",
            "Actual (dB)",
            "Verdict",
        ]);

    for measurement in measurements {
        let check = budget.evaluate(measurement)?;
        table.add_row(vec![
            measurement.link_label(),
            check.expected_loss_db.to_string(),
            check.max_loss_db.to_string(),
            check.actual_loss_db.to_string(),
            verdict_label(&check).to_string(),
        ]);
    }

    Ok(table)
}

fn print_budget_verdict(budget: &LossBudget, check: &BudgetCheck) {
    println!(
        "Budget ({} profile, {}x): expected {} dB, max {} dB, actual {} dB: {}",
        budget.profile().name,
        budget.max_multiplier(),
        check.expected_loss_db,
        check.max_loss_db,
        check.actual_loss_db,
        verdict_label(check)
    );
}

fn verdict_label(check: &BudgetCheck) -> &'static str {
    if check.within_budget {
        "PASS"
    } else {
        "FAIL"
    }
}
