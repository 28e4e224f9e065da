use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wt_averager::ranges::{self, ALL_FIELDS};
use wt_averager::{AveragerError, SizingCase, compute_and_publish};
use wt_core::{DischargeType, MechanismType};
use wt_results::{MechanismResult, ResultStore};

#[derive(Parser)]
#[command(name = "wt-cli")]
#[command(about = "Wastewater equipment sizing tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether an averager case file is ready to compute
    Check {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Run the averager sizing pipeline and print the result table
    Compute {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Print the currently valid range of every input field
    Ranges {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Browse the manufactured grate catalogue
    Grates {
        /// Substring to filter marks by (case-insensitive)
        query: Option<String>,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("sizing error: {0}")]
    Sizing(#[from] AveragerError),
}

type CliResult = Result<(), CliError>;

fn main() -> CliResult {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Check { case_path } => cmd_check(&case_path),
        Commands::Compute { case_path } => cmd_compute(&case_path),
        Commands::Ranges { case_path } => cmd_ranges(&case_path),
        Commands::Grates { query } => cmd_grates(query.as_deref().unwrap_or("")),
    }
}

fn load_case(case_path: &Path) -> Result<SizingCase, CliError> {
    let content = std::fs::read_to_string(case_path)?;
    Ok(serde_yaml::from_str(&content)?)
}

fn cmd_check(case_path: &Path) -> CliResult {
    let case = load_case(case_path)?;

    ranges::check_subgroup(case.mechanism, &case.inputs)?;
    ranges::check_ranges(case.mechanism, &case.inputs)?;

    if ranges::is_ready(case.mechanism, &case.inputs) {
        println!("ready to compute");
    } else {
        println!("not ready: required fields are still missing");
    }
    Ok(())
}

fn cmd_compute(case_path: &Path) -> CliResult {
    let case = load_case(case_path)?;

    let mut store = ResultStore::new();
    let computed = compute_and_publish(
        &mut store,
        &case.inputs,
        case.flow,
        case.mechanism,
        case.discharge,
    )?;

    for warning in &computed.warnings {
        eprintln!("warning: {warning}");
    }

    let result = &computed.result;
    println!(
        "Averager sizing: {}, {}",
        discharge_name(result.discharge),
        mechanism_name(result.mechanism)
    );
    println!();
    print_row(&result.coefficient.label, result.coefficient.value);
    print_row(&result.volume_m3.label, result.volume_m3.value);
    print_row(&result.section_area_m2.label, result.section_area_m2.value);
    print_row(&result.depth_m.label, result.depth_m.value);
    print_row(&result.section_width_m.label, result.section_width_m.value);
    print_row(
        &result.section_count.label,
        f64::from(result.section_count.value),
    );

    match &result.mechanism_result {
        MechanismResult::Bubbling {
            section_length_m,
            air_flow_m3_h,
            wall_bubbler_spacing_m,
            interval_bubbler_spacing_m,
        } => {
            print_row(&section_length_m.label, section_length_m.value);
            print_row(&air_flow_m3_h.label, air_flow_m3_h.value);
            print_row(&wall_bubbler_spacing_m.label, wall_bubbler_spacing_m.value);
            if let Some(spacing) = interval_bubbler_spacing_m {
                print_row(&spacing.label, spacing.value);
            }
        }
        MechanismResult::MultichannelWidth {
            channel_count,
            section_length_m,
            tray_section_area_m2,
            channel_widths_m,
            channel_flows_m3_h,
            bottom_orifice_areas_m2,
            side_orifice_areas_m2,
        } => {
            print_row(&channel_count.label, f64::from(channel_count.value));
            print_row(&section_length_m.label, section_length_m.value);
            print_row(&tray_section_area_m2.label, tray_section_area_m2.value);
            print_list(&channel_widths_m.label, &channel_widths_m.value);
            print_list(&channel_flows_m3_h.label, &channel_flows_m3_h.value);
            print_list(&bottom_orifice_areas_m2.label, &bottom_orifice_areas_m2.value);
            print_list(&side_orifice_areas_m2.label, &side_orifice_areas_m2.value);
        }
        MechanismResult::MultichannelLength {
            plan_form: _,
            channel_count,
            section_volume_m3,
            section_length_m,
            diameter_m,
            channel_width_rectangular_m,
            channel_width_circular_m,
        } => {
            print_row(&channel_count.label, f64::from(channel_count.value));
            print_row(&section_volume_m3.label, section_volume_m3.value);
            print_row(&section_length_m.label, section_length_m.value);
            print_row(&diameter_m.label, diameter_m.value);
            print_row(
                &channel_width_rectangular_m.label,
                channel_width_rectangular_m.value,
            );
            print_row(&channel_width_circular_m.label, channel_width_circular_m.value);
        }
    }

    Ok(())
}

fn cmd_ranges(case_path: &Path) -> CliResult {
    let case = load_case(case_path)?;

    println!(
        "Valid ranges for {} / {}",
        discharge_name(case.discharge),
        mechanism_name(case.mechanism)
    );
    for field in ALL_FIELDS {
        match ranges::valid_range(field, case.mechanism, &case.inputs) {
            Some(band) => println!("  {field}: [{}, {}]", band.min, band.max),
            None => println!("  {field}: -"),
        }
    }
    Ok(())
}

fn cmd_grates(query: &str) -> CliResult {
    let models = wt_equipment::filter_grates(query);
    if models.is_empty() {
        println!("no grate matches '{query}'");
        return Ok(());
    }
    for model in models {
        println!(
            "{:10} {:.1}×{:.1} m, {:.2} m², slot {} mm, {} slots",
            model.mark,
            model.width_m,
            model.height_m,
            model.area_m2,
            model.slot_width_m * 1000.0,
            model.slot_count
        );
    }
    Ok(())
}

fn print_row(label: &str, value: f64) {
    println!("  {label}: {value:.2}");
}

fn print_list(label: &str, values: &[f64]) {
    let joined = values
        .iter()
        .map(|v| format!("{v:.2}"))
        .collect::<Vec<_>>()
        .join(", ");
    println!("  {label}: {joined}");
}

fn discharge_name(discharge: DischargeType) -> &'static str {
    match discharge {
        DischargeType::VolleyDischarge => "volley discharge",
        DischargeType::CyclicFluctuation => "cyclic fluctuation",
    }
}

fn mechanism_name(mechanism: MechanismType) -> &'static str {
    match mechanism {
        MechanismType::Bubbling => "bubbling mechanism",
        MechanismType::MultichannelByWidth => "multichannel (graded width)",
        MechanismType::MultichannelByLength => "multichannel (graded length)",
    }
}
