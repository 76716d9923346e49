mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::input::{InputOptions, load_result};
use crate::model::profile::{CoercionPolicy, NormalizationMode, ScoringProfile};
use crate::pipeline::stage1_aggregate::DimensionAggregator;
use crate::pipeline::stage3_overview::build_overview;
use crate::pipeline::stage4_report::write_reports;
use crate::report::{ReportData, ToolMeta};

const TOOL_NAME: &str = "kira-taskscore";

#[derive(Debug, Parser)]
#[command(name = "kira-taskscore", version, about)]
struct Cli {
    /// Debug-level logging (RUST_LOG takes precedence).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Aggregate an assessment result and write reports.
    Run {
        /// Assessment result JSON (`.json` or `.json.gz`).
        #[arg(long)]
        input: PathBuf,

        /// Output directory.
        #[arg(long)]
        out: PathBuf,

        #[arg(long, value_enum, default_value_t = NormalizationArg::PerAxis)]
        normalization: NormalizationArg,

        /// Reject non-numeric score fields instead of reading them as 0.
        #[arg(long)]
        strict_numeric: bool,

        /// Largest accepted input, in MiB.
        #[arg(long, default_value_t = 10)]
        max_input_mb: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum NormalizationArg {
    PerAxis,
    Global,
}

#[derive(Debug, Clone)]
struct RunConfig {
    input_path: PathBuf,
    out_dir: PathBuf,
    profile: ScoringProfile,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = parse_error_exit_code(&err);
            let _ = err.print();
            std::process::exit(code);
        }
    };
    logging::init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// `--help` and `--version` exit 0; every usage error exits 1 like a run error.
fn parse_error_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() { 1 } else { 0 }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = build_config(cli.command);
    log_profile(&config.profile);

    let options = InputOptions {
        coercion: config.profile.coercion,
        max_input_bytes: config.profile.max_input_bytes,
    };
    let result = load_result(&config.input_path, &options).map_err(|e| e.to_string())?;

    let aggregator = DimensionAggregator::new(config.profile.normalization);
    let stats = aggregator.compute(&result.dimensions);
    let radar_raw = aggregator.to_radar_series(&stats);
    let radar_normalized = aggregator.normalize(&radar_raw);
    let overview = build_overview(&result, &config.profile);

    tracing::info!(
        input_dimensions = result.dimensions.len(),
        aggregated = stats.len(),
        average = overview.average,
        "aggregation complete"
    );

    let data = ReportData {
        meta: ToolMeta {
            name: TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            input: config.input_path.display().to_string(),
            normalization: normalization_name(config.profile.normalization).to_string(),
            coercion: coercion_name(config.profile.coercion).to_string(),
        },
        is_sample: result.is_sample,
        overview,
        analysis: result.analysis,
        input_dimensions: result.dimensions.len(),
        stats,
        radar_raw,
        radar_normalized,
    };

    write_reports(&data, &config.out_dir).map_err(|e| e.to_string())?;
    Ok(())
}

fn build_config(command: Command) -> RunConfig {
    match command {
        Command::Run {
            input,
            out,
            normalization,
            strict_numeric,
            max_input_mb,
        } => {
            let mut profile = if strict_numeric {
                ScoringProfile::strict_v1()
            } else {
                ScoringProfile::default_v1()
            };
            profile.normalization = match normalization {
                NormalizationArg::PerAxis => NormalizationMode::PerAxis,
                NormalizationArg::Global => NormalizationMode::Global,
            };
            profile.max_input_bytes = max_input_mb.saturating_mul(1024 * 1024);
            RunConfig {
                input_path: input,
                out_dir: out,
                profile,
            }
        }
    }
}

fn normalization_name(mode: NormalizationMode) -> &'static str {
    match mode {
        NormalizationMode::PerAxis => "per-axis (default)",
        NormalizationMode::Global => "global",
    }
}

fn coercion_name(policy: CoercionPolicy) -> &'static str {
    match policy {
        CoercionPolicy::Lenient => "lenient (non-numeric as 0)",
        CoercionPolicy::Strict => "strict",
    }
}

fn log_profile(profile: &ScoringProfile) {
    if profile.normalization == NormalizationMode::Global {
        tracing::warn!(
            "global radar normalization enabled (--normalization global); axes with small point values will look compressed"
        );
    }
    match profile.coercion {
        CoercionPolicy::Lenient => {
            tracing::debug!("lenient numeric coercion: non-numeric score fields are read as 0")
        }
        CoercionPolicy::Strict => {
            tracing::info!("strict numeric coercion enabled (--strict-numeric)")
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
