//! bom-tools: Semantic BOM diff and pricing analysis tool
//!
//! Compares, imports, exports, and prices electronics bill-of-materials
//! line-item lists.

use anyhow::Result;
use bom_tools::{
    cli,
    config::{DiffConfig, ExportConfig, ImportConfig, OutputConfig, PriceConfig, StatsConfig},
    csv::DEFAULT_PREVIEW_ROWS,
    reports::ReportFormat,
};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput Formats:",
        "\n  BOM:  JSON line-item lists (CircuitHub export records)",
        "\n  CSV:  naive comma-separated import with column mapping",
        "\n\nOutput Formats:",
        "\n  summary, json, csv",
        "\n\nFeatures:",
        "\n  Structural diff, lenient CSV import, pricing roll-ups"
    )
}

#[derive(Parser)]
#[command(name = "bom-tools")]
#[command(version, long_version = build_long_version())]
#[command(about = "Semantic BOM diff and pricing analysis tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Changes detected (with --fail-on-change)
    2  Validation failed
    3  Error occurred

EXAMPLES:
    # Diff two BOM revisions
    bom-tools diff rev-a.json rev-b.json

    # CI check that a BOM is unchanged
    bom-tools diff rev-a.json rev-b.json --fail-on-change -o summary

    # Import a distributor CSV with auto-mapped columns
    bom-tools import parts.csv -o json > bom.json

    # Preview how columns would map before importing
    bom-tools import parts.csv --preview

    # Price a BOM with a supplier breakdown
    bom-tools price bom.json -o summary")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the old/baseline BOM (JSON)
    old: PathBuf,

    /// Path to the new BOM (JSON)
    new: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if any changes are detected
    #[arg(long)]
    fail_on_change: bool,
}

/// Arguments for the `import` subcommand
#[derive(Parser)]
struct ImportArgs {
    /// Path to the CSV file
    csv: PathBuf,

    /// Column mapping file (JSON header→field object); auto-suggested
    /// from headers when omitted
    #[arg(short, long)]
    mapping: Option<PathBuf>,

    /// Show a mapped preview of the first rows instead of importing
    #[arg(long)]
    preview: bool,

    /// Number of rows in preview mode
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    preview_rows: usize,

    /// Output format
    #[arg(short, long, default_value = "json")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `export` subcommand
#[derive(Parser)]
struct ExportArgs {
    /// Path to the BOM (JSON)
    bom: PathBuf,

    /// Project name used for the suggested export filename
    #[arg(short, long)]
    project: Option<String>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `price` subcommand
#[derive(Parser)]
struct PriceArgs {
    /// Path to the BOM (JSON)
    bom: PathBuf,

    /// Reporting currency (no conversion is performed)
    #[arg(short, long)]
    currency: Option<String>,

    /// Exit with code 2 when pricing sanity checks fail
    #[arg(long)]
    check: bool,

    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `stats` subcommand
#[derive(Parser)]
struct StatsArgs {
    /// Path to the BOM (JSON)
    bom: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two BOM revisions
    Diff(DiffArgs),

    /// Import a CSV file as BOM line items
    Import(ImportArgs),

    /// Export a BOM in the project CSV format
    Export(ExportArgs),

    /// Compute cost totals and a per-supplier breakdown
    Price(PriceArgs),

    /// Show BOM shape and completeness statistics
    Stats(StatsArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let exit_code = match cli.command {
        Commands::Diff(args) => cli::run_diff(DiffConfig {
            old: args.old,
            new: args.new,
            output: OutputConfig {
                format: args.output,
                file: args.output_file,
            },
            fail_on_change: args.fail_on_change,
            quiet: cli.quiet,
        })?,

        Commands::Import(args) => cli::run_import(ImportConfig {
            csv: args.csv,
            mapping: args.mapping,
            preview: args.preview,
            preview_rows: args.preview_rows,
            output: OutputConfig {
                format: args.output,
                file: args.output_file,
            },
            quiet: cli.quiet,
        })?,

        Commands::Export(args) => cli::run_export(ExportConfig {
            bom: args.bom,
            project: args.project,
            output: OutputConfig {
                format: ReportFormat::Csv,
                file: args.output_file,
            },
        })?,

        Commands::Price(args) => cli::run_price(PriceConfig {
            bom: args.bom,
            currency: args.currency,
            check: args.check,
            output: OutputConfig {
                format: args.output,
                file: args.output_file,
            },
        })?,

        Commands::Stats(args) => cli::run_stats(StatsConfig {
            bom: args.bom,
            output: OutputConfig {
                format: args.output,
                file: args.output_file,
            },
        })?,

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "bom-tools", &mut io::stdout());
            0
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
