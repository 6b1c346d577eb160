//! Acta CLI - weekly status deck generation
//!
//! The pipeline logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use std::path::PathBuf;

use acta::{build_report, Config, ReportParams};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

#[derive(Parser)]
#[command(name = "acta")]
#[command(author, version, about = "Weekly status deck generation from source exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the weekly status deck from the inputs directory
    Build(BuildArgs),
    /// Print the effective configuration
    Defaults,
}

#[derive(Args)]
struct BuildArgs {
    /// Project root containing the inputs/ and outputs/ directories
    #[arg(long, default_value = ".")]
    project_root: PathBuf,
    /// Reporting period label shown on the status slides
    #[arg(long)]
    period: Option<String>,
    /// Customer name used in titles and the artifact name
    #[arg(long)]
    customer: Option<String>,
    /// Engagement name used in titles and the artifact name
    #[arg(long)]
    engagement: Option<String>,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            period: None,
            customer: None,
            engagement: None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Build(args)) => run_build(args).await,
        Some(Commands::Defaults) => {
            let config = Config::load()?;
            println!("customer:   {}", config.report.customer_name);
            println!("engagement: {}", config.report.engagement_name);
            println!("period:     {}", config.report.period_label);
            println!("inputs:     {}", config.paths.inputs.display());
            println!("outputs:    {}", config.paths.outputs.display());
            Ok(())
        }
        // Default: build with the configured defaults.
        None => run_build(BuildArgs::default()).await,
    }
}

async fn run_build(args: BuildArgs) -> anyhow::Result<()> {
    let config = Config::load()?;
    let params = ReportParams {
        period: args.period.unwrap_or(config.report.period_label),
        customer_name: args.customer.unwrap_or(config.report.customer_name),
        engagement_name: args.engagement.unwrap_or(config.report.engagement_name),
        report_date: Local::now().date_naive(),
    };
    let inputs = args.project_root.join(&config.paths.inputs);
    let outputs = args.project_root.join(&config.paths.outputs);

    println!(
        "Consolidating weekly signals for {} {} from {}",
        params.customer_name,
        params.engagement_name,
        inputs.display()
    );

    let path = build_report(&inputs, &outputs, &params).await?;

    println!(
        "{} {}",
        "Generated weekly status deck:".green().bold(),
        path.display()
    );
    Ok(())
}
