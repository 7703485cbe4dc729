mod commands;
mod config;
mod output;
mod spinner;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use passengers_lib::{Labels, Language};

use crate::config::Config;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "passengers")]
#[command(about = "Load the passenger table from the passenger data service")]
struct Cli {
    /// Output format: table, html, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Display language: zh-tw or en
    #[arg(long, default_value = "zh-tw", global = true)]
    lang: String,

    /// Service base URL (overrides PASSENGERS_API_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides PASSENGERS_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch passengers and print the rendered table
    Load(commands::load::LoadArgs),
    /// Show the service health document
    Status,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("passengers=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "html" => OutputFormat::Html,
        "csv" => OutputFormat::Csv,
        "md" | "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };
    let labels = Labels::for_language(cli.lang.parse::<Language>()?);
    let config =
        Config::from_env().with_overrides(cli.base_url.as_deref(), cli.timeout_secs);

    let ok = match &cli.command {
        Commands::Load(args) => commands::load::run(args, &config, labels, &format).await?,
        Commands::Status => commands::status::run(&config, &format).await?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
