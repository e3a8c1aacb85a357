use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use lzcost_core::domain::profile::OrganizationProfile;
use lzcost_core::pricing::PricingTable;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod summary;

#[derive(Debug, Parser)]
#[command(name = "lzcost", about = "Estimate landing zone costs for a multi-account organization")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Number of AWS accounts.
    #[arg(long, default_value_t = 10)]
    accounts: u32,

    /// Number of employees.
    #[arg(long, default_value_t = 500)]
    employees: u32,

    /// Expected monthly data volume in GB.
    #[arg(long = "data-gb", default_value_t = 1000.0)]
    data_gb: f64,

    /// AWS regions.
    #[arg(long, num_args = 1.., default_values_t = vec!["us-east-1".to_string()])]
    regions: Vec<String>,

    /// Compliance frameworks.
    #[arg(long, num_args = 1.., default_values_t = vec!["sox".to_string(), "pci-dss".to_string()])]
    compliance: Vec<String>,

    /// Fraction of accounts that are non-production.
    #[arg(long = "dev-ratio", default_value_t = 0.3)]
    dev_ratio: f64,

    /// Organization name shown in the report.
    #[arg(long, default_value = "Enterprise Organization")]
    name: String,

    /// JSON organization config; replaces all profile flags when given.
    #[arg(long)]
    config_file: Option<PathBuf>,

    /// JSON pricing override; falls back to LZCOST_PRICING_FILE, then the built-in table.
    #[arg(long)]
    pricing_file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    output: OutputFormat,

    /// Also write the full JSON report to this path.
    #[arg(long)]
    save_report: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the active pricing table.
    Pricing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Summary,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = lzcost_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    let result = run(&args, &settings);
    if let Err(err) = &result {
        sentry_anyhow::capture_anyhow(err);
    }
    result
}

fn run(args: &Args, settings: &lzcost_core::config::Settings) -> anyhow::Result<()> {
    let pricing = match &args.pricing_file {
        Some(path) => PricingTable::from_json_file(path)?,
        None => settings.load_pricing()?,
    };

    if let Some(Command::Pricing) = args.command {
        print!("{}", summary::render_pricing(&pricing));
        return Ok(());
    }

    let profile = resolve_profile(args)?;
    let report = lzcost_core::estimate(&pricing, &profile)?;

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Summary => print!("{}", summary::render_summary(&report)),
    }

    if let Some(path) = &args.save_report {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "detailed report saved");
        eprintln!("\nDetailed report saved to: {}", path.display());
    }

    Ok(())
}

fn resolve_profile(args: &Args) -> anyhow::Result<OrganizationProfile> {
    if let Some(path) = &args.config_file {
        return OrganizationProfile::from_json_file(path);
    }

    Ok(OrganizationProfile {
        name: args.name.clone(),
        accounts_count: args.accounts,
        employees: args.employees,
        regions: args.regions.clone(),
        compliance_requirements: args.compliance.clone(),
        expected_data_gb_monthly: args.data_gb,
        business_hours_only: false,
        development_accounts_ratio: args.dev_ratio,
    })
}

fn init_sentry(settings: &lzcost_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
