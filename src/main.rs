//! XP dashboard generator
//!
//! Reads saved GraphQL responses and writes the dashboard charts and page.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use xpdash::analysis::{aggregate_by_month, categorize, rank_by_category};
use xpdash::app::{parse_audit, parse_profile, parse_transactions, render_page};
use xpdash::utils::{format_integer, format_magnitude};
use xpdash::{Dashboard, DashboardConfig};

/// xpdash: render an XP dashboard from saved GraphQL responses.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the dashboard page and every chart as separate files.
    Render {
        /// JSON file with the XP transactions response
        #[arg(long, env = "XPDASH_TRANSACTIONS")]
        transactions: PathBuf,

        /// JSON file with the audit ratio response
        #[arg(long)]
        audit: Option<PathBuf>,

        /// JSON file with the user profile response
        #[arg(long)]
        profile: Option<PathBuf>,

        /// JSON dashboard configuration
        #[arg(long, env = "XPDASH_CONFIG")]
        config: Option<PathBuf>,

        /// Output directory
        #[arg(long, default_value = "dashboard")]
        out: PathBuf,
    },

    /// Print monthly totals and project rankings.
    Summary {
        /// JSON file with the XP transactions response
        #[arg(long, env = "XPDASH_TRANSACTIONS")]
        transactions: PathBuf,

        /// Number of projects listed per category
        #[arg(long, default_value_t = 5)]
        top: usize,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn write(dir: &Path, name: &str, contents: &str) -> anyhow::Result<()> {
    let path = dir.join(name);
    fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    debug!("wrote {}", path.display());
    Ok(())
}

fn run(args: Args) -> anyhow::Result<()> {
    debug!("{args:?}");
    match args.command {
        Command::Render {
            transactions,
            audit,
            profile,
            config,
            out,
        } => render(&transactions, audit.as_deref(), profile.as_deref(), config.as_deref(), &out),
        Command::Summary { transactions, top } => summary(&transactions, top),
    }
}

fn render(
    transactions: &Path,
    audit: Option<&Path>,
    profile: Option<&Path>,
    config: Option<&Path>,
    out: &Path,
) -> anyhow::Result<()> {
    let config = match config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    let transactions = parse_transactions(&read(transactions)?)
        .context("failed to decode transactions")?;
    let audit = audit
        .map(|path| -> anyhow::Result<_> {
            parse_audit(&read(path)?).context("failed to decode audit ratio")
        })
        .transpose()?;
    let profile = profile
        .map(|path| -> anyhow::Result<_> {
            parse_profile(&read(path)?).context("failed to decode user profile")
        })
        .transpose()?;

    let dashboard = Dashboard::build(&transactions, audit.as_ref(), &config);

    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;
    write(out, "xp.svg", &dashboard.xp_chart)?;
    for view in &dashboard.categories {
        write(out, &format!("projects-{}.svg", view.category), &view.chart)?;
    }
    if let Some(audit) = &dashboard.audit {
        write(out, "audit-done.svg", &audit.done_bar)?;
        write(out, "audit-received.svg", &audit.received_bar)?;
    }
    write(out, "index.html", &render_page(&dashboard, profile.as_ref(), &config))?;

    info!("dashboard written to {}", out.display());
    Ok(())
}

fn summary(transactions: &Path, top: usize) -> anyhow::Result<()> {
    let transactions = parse_transactions(&read(transactions)?)
        .context("failed to decode transactions")?;

    println!("Monthly XP");
    for bucket in aggregate_by_month(&transactions) {
        println!(
            "  {:<16} {:>12}  {}",
            bucket.label,
            format_integer(bucket.total_xp),
            format_magnitude(bucket.total_xp as f64, 2)
        );
    }

    for (category, projects) in rank_by_category(&categorize(&transactions)) {
        println!("\nTop projects: {category}");
        if projects.is_empty() {
            println!("  (none)");
        }
        for project in projects.iter().take(top) {
            println!("  {:<32} {:>12}", project.name, format_integer(project.xp));
        }
    }
    Ok(())
}
