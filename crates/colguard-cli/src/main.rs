use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use colguard_core::{check_models, Config, ModelColumns, NamingRule, Report};
use colguard_dbt::{filter_filenames, resolve_models, Catalog};

/// Colguard - column name contract checking for dbt catalogs
#[derive(Parser)]
#[command(name = "colguard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Model files to check (filtered to .sql entries)
    filenames: Vec<PathBuf>,

    /// Path to the dbt catalog.json
    #[arg(long, default_value = "target/catalog.json")]
    catalog: PathBuf,

    /// Regex pattern to match column names
    #[arg(long)]
    pattern: Option<String>,

    /// Expected data type pattern for the matching columns
    #[arg(long)]
    dtype: Option<String>,

    /// Do not require every column of the data type to match the naming pattern
    #[arg(long = "skip_check_every_column_for_dtype")]
    skip_check_every_column_for_dtype: bool,

    /// Path to config file (default: colguard.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a JSON report to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Merge command-line flags with config file defaults; flags win.
fn resolve_rule(cli: &Cli, config: &Config) -> Result<NamingRule> {
    let pattern = cli
        .pattern
        .as_deref()
        .or(config.rule.pattern.as_deref())
        .ok_or_else(|| {
            anyhow::anyhow!("--pattern is required (on the command line or in colguard.toml)")
        })?;

    let dtype = cli
        .dtype
        .as_deref()
        .or(config.rule.dtype.as_deref())
        .ok_or_else(|| {
            anyhow::anyhow!("--dtype is required (on the command line or in colguard.toml)")
        })?;

    let skip = cli.skip_check_every_column_for_dtype
        || config.rule.skip_check_every_column_for_dtype;

    Ok(NamingRule::new(pattern, dtype, skip)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config if specified
    let config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else if Path::new("colguard.toml").exists() {
        Config::from_file(Path::new("colguard.toml"))?
    } else {
        if cli.verbose {
            eprintln!("{}", "No config file found, using defaults".yellow());
        }
        Config::default()
    };

    let rule = resolve_rule(&cli, &config)?;

    if cli.verbose {
        eprintln!(
            "{} {}",
            "Loading catalog from:".cyan(),
            cli.catalog.display()
        );
    }

    let catalog = match Catalog::from_file(&cli.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Unable to load catalog file ({})", e);
            process::exit(1);
        }
    };

    let filenames = filter_filenames(&cli.filenames, &[".sql"]);
    let stems: HashSet<String> = filenames.keys().cloned().collect();
    let models = resolve_models(&catalog, &stems);

    if cli.verbose {
        eprintln!(
            "{} {} of {} catalog nodes selected",
            "Resolved:".cyan(),
            models.len(),
            catalog.nodes.len()
        );
    }

    let model_columns: Vec<ModelColumns> =
        models.iter().map(|model| model.to_model_columns()).collect();
    let violations = check_models(&model_columns, &rule);

    // One plain stdout line per violation; CI logs diff these.
    for violation in &violations {
        println!("{}", violation.message());
    }

    let report = Report::from_violations(violations, model_columns.len());

    if let Some(output) = &cli.output {
        report.save_to_file(output)?;
        if cli.verbose {
            eprintln!("{} {}", "Report saved to:".green(), output.display());
        }
    }

    if cli.verbose {
        print_summary(&report);
    }

    if report.has_violations() {
        process::exit(1);
    }

    Ok(())
}

/// Print the check summary to stderr (verbose runs only)
fn print_summary(report: &Report) {
    eprintln!();
    eprintln!("{}", "=".repeat(60).bright_blue());
    eprintln!("{}", "Column Name Contract Check".bold().bright_blue());
    eprintln!("{}", "=".repeat(60).bright_blue());
    eprintln!();

    eprintln!("Models checked: {}", report.summary.models_checked);

    if report.has_violations() {
        eprintln!(
            "Violations:     {}",
            report.summary.total.to_string().red().bold()
        );
        eprintln!(
            "  of the expected type, name misses pattern: {}",
            report.summary.type_without_pattern
        );
        eprintln!(
            "  name matches pattern, type is wrong:       {}",
            report.summary.pattern_without_type
        );
    } else {
        eprintln!("{}", "✓ No violations found!".green().bold());
    }

    eprintln!();
    eprintln!("{}", "=".repeat(60).bright_blue());
}
