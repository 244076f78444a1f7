//! Conformance runner for the onboarding validators.
//!
//! Selects one or all of the built-in catalogs, runs them through the
//! matching validators, and emits a console, Markdown, or JSON report.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use onboard_conformance::{
    Catalog, ReportFormat, RunOutcome, Selection, render, run_catalog, write_report,
};
use onboard_validator::prelude::*;

#[derive(Debug, Parser)]
#[command(
    name = "onboard",
    version,
    about = "Run the onboarding validator conformance catalogs"
)]
struct Cli {
    /// Which catalog to run.
    #[arg(long, value_enum, default_value_t = Suite::All)]
    suite: Suite,

    /// Which subset of the catalog to run.
    #[arg(long, value_enum, default_value_t = Subset::All)]
    subset: Subset,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Console)]
    format: Format,

    /// Write the report to this file instead of stdout.
    #[arg(long, env = "ONBOARD_REPORT")]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Suite {
    Mobile,
    Email,
    Otp,
    All,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Subset {
    Valid,
    Invalid,
    All,
}

impl From<Subset> for Selection {
    fn from(subset: Subset) -> Self {
        match subset {
            Subset::Valid => Self::Valid,
            Subset::Invalid => Self::Invalid,
            Subset::All => Self::All,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Console,
    Markdown,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Console => Self::Console,
            Format::Markdown => Self::Markdown,
            Format::Json => Self::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let selection = Selection::from(cli.subset);

    let mut outcome = RunOutcome::default();
    if matches!(cli.suite, Suite::Mobile | Suite::All) {
        outcome.merge(run_catalog(
            &Catalog::mobile(),
            selection,
            &Mobile::india(),
            "mobile",
        ));
    }
    if matches!(cli.suite, Suite::Email | Suite::All) {
        outcome.merge(run_catalog(
            &Catalog::email(),
            selection,
            &Email::new(),
            "email",
        ));
    }
    if matches!(cli.suite, Suite::Otp | Suite::All) {
        outcome.merge(run_catalog(&Catalog::otp(), selection, &Otp::default(), "otp"));
    }

    let format = ReportFormat::from(cli.format);
    match &cli.output {
        Some(path) => {
            write_report(&outcome, format, path)
                .with_context(|| format!("writing report to {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let rendered = render(&outcome, format).context("rendering report")?;
            print!("{rendered}");
        }
    }

    if outcome.summary.failed > 0 {
        anyhow::bail!(
            "{} of {} case(s) failed",
            outcome.summary.failed,
            outcome.summary.total
        );
    }
    Ok(())
}
