//! datasheet-lint — lint datasheet frontmatter for required fields,
//! key order, network types, and attachment revisions.
//!
//! Exit codes: 0 when clean, 1 when issues were found, 2 when a datasheet
//! could not be read.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, Level};

use datasheet_core::{discover_datasheets, lint_files, render_issues, Issue, ReportFormat};

#[derive(Parser)]
#[command(name = "datasheet-lint")]
#[command(version)]
#[command(about = "Lint datasheets for common errors and consistent style")]
struct Cli {
    /// Specific datasheet files to lint (defaults to every *.mdx under --root)
    files: Vec<PathBuf>,

    /// Directory searched for datasheets when no files are given
    #[arg(long, default_value_os_t = default_root())]
    root: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        }
    }
}

/// `documentation/datasets` at the repository root.
fn default_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .nth(2)
        .unwrap_or(manifest_dir)
        .join("documentation")
        .join("datasets")
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<Vec<Issue>> {
    let files = if cli.files.is_empty() {
        debug!(root = %cli.root.display(), "no files given, discovering datasheets");
        discover_datasheets(&cli.root)
            .with_context(|| format!("failed to discover datasheets in {}", cli.root.display()))?
    } else {
        cli.files.clone()
    };

    let issues = lint_files(&files).context("failed to lint datasheets")?;

    let report = render_issues(&issues, cli.format.into());
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .context("failed to write report")?;
    stdout.flush().context("failed to write report")?;

    Ok(issues)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(issues) if issues.is_empty() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
