use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pdfdoi_core::{DoiError, ScanConfig};
use pdfdoi_mupdf::MupdfBackend;

mod output;

use output::ColorMode;

/// Print the first DOI found in the first pages of a PDF.
///
/// The DOI is the only thing written to stdout; diagnostics go to stderr.
/// Exits 0 when a DOI was found and 1 otherwise.
#[derive(Parser, Debug)]
#[command(
    name = "pdfdoi",
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Path to the PDF file to scan
    #[arg(allow_hyphen_values = true)]
    file_path: PathBuf,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Every parse error, usage included, goes to stderr and exits 1.
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let color = ColorMode(std::io::stderr().is_terminal());

    match run(&cli.file_path, color) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries nothing but the DOI.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(file_path: &Path, color: ColorMode) -> anyhow::Result<ExitCode> {
    let mut stderr = std::io::stderr().lock();
    let config = ScanConfig::default();

    match pdfdoi_core::extract_doi(file_path, &MupdfBackend::new(), &config) {
        Ok(Some(doi)) => {
            output::print_found(&mut stderr, &doi, color)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", doi).context("failed to write DOI to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
            Ok(ExitCode::SUCCESS)
        }
        Ok(None) => {
            output::print_not_found(&mut stderr, color)?;
            Ok(ExitCode::FAILURE)
        }
        Err(DoiError::FileNotFound(path)) => {
            output::print_file_not_found(&mut stderr, &path, color)?;
            Ok(ExitCode::FAILURE)
        }
        Err(err @ DoiError::DocumentUnreadable(_)) => {
            tracing::debug!(path = %file_path.display(), error = %err, "extraction failed");
            output::print_extraction_error(&mut stderr, &err, color)?;
            Ok(ExitCode::FAILURE)
        }
    }
}
