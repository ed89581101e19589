//! pdfmc - Merge PDF files from explicit paths and folders into one document.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use pdfmc::cli::Cli;
use pdfmc::config::Config;
use pdfmc::error::PdfMcError;
use pdfmc::output::{OutputFormatter, Reporter, RunReport};
use pdfmc::pipeline;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<PdfMcError>()
                .map_or(1, PdfMcError::exit_code);
            eprintln!("Error: {err}");
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the level.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "pdfmc=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.to_config()?;
    let formatter = OutputFormatter::from_config(&config);

    let report = pipeline::run(&config, &formatter)?;

    if config.json {
        println!("{}", report.to_json()?);
    } else if !config.dry_run {
        print_summary(&config, &formatter, &report);
    }

    Ok(())
}

fn print_summary(config: &Config, formatter: &OutputFormatter, report: &RunReport) {
    let Some(summary) = &report.merge else {
        return;
    };

    formatter.blank_line();
    formatter.success(&format!(
        "Successfully created {} ({} pages, {})",
        config.output.display(),
        summary.pages,
        pdfmc::utils::format_file_size(summary.bytes_written)
    ));

    if summary.files_skipped > 0 {
        formatter.warning(&format!(
            "{} file(s) could not be read and were skipped",
            summary.files_skipped
        ));
    }

    if formatter.is_verbose() {
        formatter.section("Statistics");
        formatter.detail("Input files", &summary.files_merged.to_string());
        formatter.detail("Skipped files", &summary.files_skipped.to_string());
        formatter.detail("Total pages", &summary.pages.to_string());
        formatter.detail("Input size", &pdfmc::utils::format_file_size(summary.bytes_read));
        formatter.detail("Output size", &pdfmc::utils::format_file_size(summary.bytes_written));
        formatter.detail("Objects before dedup", &summary.objects_before_dedup.to_string());
        formatter.detail("Objects", &summary.objects.to_string());
        formatter.detail("Duplicates removed", &summary.duplicates_removed.to_string());
        formatter.detail("Streams compressed", &summary.streams_compressed.to_string());
        formatter.detail("Merge time", &format!("{} ms", summary.merge_ms));
        formatter.detail("Write time", &format!("{} ms", summary.write_ms));
        formatter.detail("Issues", &report.issues.len().to_string());
    }
}
