//! CLI argument parsing for pdfmc.
//!
//! This module defines the command-line interface structure using `clap`.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmc::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! println!("{} explicit files", cli.files.len());
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_OUTPUT, MergeOptions};
use crate::error::Result;

/// Merge PDF files from explicit paths and folders into a single document.
///
/// Explicit files are merged first, in the order given, followed by the PDF
/// files found in each folder. Inputs that do not exist or are not PDFs are
/// skipped with a warning.
#[derive(Parser, Debug)]
#[command(name = "pdfmc")]
#[command(version)]
#[command(about = "Merge PDF files from explicit paths and folders into a single document", long_about = None)]
#[command(author)]
pub struct Cli {
    /// Input PDF files to merge (in order)
    ///
    /// Examples:
    ///   pdfmc -i cover.pdf body.pdf -o book.pdf
    #[arg(short = 'i', long = "files", value_name = "FILE", num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Folders to scan for PDF files
    ///
    /// Files found in a folder are merged in file-name order, after all
    /// explicit files. Use --recursive to include subfolders.
    #[arg(short = 'f', long = "folders", value_name = "DIR", num_args = 1..)]
    pub folders: Vec<PathBuf>,

    /// Output PDF file path
    #[arg(
        short = 'o',
        long = "output_file",
        visible_alias = "output-file",
        value_name = "FILE",
        default_value = DEFAULT_OUTPUT
    )]
    pub output_file: PathBuf,

    /// Dry run - list the files that would be merged without creating output
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Scan folders recursively
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Leave page content streams as they are instead of Flate-encoding them
    #[arg(long)]
    pub no_compress: bool,

    /// Keep structurally identical objects instead of merging them
    #[arg(long)]
    pub no_dedup: bool,

    /// Verbose output - show per-file details and statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    ///
    /// Only errors and warnings will be printed. The file list of a dry run
    /// is still shown.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print a JSON report of the run on stdout
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Convert CLI arguments to a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid.
    pub fn to_config(&self) -> Result<Config> {
        let config = Config {
            files: self.files.clone(),
            folders: self.folders.clone(),
            recursive: self.recursive,
            output: self.output_file.clone(),
            dry_run: self.dry_run,
            verbose: self.verbose,
            quiet: self.quiet,
            json: self.json,
            options: MergeOptions {
                compress: !self.no_compress,
                deduplicate: !self.no_dedup,
            },
        };

        config.validate()?;
        Ok(config)
    }
}
