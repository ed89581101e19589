//! Message formatting and display.
//!
//! [`OutputFormatter`] is the terminal [`Reporter`]: resolved paths, progress
//! and informational messages go to stdout, warnings and errors go to stderr.
//!
//! # Examples
//!
//! ```
//! use pdfmc::output::{OutputFormatter, Reporter};
//!
//! let formatter = OutputFormatter::new(false, false);
//! formatter.info("Scanning folders...");
//! formatter.success("Operation completed");
//! formatter.error("Something went wrong");
//! ```

use std::io::{self, IsTerminal};
use std::path::Path;

use super::{MergeEvent, Reporter};
use crate::config::Config;

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational message.
    Info,
    /// Success message.
    Success,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
    /// Debug/verbose message.
    Debug,
}

impl MessageLevel {
    /// Whether messages of this level belong on the diagnostic stream.
    pub fn is_diagnostic(self) -> bool {
        matches!(self, Self::Warning | Self::Error)
    }
}

/// Output formatter with configurable verbosity.
pub struct OutputFormatter {
    /// Whether to suppress non-error output.
    quiet: bool,
    /// Whether to show verbose output.
    verbose: bool,
    /// Whether resolved paths are printed.
    listing: bool,
    /// Whether stdout gets ANSI colours.
    colored_stdout: bool,
    /// Whether stderr gets ANSI colours.
    colored_stderr: bool,
}

impl OutputFormatter {
    /// Create a new output formatter.
    ///
    /// # Arguments
    ///
    /// * `quiet` - Suppress non-error output
    /// * `verbose` - Show verbose output
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            listing: !quiet,
            colored_stdout: Self::should_use_color(io::stdout().is_terminal()),
            colored_stderr: Self::should_use_color(io::stderr().is_terminal()),
        }
    }

    /// Create a formatter from configuration.
    ///
    /// The resolved file list is printed whenever the configuration says
    /// output should be shown, which includes quiet dry runs. JSON mode
    /// keeps stdout free for the report.
    pub fn from_config(config: &Config) -> Self {
        let mut formatter = Self::new(config.quiet || config.json, config.verbose);
        formatter.listing = config.should_print() && !config.json;
        formatter
    }

    /// Colour only on a terminal with TERM set.
    fn should_use_color(is_terminal: bool) -> bool {
        is_terminal && std::env::var("TERM").is_ok()
    }

    /// Print a success message.
    ///
    /// Suppressed in quiet mode.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Success, message);
        }
    }

    /// Print a debug/verbose message.
    ///
    /// Only displayed in verbose mode.
    pub fn debug(&self, message: &str) {
        if self.verbose {
            self.print_message(MessageLevel::Debug, message);
        }
    }

    /// Print a labelled detail line.
    ///
    /// Only shown in verbose mode.
    pub fn detail(&self, label: &str, value: &str) {
        if self.verbose {
            println!("  {label}: {value}");
        }
    }

    /// Print a section header.
    ///
    /// Suppressed in quiet mode.
    pub fn section(&self, title: &str) {
        if !self.quiet {
            println!("\n{title}");
        }
    }

    /// Print a blank line.
    ///
    /// Suppressed in quiet mode.
    pub fn blank_line(&self) {
        if !self.quiet {
            println!();
        }
    }

    /// Print a `[current/total]` progress line.
    ///
    /// Suppressed in quiet mode.
    pub fn progress(&self, current: usize, total: usize, message: &str) {
        if !self.quiet {
            println!("  [{current}/{total}] {message}");
        }
    }

    /// Check if verbose output should be shown.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Render a message with its level prefix and, when enabled, colour.
    fn render(level: MessageLevel, message: &str, colored: bool) -> String {
        let (prefix, color_code) = match level {
            MessageLevel::Info => ("", ""),
            MessageLevel::Success => ("✓ ", "\x1b[32m"), // Green
            MessageLevel::Warning => ("⚠ ", "\x1b[33m"), // Yellow
            MessageLevel::Error => ("✗ ", "\x1b[31m"),   // Red
            MessageLevel::Debug => ("→ ", "\x1b[36m"),   // Cyan
        };

        if colored && !color_code.is_empty() {
            format!("{color_code}{prefix}{message}\x1b[0m")
        } else {
            format!("{prefix}{message}")
        }
    }

    /// Print a message on the stream its level belongs to.
    fn print_message(&self, level: MessageLevel, message: &str) {
        if level.is_diagnostic() {
            eprintln!("{}", Self::render(level, message, self.colored_stderr));
        } else {
            println!("{}", Self::render(level, message, self.colored_stdout));
        }
    }
}

impl Reporter for OutputFormatter {
    fn resolved(&self, path: &Path) {
        if self.listing {
            println!("{}", path.display());
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Info, message);
        }
    }

    fn warning(&self, message: &str) {
        self.print_message(MessageLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.print_message(MessageLevel::Error, message);
    }

    fn event(&self, event: &MergeEvent) {
        match event {
            MergeEvent::Started { total } => {
                self.blank_line();
                self.info(&format!("Merging {total} file(s)..."));
            }
            MergeEvent::FileStarted { path, .. } => {
                self.debug(&format!("Opening {}", path.display()));
            }
            MergeEvent::FileMerged {
                index,
                total,
                path,
                pages,
            } => {
                self.progress(*index, *total, &format!("{} ({pages} pages)", path.display()));
            }
            MergeEvent::FileSkipped {
                index, total, path, ..
            } => {
                self.progress(*index, *total, &format!("{} (skipped)", path.display()));
            }
            MergeEvent::Finished {
                files_merged,
                pages,
            } => {
                self.debug(&format!("{files_merged} file(s) merged, {pages} pages total"));
            }
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(false, false)
    }
}
