//! Output formatting for dq-check.
//!
//! Provides terminal and JSON report formatters. Color is disabled by the
//! `--no-color` flag or the `NO_COLOR` environment variable.

use crate::cli::args::OutputFormat;
use crate::engine::report::{CheckOutcome, RunReport};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a run report into a string
    fn format(&self, report: &RunReport) -> String;
}

/// Terminal (human-readable) formatter
pub struct TextFormatter {
    color: bool,
    verbose: bool,
    quiet: bool,
}

impl TextFormatter {
    pub fn new(color: bool, verbose: bool, quiet: bool) -> Self {
        TextFormatter {
            color,
            verbose,
            quiet,
        }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.colorize(text, "32")
    }

    fn red(&self, text: &str) -> String {
        self.colorize(text, "31")
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &RunReport) -> String {
        let mut output = String::new();
        let summary = report.summary();

        output.push_str("dq-check report\n");
        output.push_str(
            "--------------------------------------------------------------------------------\n",
        );

        for record in &report.records {
            let label = record.name.as_deref().unwrap_or(&record.query);

            let (status, detail) = match &record.outcome {
                CheckOutcome::Pass {
                    actual,
                    duration_ms,
                } => {
                    if self.quiet {
                        continue;
                    }
                    let detail = if self.verbose {
                        format!("{} = {} ({}ms)", label, actual, duration_ms)
                    } else {
                        label.to_string()
                    };
                    (self.green("[PASS]"), detail)
                }
                CheckOutcome::Mismatch {
                    actual,
                    duration_ms,
                } => {
                    let detail = if self.verbose {
                        format!(
                            "{}: expected {}, got {} ({}ms)",
                            label, record.expected, actual, duration_ms
                        )
                    } else {
                        format!("{}: expected {}, got {}", label, record.expected, actual)
                    };
                    (self.red("[FAIL]"), detail)
                }
                CheckOutcome::Error {
                    message,
                    duration_ms,
                } => {
                    let detail = if self.verbose {
                        format!("{}: {} ({}ms)", label, message, duration_ms)
                    } else {
                        format!("{}: {}", label, message)
                    };
                    (self.red("[ERROR]"), detail)
                }
            };

            output.push_str(&format!("{} {}\n", status, detail));
        }

        output.push_str(
            "--------------------------------------------------------------------------------\n",
        );
        output.push_str(&format!(
            "{} passed, {} failed, {} errored, {} total ({}ms)\n",
            summary.passed,
            summary.failed,
            summary.errored,
            summary.total,
            summary.total_duration_ms
        ));

        output
    }
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> String {
        let serialized = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        serialized.unwrap_or_else(|_| "{}".to_string())
    }
}

/// Select a formatter for the requested output format
pub fn get_formatter(
    format: OutputFormat,
    no_color: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => {
            let color = !no_color && std::env::var_os("NO_COLOR").is_none();
            Box::new(TextFormatter::new(color, verbose, quiet))
        }
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}
