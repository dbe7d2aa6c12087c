//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use serde::Serialize;

use swordle_core::{ReadStatus, Statistics};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// What `swordle today` shows
#[derive(Debug, Clone, Serialize)]
pub struct TodayView {
    pub date: String,
    pub book_and_chapter: Option<String>,
    pub link: Option<String>,
    pub status: ReadStatus,
    /// Verse text from the daily scripture, when it was fetched
    pub text: Option<String>,
}

/// What `swordle read` shows
#[derive(Debug, Clone, Serialize)]
pub struct ReadView {
    pub date: String,
    pub book_and_chapter: String,
    pub link: Option<String>,
    /// False when today had already been counted
    pub recorded: bool,
    pub statistics: Statistics,
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print today's chapter and whether it was read
    pub fn print_today(&self, view: &TodayView) {
        match self.format {
            OutputFormat::Human => {
                println!("swordle {}", view.date);
                println!();
                match view.book_and_chapter {
                    Some(ref chapter) => println!("Chapter: {}", chapter),
                    None => println!("Chapter: (unavailable)"),
                }
                if let Some(ref link) = view.link {
                    println!("Link:    {}", link);
                }
                println!("Status:  {}", status_label(view.status));
                if let Some(ref text) = view.text {
                    println!();
                    println!("{}", text);
                }
            }
            OutputFormat::Json => print_json(view),
            OutputFormat::Quiet => {
                if let Some(ref chapter) = view.book_and_chapter {
                    println!("{}", chapter);
                }
            }
        }
    }

    /// Print the outcome of marking a chapter read
    pub fn print_read(&self, view: &ReadView) {
        match self.format {
            OutputFormat::Human => {
                if view.recorded {
                    println!("✓ Read {} on {}", view.book_and_chapter, view.date);
                } else {
                    println!(
                        "Already read today ({}). Reading it again does not change your streak.",
                        view.book_and_chapter
                    );
                }
                if let Some(ref link) = view.link {
                    println!("  {}", link);
                }
                println!();
                self.print_statistics(&view.statistics);
            }
            OutputFormat::Json => print_json(view),
            OutputFormat::Quiet => {
                println!("{}", view.statistics.streak);
            }
        }
    }

    /// Print streak statistics
    pub fn print_statistics(&self, stats: &Statistics) {
        match self.format {
            OutputFormat::Human => {
                println!("Statistics");
                println!("==========");
                println!("  Current streak: {}", stats.streak);
                println!("  Max streak:     {}", stats.max_streak);
                println!("  Total:          {}", stats.total);
                println!(
                    "  Last read:      {}",
                    stats
                        .last_read
                        .map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| "never".to_string())
                );
                if !stats.book_and_chapter.is_empty() {
                    println!("  Last chapter:   {}", stats.book_and_chapter);
                }
            }
            OutputFormat::Json => print_json(stats),
            OutputFormat::Quiet => {
                println!("{}", stats.streak);
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print an informational message (stderr in human mode so stdout stays clean)
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => eprintln!("{}", msg),
            OutputFormat::Json | OutputFormat::Quiet => {}
        }
    }
}

fn status_label(status: ReadStatus) -> &'static str {
    match status {
        ReadStatus::ReadToday => "read today",
        ReadStatus::NotReadToday => "not read yet",
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to encode JSON output: {}", e),
    }
}
