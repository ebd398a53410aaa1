//! CLI argument parsing and structure definitions.

use clap::{Parser, Subcommand, ValueEnum};

use super::commands;

/// Schedule extraction CLI - paragraphs to structured calendar records.
#[derive(Parser)]
#[command(name = "sked")]
#[command(
    author,
    version,
    about = "Schedule extraction CLI - paragraphs to structured calendar records",
    long_about = r#"
sked - natural-language schedule extraction

Turns a paragraph describing plans, meetings or deadlines into a list of
records with Event, Date (DD-MM-YY) and Time (HH:MM) fields. Dates
resolve against a reference "today" and carry forward across clauses
that omit one; cancellations are flagged.

EXAMPLES:
  sked extract "Meeting with Bob next Monday at 3pm."
  sked extract --file notes.txt --today 03-03-25 --format json
  echo "Report due next week. Also discuss budget." | sked extract
  sked bounds --file notes.txt
  sked info
"#
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Text to process (shorthand for `sked extract`)
    #[arg(trailing_var_arg = true)]
    pub text: Vec<String>,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Extract schedule records from text
    #[command(visible_alias = "x")]
    Extract(commands::extract::ExtractArgs),

    /// Show summarization length bounds for a text
    #[command(visible_alias = "b")]
    Bounds(commands::BoundsArgs),

    /// Show version and backend info
    #[command(visible_alias = "i")]
    Info,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Output format for extraction results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table
    Human,
    /// JSON array of records
    Json,
}
