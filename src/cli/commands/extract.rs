//! Extract command - run the schedule pipeline over input text.

use clap::Parser;
use is_terminal::IsTerminal;

use super::super::output::{log_info, render_human, render_json, write_output};
use super::super::parser::OutputFormat;
use super::super::utils::{get_input_text, parse_anchor};
use crate::collab::{combine_with_stored, DocumentStore, InMemoryStore};
use crate::{Result, SchedulePipeline};

/// Extract schedule records from text
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Input text to process
    #[arg(short, long)]
    pub text: Option<String>,

    /// Read input from file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// Reference "today" date (DD-MM-YY or YYYY-MM-DD, defaults to now)
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Corpus files concatenated ahead of the input (deduplicated)
    #[arg(long, value_name = "PATH")]
    pub corpus: Vec<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Suppress progress messages
    #[arg(short, long)]
    pub quiet: bool,
}

/// Run the extraction pipeline per the parsed arguments.
pub fn run(args: &ExtractArgs) -> Result<()> {
    let text = get_input_text(args.text.as_deref(), args.file.as_deref())?;

    let fragments: Vec<String> = args
        .corpus
        .iter()
        .map(std::fs::read_to_string)
        .collect::<std::io::Result<_>>()?;
    let store = InMemoryStore::with_bodies(fragments);
    let combined = combine_with_stored(&text, &store.bodies()?);

    let today = match &args.today {
        Some(raw) => parse_anchor(raw)?,
        None => chrono::Local::now().date_naive(),
    };

    let pipeline = SchedulePipeline::default();
    let records = pipeline.process(&combined, today);
    log_info(
        &format!("{} record(s) extracted", records.len()),
        args.quiet,
    );

    let rendered = match args.format {
        OutputFormat::Human => render_human(&records),
        OutputFormat::Json => {
            let pretty = args.output.is_none() && std::io::stdout().is_terminal();
            render_json(&records, pretty)?
        }
    };
    write_output(&rendered, args.output.as_deref())
}
