//! CLI command implementations.

pub mod extract;

use clap::Parser;

use super::output::write_output;
use super::utils::get_input_text;
use crate::collab::LengthBounds;
use crate::Result;

/// Show summarization length bounds for a text
#[derive(Parser, Debug)]
pub struct BoundsArgs {
    /// Input text to measure
    #[arg(short, long)]
    pub text: Option<String>,

    /// Read input from file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,
}

/// Print the derived summarization bounds for the input text.
pub fn run_bounds(args: &BoundsArgs) -> Result<()> {
    let text = get_input_text(args.text.as_deref(), args.file.as_deref())?;
    let bounds = LengthBounds::for_text(&text);
    let words = text.split_whitespace().count();
    write_output(
        &format!(
            "words: {words}\nmin_words: {}\nmax_words: {}\n",
            bounds.min_words, bounds.max_words
        ),
        None,
    )
}

/// Print version and backend availability.
pub fn run_info() -> Result<()> {
    use crate::Annotator;

    let annotator = crate::annotate::HeuristicAnnotator::new();
    let mut out = String::new();
    out.push_str(&format!("sked {}\n\n", env!("CARGO_PKG_VERSION")));
    out.push_str("ANNOTATION BACKENDS:\n");
    out.push_str(&format!(
        "  {} {}\n",
        if annotator.is_available() { "✓" } else { "✗" },
        annotator.name()
    ));
    out.push_str("\nOUTPUT FORMATS: human, json\n");
    write_output(&out, None)
}
