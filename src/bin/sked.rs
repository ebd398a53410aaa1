//! sked - schedule extraction CLI.
//!
//! ```bash
//! # Basic extraction
//! sked extract "Meeting with Bob next Monday at 3pm."
//!
//! # Deterministic anchor and JSON output
//! sked extract --file notes.txt --today 03-03-25 --format json
//!
//! # Shorthand: bare arguments run extract
//! sked "Report due next week. Also discuss budget."
//! ```

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use sked::cli::commands::{self, extract};
use sked::cli::parser::{Cli, Commands, OutputFormat};

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Extract(args)) => extract::run(&args),
        Some(Commands::Bounds(args)) => commands::run_bounds(&args),
        Some(Commands::Info) => commands::run_info(),
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "sked", &mut std::io::stdout());
            Ok(())
        }
        None => {
            if cli.text.is_empty() {
                Cli::command().print_help().ok();
                return ExitCode::FAILURE;
            }
            // Bare arguments are shorthand for `sked extract TEXT`.
            let args = extract::ExtractArgs {
                text: Some(cli.text.join(" ")),
                file: None,
                today: None,
                format: OutputFormat::Human,
                corpus: Vec::new(),
                output: None,
                quiet: false,
            };
            extract::run(&args)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
