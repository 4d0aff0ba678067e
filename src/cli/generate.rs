//! Generate command implementation.
//!
//! Writes the merged production file for a dialect, prefixed with the
//! license header and the merged token assignments.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::{render_productions, write_output};

use super::{run_extraction, Extracted, GrammarArgs};

/// Write the merged production file for a dialect
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub grammar: GrammarArgs,

    /// Output file (default: from dialect.yaml, relative to the dialect directory)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let Extracted {
        manifest,
        license,
        extraction,
    } = run_extraction(&args.grammar, printer)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| manifest.output_path(&args.grammar.dialect));

    let content = render_productions(&extraction, license.as_deref());
    write_output(&output, &content)?;

    printer.status(
        "Generated",
        &format!(
            "{} ({}, {})",
            display_path(&output),
            plural(extraction.productions.len(), "production", "productions"),
            plural(extraction.override_count(), "override", "overrides")
        ),
    );

    Ok(())
}
