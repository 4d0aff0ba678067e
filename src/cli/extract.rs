//! Extract command implementation.
//!
//! Prints the merged productions of a dialect to stdout.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::render::{render_entries, render_json};

use super::{run_extraction, GrammarArgs};

/// Print the merged productions of a dialect
#[derive(Args, Debug)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub grammar: GrammarArgs,

    /// Print a JSON object of name to text instead of name=text entries
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ExtractArgs, printer: &Printer) -> Result<()> {
    let extraction = run_extraction(&args.grammar, printer)?.extraction;
    let productions = &extraction.productions;

    if args.json {
        println!("{}", render_json(productions)?);
    } else {
        print!("{}", render_entries(productions));
    }

    printer.status(
        "Finished",
        &plural(productions.len(), "production", "productions"),
    );

    Ok(())
}
