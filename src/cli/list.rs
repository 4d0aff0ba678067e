//! List command implementation.
//!
//! Prints the merged production names of a dialect, optionally with the
//! fragment file each definition came from. With `--tokens`, prints the
//! merged token tables instead.

use clap::Args;

use crate::discovery::Extraction;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::registry::TableKind;

use super::{run_extraction, GrammarArgs};

/// List merged production names
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub grammar: GrammarArgs,

    /// Show the fragment file of each definition
    #[arg(long)]
    pub origins: bool,

    /// Sort names alphabetically instead of definition order
    #[arg(long)]
    pub sort: bool,

    /// List token table entries instead of productions
    #[arg(long)]
    pub tokens: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let extraction = run_extraction(&args.grammar, printer)?.extraction;

    if args.tokens {
        return list_tokens(&args, &extraction, printer);
    }

    let mut productions: Vec<_> = extraction.productions.iter().collect();
    if args.sort {
        productions.sort_by(|a, b| a.name.cmp(&b.name));
    }

    for production in &productions {
        match (&production.origin, args.origins) {
            (Some(origin), true) => println!("{}\t{}", production.name, display_path(origin)),
            _ => println!("{}", production.name),
        }
    }

    printer.status(
        "Finished",
        &format!(
            "{} from {}",
            plural(productions.len(), "production", "productions"),
            plural(extraction.sources.len(), "file", "files")
        ),
    );

    Ok(())
}

/// Print `table<TAB>NAME` lines, plus the origin with `--origins`.
fn list_tokens(args: &ListArgs, extraction: &Extraction, printer: &Printer) -> Result<()> {
    let tokens = &extraction.tokens;
    let mut entries: Vec<_> = tokens
        .assignments()
        .into_iter()
        .flat_map(|(kind, table)| table.iter().map(move |k| (kind, k)))
        .chain(
            tokens
                .non_reserved
                .iter()
                .map(|k| (TableKind::NonReservedKeywords, k)),
        )
        .collect();
    if args.sort {
        entries.sort_by(|a, b| a.1.name.cmp(&b.1.name));
    }

    for (kind, keyword) in &entries {
        match (&keyword.origin, args.origins) {
            (Some(origin), true) => println!(
                "{}\t{}\t{}",
                kind.file_name(),
                keyword.name,
                display_path(origin)
            ),
            _ => println!("{}\t{}", kind.file_name(), keyword.name),
        }
    }

    printer.status(
        "Finished",
        &format!(
            "{} from {}",
            plural(entries.len(), "token", "tokens"),
            plural(extraction.tables.len(), "table", "tables")
        ),
    );

    Ok(())
}
