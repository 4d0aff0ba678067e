pub mod completions;
pub mod extract;
pub mod generate;
pub mod list;

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::discovery::{extract_productions, Extraction, Manifest};
use crate::error::{DialectError, Result};
use crate::output::{display_path, plural, Printer};

/// dialect - Grammar production extraction for SQL dialect parsers
#[derive(Parser, Debug)]
#[command(name = "dialect")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress status output on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the merged productions of a dialect
    Extract(extract::ExtractArgs),

    /// Write the merged production file for a dialect
    Generate(generate::GenerateArgs),

    /// List merged production names
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Grammar tree arguments shared by the extraction commands.
#[derive(Args, Debug, Clone)]
pub struct GrammarArgs {
    /// Root grammar directory
    pub root: PathBuf,

    /// Dialect directory (must be inside the root)
    pub dialect: PathBuf,

    /// Fragment file extension (default: from dialect.yaml, else ftl)
    #[arg(long)]
    pub extension: Option<String>,

    /// License header file (default: from dialect.yaml, else src/resources/license.txt)
    #[arg(long)]
    pub license: Option<PathBuf>,
}

/// A finished extraction with the configuration it ran under.
pub(crate) struct Extracted {
    pub manifest: Manifest,
    pub license: Option<String>,
    pub extraction: Extraction,
}

/// Load the manifest and run the extraction, reporting each file read.
pub(crate) fn run_extraction(args: &GrammarArgs, printer: &Printer) -> Result<Extracted> {
    let (mut manifest, _) = Manifest::discover(&args.root)?;
    if let Some(extension) = &args.extension {
        manifest.extension = extension.clone();
    }

    let license = match &args.license {
        Some(path) => Some(fs::read_to_string(path).map_err(|e| DialectError::Io {
            path: path.clone(),
            message: format!("Failed to read license: {}", e),
        })?),
        None => manifest.license_text(&args.root)?,
    };

    printer.status("Extracting", &display_path(&args.dialect));
    let options = manifest.options().with_license(license.clone());
    let extraction = extract_productions(&args.root, &args.dialect, &options)?;

    for source in &extraction.sources {
        printer.status(
            "Reading",
            &format!(
                "{} {}",
                display_path(&source.path),
                printer.dim(&format!(
                    "({})",
                    plural(source.productions, "production", "productions")
                ))
            ),
        );
        for name in &source.overridden {
            printer.info("Overriding", name);
        }
    }

    for table in &extraction.tables {
        printer.status(
            "Reading",
            &format!(
                "{} {}",
                display_path(&table.path),
                printer.dim(&format!("({})", plural(table.entries, "token", "tokens")))
            ),
        );
        for name in &table.overridden {
            printer.info("Overriding", name);
        }
    }

    for keyword in extraction.tokens.undefined_non_reserved() {
        printer.warning(
            "Undefined",
            &format!("non-reserved keyword {} is not in any keywords table", keyword.name),
        );
    }

    if extraction.sources.is_empty() && extraction.tables.is_empty() {
        printer.warning(
            "Empty",
            &format!("no .{} files on the path to the dialect", manifest.extension),
        );
    }

    Ok(Extracted {
        manifest,
        license,
        extraction,
    })
}
