use clap::Parser;
use miette::Result;

use dialect::cli::{Cli, Commands};
use dialect::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().quiet(cli.quiet);

    match cli.command {
        Commands::Extract(args) => dialect::cli::extract::run(args, &printer)?,
        Commands::Generate(args) => dialect::cli::generate::run(args, &printer)?,
        Commands::List(args) => dialect::cli::list::run(args, &printer)?,
        Commands::Completions(args) => dialect::cli::completions::run(args)?,
    }

    Ok(())
}
