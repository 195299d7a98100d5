use clap::Parser;
use ludwieg::cli::{Cli, Commands};
use ludwieg::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().quiet(cli.quiet);

    match cli.command {
        Commands::Check(args) => {
            ludwieg::cli::check::run(args, &printer)?;
        }
        Commands::Show(args) => ludwieg::cli::show::run(args, &printer)?,
        Commands::Fmt(args) => ludwieg::cli::fmt::run(args, &printer)?,
        Commands::Init(args) => ludwieg::cli::init::run(args, &printer)?,
        Commands::Completions(args) => ludwieg::cli::completions::run(args)?,
    }

    Ok(())
}
