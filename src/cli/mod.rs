pub mod completions;
pub mod convert;

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::error::Result;
use crate::output::Printer;

/// ase2css - Convert Adobe Swatch Exchange palettes to CSS custom properties
#[derive(Parser, Debug)]
#[command(name = "ase2css")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input .ase file
    #[arg(required_unless_present = "completions")]
    pub input: Option<PathBuf>,

    /// Output .css file
    #[arg(required_unless_present = "completions")]
    pub output: Option<PathBuf>,

    /// Suppress status output
    #[arg(long, short)]
    pub quiet: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let printer = if cli.quiet {
        Printer::quiet()
    } else {
        Printer::new()
    };

    match (cli.completions, cli.input, cli.output) {
        (Some(shell), _, _) => completions::run(shell),
        (None, Some(input), Some(output)) => {
            convert::run(&convert::ConvertArgs { input, output }, &printer).map(|_| ())
        }
        // clap rejects a missing input or output before we get here
        _ => Ok(()),
    }
}
