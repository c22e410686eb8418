use clap::Parser;
use ase2css::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = ase2css::cli::run(cli) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}
