//! Shell completions generation.

use clap_complete::Shell;

pub fn run(shell: Shell) -> crate::error::Result<()> {
    let mut cmd = <super::Cli as clap::CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "ase2css", &mut std::io::stdout());
    Ok(())
}
