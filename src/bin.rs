use std::{path::PathBuf, process::ExitCode};

use bf2mips::driver::compile_file;
use clap::Parser;
use log::error;

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert a brainfuck file to MIPS assembly.")]
struct Cli {
    /// The input file.
    input: PathBuf,

    /// File to print assembly to (defaults to the input with an .asm extension).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, ...).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    stderrlog::new()
        .verbosity(1 + cli.verbose as usize)
        .init()?;

    match compile_file(&cli.input, cli.output.as_deref()) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
