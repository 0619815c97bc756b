mod repl;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordmath::runner::Runner;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// run a file
    Run {
        #[arg(name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Run { file }) => {
            let program = fs::read_to_string(&file)
                .with_context(|| format!("could not read {}", file.display()))?;
            let mut runner = Runner::new();
            runner.run(&program)?;
        }
        None => {
            repl::start();
        }
    }
    Ok(())
}
