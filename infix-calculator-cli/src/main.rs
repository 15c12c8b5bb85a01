mod driver;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use infix_calculator::interpreter::{calculate, convert, tokens_to_string};
use log::info;
use std::io;
use std::path::PathBuf;

/// Evaluates arithmetic expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    #[clap(subcommand)]
    command: Command,

    #[clap(flatten)]
    verbose: Verbosity,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates a single expression
    Eval {
        /// The expression to evaluate
        expression: String,

        /// Also print the expression in postfix notation
        #[clap(long)]
        postfix: bool,
    },
    /// Evaluates every non-empty line of a file
    File {
        /// Path to a file with one expression per line
        path: Option<PathBuf>,
    },
    /// Reads expressions from standard input until a line containing only `0`
    Interactive,
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match args.command {
        Command::Eval {
            expression,
            postfix,
        } => {
            if postfix {
                let postfix_tokens = convert(&expression)?;
                println!("{}", tokens_to_string(&postfix_tokens));
            }
            let value = calculate(&expression)?;
            println!("{} = {}", expression, value);
        }
        Command::File { path } => {
            let stdout = io::stdout();
            driver::run_file(path.as_deref(), &mut stdout.lock())?;
        }
        Command::Interactive => {
            info!("Enter an expression per line, or 0 to quit");
            let stdin = io::stdin();
            let stdout = io::stdout();
            driver::run_interactive(stdin.lock(), &mut stdout.lock())?;
        }
    }

    Ok(())
}
