use std::{fs, process::ExitCode};

use clap::{Parser, ValueEnum};
use whilst::{error::Error, get_result, interpreter::lexer::tokenize, parse_source};

/// whilst is a tiny imperative language with numbers, assignment, print,
/// if/else and while loops.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells whilst to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the final value
    /// of a whilst script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// What to do with the script.
    #[arg(long, value_enum, default_value_t = Emit::Run)]
    emit: Emit,

    contents: String,
}

/// Output modes of the command line tool.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Emit {
    /// Print the token list, one token per line.
    Tokens,
    /// Print the syntax tree.
    Ast,
    /// Run the script.
    Run,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let outcome = match args.emit {
        Emit::Tokens => print_tokens(&script),
        Emit::Ast => parse_source(&script).map(|program| println!("{program:#?}")),
        Emit::Run => get_result(&script, args.pipe_mode).map(|_| ()),
    };

    if let Err(e) = outcome {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Prints one token per line, prefixed with its source line.
fn print_tokens(script: &str) -> Result<(), Error> {
    for (token, line) in tokenize(script)? {
        println!("{line}: {token:?}");
    }
    Ok(())
}
