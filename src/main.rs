use std::{path::PathBuf, process};

use ciphercalc::{cipher, evaluate, files};
use clap::{Args, Parser, Subcommand};

/// ciphercalc is a small toolbox for evaluating arithmetic expressions and
/// shifting text with the Caesar cipher.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates an arithmetic expression and prints the result.
    Eval {
        /// The expression to evaluate, e.g. "2+3*(4-1)".
        expression: String,
    },
    /// Encrypts text with the Caesar cipher.
    Encrypt {
        #[command(flatten)]
        options: CipherOptions,
    },
    /// Decrypts text that was encrypted with the Caesar cipher.
    Decrypt {
        #[command(flatten)]
        options: CipherOptions,
    },
}

#[derive(Args, Debug)]
struct CipherOptions {
    /// The number of positions to shift each letter.
    #[arg(short, long, allow_negative_numbers = true)]
    shift: i32,

    /// Tells ciphercalc to read the input from a file instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Writes the transformed text to a file instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// The text to transform, or an input file path with `--file`.
    contents: String,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Eval { expression } => match evaluate(&expression) {
            Ok(result) => println!("{result}"),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            },
        },
        Command::Encrypt { options } => run_cipher(&options, false),
        Command::Decrypt { options } => run_cipher(&options, true),
    }
}

fn run_cipher(options: &CipherOptions, decrypting: bool) {
    let text = if options.file {
        files::read_from_file(&options.contents).unwrap_or_else(|e| {
            eprintln!("Failed to read the input file '{}': {e}", options.contents);
            process::exit(1);
        })
    } else {
        options.contents.clone()
    };

    let transformed = if decrypting {
        cipher::decrypt(&text, options.shift)
    } else {
        cipher::encrypt(&text, options.shift)
    };

    match &options.output {
        Some(path) => {
            if let Err(e) = files::write_to_file(path, &transformed) {
                eprintln!("Failed to write the output file '{}': {e}", path.display());
                process::exit(1);
            }
        },
        None => println!("{transformed}"),
    }
}
