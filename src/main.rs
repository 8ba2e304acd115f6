use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use cheesepp::interpreter::evaluator::core::Runtime;
use clap::Parser;

/// cheesepp is a tree-walking interpreter for Cheese++, a tiny,
/// cheese-flavoured toy language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a Cheese++ script. Starts an interactive prompt when omitted.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(path) => run_file(&path),
        None => repl(),
    }
}

/// Runs a script file against standard output.
///
/// Any failure — unreadable file, parse error, runtime error — is reported
/// on stderr and exits nonzero.
fn run_file(path: &Path) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
                                             eprintln!("Failed to read the input file '{}'. \
                                                        Perhaps this file does not exist?",
                                                       path.display());
                                             std::process::exit(1);
                                         });

    let program = match cheesepp::parse(&source) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    if let Err(e) = Runtime::new().run(&program, &source) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Runs the interactive prompt.
///
/// Each line must be a complete `Cheese`…`NoCheese` program and runs
/// against a fresh environment; errors are printed and the prompt keeps
/// going. Ends on end of input.
fn repl() {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("cheese++> ");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let source = line.trim();
        if source.is_empty() {
            continue;
        }

        match cheesepp::interpret(source) {
            Ok(output) => print!("{output}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
