//! # cheesepp
//!
//! cheesepp is a tree-walking interpreter for Cheese++, a tiny,
//! cheese-flavoured toy language. It parses source text framed by
//! `Cheese`/`NoCheese` into an abstract syntax tree and executes the tree
//! directly, with a single flat variable environment, printing via
//! `Wensleydale`, repeat-until loops and a debug command that echoes the
//! program back at itself.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{evaluator::core::Runtime, lexer, parser::core::parse_program, transform},
};

/// Defines the structure of parsed code.
///
/// This module declares the AST node types that represent the semantic
/// structure of a Cheese++ program as a tree, together with the `Position`
/// type every node carries for error reporting. The AST is built by the
/// transformer and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source positions to AST nodes.
/// - Keeps the node set closed so every walk is checked for exhaustiveness.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or executing code. Parsing and evaluation are separate failure domains
/// with one enum each; both carry positions and human-readable messages.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions and detailed messages for context.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, lowering, evaluation and the
/// value representation to provide the complete pipeline: source text →
/// tokens → parse tree → AST → program output.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, transformer, evaluator
///   and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses Cheese++ source text into a [`Program`].
///
/// Runs the full front half of the pipeline: the source is tokenized,
/// parsed into a concrete parse tree and lowered into the AST. Parsing is
/// deterministic — the same source always yields a structurally identical
/// program.
///
/// # Errors
/// Returns a [`ParseError`] when the source is lexically or syntactically
/// invalid.
///
/// # Examples
/// ```
/// // A well-formed program parses into its statements.
/// let program = cheesepp::parse("Cheese x = 1 Brie NoCheese").unwrap();
/// assert_eq!(program.statements.len(), 1);
///
/// // A program that never opens with 'Cheese' does not parse.
/// assert!(cheesepp::parse("x = 1 Brie NoCheese").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = lexer::lex(source)?;
    let mut iter = tokens.iter().peekable();

    let tree = parse_program(&mut iter)?;
    transform::lower_program(&tree)
}

/// Parses and runs a program, returning its captured output.
///
/// Convenience wrapper over [`parse`] and [`Runtime::run`] for callers that
/// want the program's standard-output text as a string — the REPL, the
/// demo tests and embedders. Each call runs against a fresh environment.
///
/// # Errors
/// Returns the underlying [`ParseError`] or
/// [`RuntimeError`](error::RuntimeError), boxed, when parsing or execution
/// fails.
///
/// # Examples
/// ```
/// let source = "Cheese\n Wensleydale(SwissHello WorldSwiss) Brie\nNoCheese";
/// let output = cheesepp::interpret(source).unwrap();
///
/// assert_eq!(output, "Hello World\n");
///
/// // Reading a variable that was never bound is a runtime error.
/// let source = "Cheese Wensleydale(Glyn(nope)) Brie NoCheese";
/// assert!(cheesepp::interpret(source).is_err());
/// ```
pub fn interpret(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    let program = parse(source)?;

    let mut runtime = Runtime::with_output(Vec::new());
    runtime.run(&program, source)?;

    Ok(String::from_utf8(runtime.into_output())?)
}
