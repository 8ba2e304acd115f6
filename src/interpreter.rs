/// The evaluator module executes AST nodes for their effects.
///
/// The evaluator walks the AST in a single depth-first pass, evaluates
/// expressions to values, maintains the variable environment and drives
/// control flow. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Executes statements strictly in program order.
/// - Owns the single flat environment of a program run.
/// - Reports runtime errors such as undefined variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes Cheese++ source text.
///
/// The lexer reads the raw source and produces a stream of tokens: keywords,
/// identifiers, numeric literals, Swiss strings and the two spellings of each
/// operator. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Captures Swiss string content verbatim, accents included.
/// - Reports lexical errors for input no token of the language matches.
pub mod lexer;
/// The parser module builds a concrete parse tree from tokens.
///
/// The parser drives the grammar against the token stream produced by the
/// lexer and constructs a generic, rule-tagged parse tree. It validates the
/// `Cheese`/`NoCheese` program frame and every production in between, but
/// attaches no semantics of its own.
///
/// # Responsibilities
/// - Converts tokens into rule-tagged parse nodes.
/// - Enforces statement terminators and block keywords, reporting mismatches
///   with expected-versus-found detail and a position.
/// - Never evaluates; parsing is pure over the token stream.
pub mod parser;
/// The transform module lowers the parse tree into the AST.
///
/// The transformer maps each grammar production to exactly one AST variant.
/// It collapses the three variable-binding surface forms into one statement
/// shape, normalizes operator tokens to their tags and decodes string
/// escapes, so the AST carries fully resolved literal values.
///
/// # Responsibilities
/// - Total, side-effect-free mapping from parse nodes to AST nodes.
/// - Normalizes syntax-level variation out of the tree.
pub mod transform;
/// The value module defines the runtime data types for evaluation.
///
/// A Cheese++ value is either a number or a string; there is nothing else.
/// Comparisons yield booleans, but those are consumed by control flow on the
/// spot and never stored.
///
/// # Responsibilities
/// - Defines the two-case `Value` union.
/// - Renders values for printing and checks operand types, failing loudly
///   instead of coercing.
pub mod value;
