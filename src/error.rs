/// Parsing errors.
///
/// Defines all error types that can occur while lexing source text or while
/// parsing the token stream. Parse errors cover unrecognized characters,
/// unterminated strings, missing program delimiters and any other mismatch
/// detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing a program:
/// undefined variables, type mismatches, division by zero, malformed
/// conditions and failures of the output sink.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
