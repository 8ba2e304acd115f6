use std::iter::Peekable;

use crate::{
    ast::Position,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token, which must equal `expected`.
///
/// Used for all fixed punctuation and keywords inside productions. The
/// `describe` text names the expected token in the error message, e.g.
/// `"'(' after 'Wensleydale'"`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `expected`: The token that must come next.
/// - `describe`: Human-readable description for the error message.
/// - `at`: Position of the enclosing construct, reported when input ends.
///
/// # Returns
/// The position of the consumed token.
///
/// # Errors
/// Returns a `ParseError` if the next token differs or input ends.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    describe: &str,
                                                    at: Position)
                                                    -> ParseResult<Position>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((token, position)) if token == expected => Ok(*position),
        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { expected: describe.to_string(),
                                              found:    format!("{token:?}"),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: at }),
    }
}

/// Consumes the statement terminator `Brie`.
///
/// Kept separate from [`expect`] because a missing terminator has its own
/// error variant with the wording the language has always used.
///
/// # Errors
/// Returns [`ParseError::MissingStatementEnd`] if the next token is not
/// `Brie`, or [`ParseError::UnexpectedEndOfInput`] if input ends.
pub(in crate::interpreter::parser) fn expect_brie<'a, I>(tokens: &mut Peekable<I>,
                                                         at: Position)
                                                         -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Brie, _)) => Ok(()),
        Some((token, position)) => {
            Err(ParseError::MissingStatementEnd { found:    format!("{token:?}"),
                                                  position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: at }),
    }
}

/// Parses a plain identifier and returns it as a leaf with its position.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the
/// input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              at: Position)
                                                              -> ParseResult<(Token, Position)>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((token @ Token::Identifier(_), position)) => Ok((token.clone(), *position)),
        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { expected: "an identifier".to_string(),
                                              found:    format!("{token:?}"),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: at }),
    }
}
