use std::iter::Peekable;

use crate::{
    ast::Position,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            statement::parse_statement,
            tree::{ParseNode, Rule},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program from the token stream.
///
/// Every program must open with `Cheese` and close with `NoCheese`; anything
/// else at either end is an error, as are leftover tokens after the closing
/// keyword. Between the two delimiters the function parses statements in
/// order and collects them as the children of a single
/// [`Rule::Program`] node.
///
/// Grammar: `program := "Cheese" statement* "NoCheese"`
///
/// Parsing is pure and total over well-formed token streams — nothing is
/// evaluated here.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parse tree rooted at the program node.
///
/// # Errors
/// - [`ParseError::MissingProgramStart`] when `Cheese` is absent.
/// - [`ParseError::MissingProgramEnd`] when input ends before `NoCheese`.
/// - [`ParseError::TrailingTokens`] when tokens follow `NoCheese`.
/// - Any error surfaced by statement parsing.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let position = match tokens.next() {
        Some((Token::Cheese, position)) => *position,
        Some((_, position)) => {
            return Err(ParseError::MissingProgramStart { position: *position });
        },
        None => return Err(ParseError::MissingProgramStart { position: Position::start() }),
    };

    let mut children = Vec::new();
    let mut last = position;
    loop {
        match tokens.peek() {
            Some((Token::NoCheese, _)) => {
                tokens.next();
                break;
            },
            Some((_, statement_position)) => {
                last = *statement_position;
                children.push(parse_statement(tokens)?);
            },
            None => return Err(ParseError::MissingProgramEnd { position: last }),
        }
    }

    if let Some((token, trailing_position)) = tokens.next() {
        return Err(ParseError::TrailingTokens { found:    format!("{token:?}"),
                                                position: *trailing_position, });
    }

    Ok(ParseNode::Rule { rule: Rule::Program,
                         children,
                         position })
}
