use std::iter::Peekable;

use crate::{
    ast::Position,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            tree::{ParseNode, Rule},
            utils::{expect, parse_identifier},
        },
    },
};

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, the comparison, and descends through sums and
/// products to atoms.
///
/// Grammar: `expression := comparison`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Propagates any error from the precedence levels below.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_comparison(tokens)
}

/// Parses an optional single comparison.
///
/// Grammar: `comparison := sum (CMP_OP sum)?`
///
/// Comparisons do not chain — `a < b < c` is rejected by the grammar, since
/// the boolean a comparison yields is not an operand.
fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let left = parse_sum(tokens)?;

    if let Some((token, position)) = tokens.peek()
       && is_comparison_token(token)
    {
        let (op, op_position) = (token.clone(), *position);
        tokens.next();
        let right = parse_sum(tokens)?;
        return Ok(binary(left, op, op_position, right));
    }

    Ok(left)
}

/// Parses a left-associative chain of additions and subtractions.
///
/// Grammar: `sum := product (("+" | "-") product)*`
fn parse_sum<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_product(tokens)?;

    while let Some((token @ (Token::Plus | Token::Minus), position)) = tokens.peek() {
        let (op, op_position) = (token.clone(), *position);
        tokens.next();
        let right = parse_product(tokens)?;
        left = binary(left, op, op_position, right);
    }

    Ok(left)
}

/// Parses a left-associative chain of multiplications and divisions.
///
/// Grammar: `product := atom (("*" | "/") atom)*`
fn parse_product<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_atom(tokens)?;

    while let Some((token @ (Token::Star | Token::Slash), position)) = tokens.peek() {
        let (op, op_position) = (token.clone(), *position);
        tokens.next();
        let right = parse_atom(tokens)?;
        left = binary(left, op, op_position, right);
    }

    Ok(left)
}

/// Parses an atom.
///
/// Grammar:
/// ```text
///     atom := NUMBER | STRING | "Glyn" "(" IDENT ")" | "(" expression ")"
/// ```
/// A bare identifier is not an atom; every variable read must go through
/// the `Glyn` access marker. Parentheses group without leaving a node of
/// their own.
fn parse_atom<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    match tokens.next() {
        Some((token @ Token::Number(_), position)) => {
            Ok(ParseNode::Rule { rule:     Rule::Number,
                                 children: vec![ParseNode::Leaf { token:    token.clone(),
                                                                  position: *position, }],
                                 position: *position, })
        },

        Some((token @ Token::Str(_), position)) => {
            Ok(ParseNode::Rule { rule:     Rule::Str,
                                 children: vec![ParseNode::Leaf { token:    token.clone(),
                                                                  position: *position, }],
                                 position: *position, })
        },

        Some((Token::Glyn, position)) => {
            let position = *position;
            expect(tokens, &Token::LParen, "'(' after 'Glyn'", position)?;
            let (name, name_position) = parse_identifier(tokens, position)?;
            expect(tokens, &Token::RParen, "')' closing the variable access", position)?;

            Ok(ParseNode::Rule { rule:     Rule::VarRef,
                                 children: vec![ParseNode::Leaf { token:    name,
                                                                  position: name_position, }],
                                 position })
        },

        Some((Token::LParen, position)) => {
            let position = *position;
            let inner = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, "')' closing the group", position)?;
            Ok(inner)
        },

        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { expected: "an expression".to_string(),
                                              found:    format!("{token:?}"),
                                              position: *position, })
        },

        None => Err(ParseError::UnexpectedEndOfInput { position: Position::start() }),
    }
}

/// Returns `true` for tokens that act as comparison operators.
const fn is_comparison_token(token: &Token) -> bool {
    matches!(token,
             Token::EqualEqual
             | Token::BangEqual
             | Token::Less
             | Token::Greater
             | Token::LessEqual
             | Token::GreaterEqual)
}

/// Builds a [`Rule::Binary`] node from two operands and an operator leaf.
fn binary(left: ParseNode, op: Token, op_position: Position, right: ParseNode) -> ParseNode {
    ParseNode::Rule { rule:     Rule::Binary,
                      children: vec![left,
                                     ParseNode::Leaf { token:    op,
                                                       position: op_position, },
                                     right],
                      position: op_position, }
}
