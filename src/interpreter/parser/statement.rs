use std::iter::Peekable;

use crate::{
    ast::Position,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            expression::parse_expression,
            tree::{ParseNode, Rule},
            utils::{expect, expect_brie, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement is one of:
/// - a print statement (`Wensleydale`),
/// - one of the three variable-binding forms,
/// - a conditional (`Halloumi`),
/// - a loop (`Emmental`),
/// - a debug dump (`Belgian`).
///
/// Dispatch is by the first token; a bare identifier can only begin the
/// assignment-style binding, since variable reads always go through the
/// `Glyn` marker.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Position)` pairs.
///
/// # Returns
/// A parse node for the statement.
///
/// # Errors
/// Returns a `ParseError` when no statement production matches.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    match tokens.peek() {
        Some((Token::Wensleydale, _)) => parse_print(tokens),
        Some((Token::Cheddar, _)) => parse_cheddar_binding(tokens),
        Some((Token::Identifier(_), _)) => parse_assignment(tokens),
        Some((Token::Halloumi, _)) => parse_if(tokens),
        Some((Token::Emmental, _)) => parse_loop(tokens),
        Some((Token::Belgian, _)) => parse_debug(tokens),
        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { expected: "a statement".to_string(),
                                              found:    format!("{token:?}"),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: Position::start() }),
    }
}

/// Parses a print statement.
///
/// Grammar: `print := "Wensleydale" "(" expression ")" "Brie"`
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let position = expect(tokens, &Token::Wensleydale, "'Wensleydale'", Position::start())?;
    expect(tokens, &Token::LParen, "'(' after 'Wensleydale'", position)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::RParen, "')' closing the print expression", position)?;
    expect_brie(tokens, position)?;

    Ok(ParseNode::Rule { rule: Rule::Print,
                         children: vec![expr],
                         position })
}

/// Parses the two `Cheddar` binding forms.
///
/// Grammar:
/// ```text
///     declare := "Cheddar" "(" IDENT "," expression ")" "Brie"
///              | "Cheddar" IDENT "Coleraine" expression "Brie"
/// ```
/// The token after `Cheddar` picks the form: `(` for the call style,
/// an identifier for the `Coleraine` style.
fn parse_cheddar_binding<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let position = expect(tokens, &Token::Cheddar, "'Cheddar'", Position::start())?;

    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let (name, name_position) = parse_identifier(tokens, position)?;
        expect(tokens, &Token::Comma, "',' after the variable name", position)?;
        let value = parse_expression(tokens)?;
        expect(tokens, &Token::RParen, "')' closing the binding", position)?;
        expect_brie(tokens, position)?;

        return Ok(ParseNode::Rule { rule:     Rule::CallAssign,
                                    children: vec![ParseNode::Leaf { token:    name,
                                                                     position: name_position, },
                                                   value],
                                    position });
    }

    let (name, name_position) = parse_identifier(tokens, position)?;
    expect(tokens, &Token::Coleraine, "'Coleraine' after the variable name", position)?;
    let value = parse_expression(tokens)?;
    expect_brie(tokens, position)?;

    Ok(ParseNode::Rule { rule:     Rule::CheddarAssign,
                         children: vec![ParseNode::Leaf { token:    name,
                                                          position: name_position, },
                                        value],
                         position })
}

/// Parses an assignment-style binding.
///
/// Grammar: `declare := IDENT "=" expression "Brie"`
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let (name, position) = parse_identifier(tokens, Position::start())?;
    expect(tokens, &Token::Equals, "'=' after the variable name", position)?;
    let value = parse_expression(tokens)?;
    expect_brie(tokens, position)?;

    Ok(ParseNode::Rule { rule:     Rule::OpAssign,
                         children: vec![ParseNode::Leaf { token: name, position }, value],
                         position })
}

/// Parses a conditional.
///
/// Grammar:
/// ```text
///     if := "Halloumi" expression statement* ("White" statement*)? "Gorgonzola"
/// ```
/// The then block runs until `White` or `Gorgonzola`; a `White` keyword
/// switches collection to the else block. Both blocks become
/// [`Rule::Block`] children, the else block only when present.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let position = expect(tokens, &Token::Halloumi, "'Halloumi'", Position::start())?;
    let condition = parse_expression(tokens)?;

    let then_branch = parse_block(tokens, position, &[Token::White, Token::Gorgonzola])?;

    let mut children = vec![condition, then_branch];
    if let Some((Token::White, white_position)) = tokens.peek() {
        let white_position = *white_position;
        tokens.next();
        children.push(parse_block(tokens, white_position, &[Token::Gorgonzola])?);
    }
    expect(tokens, &Token::Gorgonzola, "'Gorgonzola' closing the conditional", position)?;

    Ok(ParseNode::Rule { rule: Rule::If,
                         children,
                         position })
}

/// Parses a repeat-until loop.
///
/// Grammar:
/// ```text
///     loop := "Emmental" statement* "Ricotta" expression "Gorgonzola"
/// ```
/// The body runs until the `Ricotta` keyword, which introduces the trailing
/// condition.
fn parse_loop<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let position = expect(tokens, &Token::Emmental, "'Emmental'", Position::start())?;

    let body = parse_block(tokens, position, &[Token::Ricotta])?;
    expect(tokens, &Token::Ricotta, "'Ricotta' introducing the loop condition", position)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::Gorgonzola, "'Gorgonzola' closing the loop", position)?;

    Ok(ParseNode::Rule { rule:     Rule::Loop,
                         children: vec![body, condition],
                         position })
}

/// Parses a debug-dump statement.
///
/// Grammar: `debug := "Belgian" "Brie"`
fn parse_debug<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let position = expect(tokens, &Token::Belgian, "'Belgian'", Position::start())?;
    expect_brie(tokens, position)?;

    Ok(ParseNode::Rule { rule: Rule::Debug,
                         children: Vec::new(),
                         position })
}

/// Parses a statement sequence into a [`Rule::Block`] node.
///
/// Statements are collected until one of the `closers` is peeked; the
/// closing token itself is left in the stream for the caller.
///
/// # Errors
/// Returns [`ParseError::UnexpectedEndOfInput`] at the block's opening
/// position when the stream ends before a closer appears.
fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                      position: Position,
                      closers: &[Token])
                      -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut children = Vec::new();
    loop {
        match tokens.peek() {
            Some((token, _)) if closers.contains(token) => break,
            Some(_) => children.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { position }),
        }
    }

    Ok(ParseNode::Rule { rule: Rule::Block,
                         children,
                         position })
}
