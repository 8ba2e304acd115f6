use logos::{Lexer, Logos, Skip};

use crate::{ast::Position, error::ParseError};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of Cheese++.
///
/// Each operator carries two patterns, its symbolic spelling and its word
/// alias; both produce the same token, which is what makes the two families
/// interchangeable everywhere an operator may appear.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// `Cheese` — opens every program.
    #[token("Cheese")]
    Cheese,
    /// `NoCheese` — closes every program.
    #[token("NoCheese")]
    NoCheese,
    /// `Brie` — the statement terminator.
    #[token("Brie")]
    Brie,
    /// `Wensleydale` — the print command.
    #[token("Wensleydale")]
    Wensleydale,
    /// `Cheddar` — opens two of the three variable-binding forms.
    #[token("Cheddar")]
    Cheddar,
    /// `Coleraine` — separates name from initializer in the
    /// `Cheddar … Coleraine …` binding form.
    #[token("Coleraine")]
    Coleraine,
    /// `Glyn` — the variable access marker.
    #[token("Glyn")]
    Glyn,
    /// `Halloumi` — opens a conditional.
    #[token("Halloumi")]
    Halloumi,
    /// `White` — separates the then block from the else block.
    #[token("White")]
    White,
    /// `Emmental` — opens a repeat-until loop.
    #[token("Emmental")]
    Emmental,
    /// `Ricotta` — introduces the trailing loop condition.
    #[token("Ricotta")]
    Ricotta,
    /// `Gorgonzola` — closes a conditional or loop block.
    #[token("Gorgonzola")]
    Gorgonzola,
    /// `Belgian` — the debug-dump command.
    #[token("Belgian")]
    Belgian,
    /// A `Swiss…Swiss` string literal, captured verbatim.
    ///
    /// The pattern matches the opening delimiter plus any identifier-like
    /// characters glued to it; the callback then extends the token through
    /// the closing delimiter, which may lie past whitespace or punctuation
    /// the pattern itself cannot cross.
    #[regex(r"Swiss[a-zA-Z0-9_]*", lex_swiss_string, priority = 20)]
    Str(String),
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// `+` / `plus`
    #[token("+")]
    #[token("plus")]
    Plus,
    /// `-` / `minus`
    #[token("-")]
    #[token("minus")]
    Minus,
    /// `*` / `times`
    #[token("*")]
    #[token("times")]
    Star,
    /// `/` / `over`
    #[token("/")]
    #[token("over")]
    Slash,
    /// `==` / `equals`
    #[token("==")]
    #[token("equals")]
    EqualEqual,
    /// `!=` / `differs`
    #[token("!=")]
    #[token("differs")]
    BangEqual,
    /// `<` / `minor`
    #[token("<")]
    #[token("minor")]
    Less,
    /// `>` / `greater`
    #[token(">")]
    #[token("greater")]
    Greater,
    /// `<=` / `atmost`
    #[token("<=")]
    #[token("atmost")]
    LessEqual,
    /// `>=` / `atleast`
    #[token(">=")]
    #[token("atleast")]
    GreaterEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// Identifier tokens; variable names such as `x` or `gouda_count`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Line breaks; skipped, but they advance the position bookkeeping.
    #[token("\n", newline)]
    Newline,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset at which that line
/// begins, so every token can be positioned as line and column.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Advances the line bookkeeping past a line break and skips it.
fn newline(lex: &mut Lexer<Token>) -> Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    Skip
}

/// Captures the content of a `Swiss…Swiss` string literal.
///
/// The matched slice starts with the opening delimiter. When the closing
/// delimiter sits inside the slice it must sit exactly at its end; otherwise
/// the callback searches the remainder of the input for it and bumps the
/// token over the content, keeping the line bookkeeping in step with any
/// line breaks the content contains.
///
/// Content is returned verbatim — accented characters included — with the
/// delimiters stripped. Escape sequences are left alone here; decoding them
/// is the transformer's job.
///
/// # Returns
/// - `Some(String)`: The raw string content.
/// - `None`: If no closing delimiter exists, which surfaces as a lexical
///   error at the opening delimiter.
fn lex_swiss_string(lex: &mut Lexer<Token>) -> Option<String> {
    const DELIMITER: &str = "Swiss";

    let inner = &lex.slice()[DELIMITER.len()..];
    if let Some(end) = inner.find(DELIMITER) {
        // Closing delimiter glued to identifier characters is not a valid
        // string; rejecting it here keeps the error at the right spot.
        if end + 2 * DELIMITER.len() == lex.slice().len() {
            return Some(inner[..end].to_string());
        }
        return None;
    }

    let remainder = lex.remainder();
    let end = remainder.find(DELIMITER)?;
    let content = format!("{inner}{}", &remainder[..end]);

    let span_end = lex.span().end;
    for (index, _) in remainder[..end].match_indices('\n') {
        lex.extras.line += 1;
        lex.extras.line_start = span_end + index + 1;
    }
    lex.bump(end + DELIMITER.len());

    Some(content)
}

/// Tokenizes a whole source text.
///
/// Runs the token grammar over `source` and collects every token together
/// with its position. This is the entry point of the lexing stage; the
/// parser consumes the returned stream and nothing else.
///
/// # Parameters
/// - `source`: The raw Cheese++ source text.
///
/// # Returns
/// The token stream as `(Token, Position)` pairs.
///
/// # Errors
/// Returns [`ParseError::UnterminatedString`] for a `Swiss` delimiter that
/// is never properly closed, and [`ParseError::UnrecognizedCharacter`] for
/// any other input no token matches.
pub fn lex(source: &str) -> Result<Vec<(Token, Position)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());

    while let Some(token) = lexer.next() {
        let position = Position::new(lexer.extras.line,
                                     lexer.span().start.saturating_sub(lexer.extras.line_start)
                                     + 1);
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                if lexer.slice().starts_with("Swiss") {
                    return Err(ParseError::UnterminatedString { position });
                }
                return Err(ParseError::UnrecognizedCharacter { found: lexer.slice().to_string(),
                                                               position });
            },
        }
    }

    Ok(tokens)
}
