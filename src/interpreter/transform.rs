use crate::{
    ast::{BinaryOperator, Expr, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::tree::{ParseNode, Rule},
    },
};

/// Lowers a parse tree into a [`Program`].
///
/// This is a total, side-effect-free mapping: every grammar rule goes to
/// exactly one AST variant. The three variable-binding rules all become
/// [`Statement::Assign`], operator tokens become their normalized
/// [`BinaryOperator`] tags, and string escapes are decoded here so the AST
/// carries fully resolved literal values.
///
/// # Parameters
/// - `node`: The root parse node, as produced by
///   [`parse_program`](crate::interpreter::parser::core::parse_program).
///
/// # Returns
/// The lowered program.
///
/// # Errors
/// Returns [`ParseError::MalformedParseTree`] when a node does not have the
/// shape its rule guarantees. The parser never produces such trees; the
/// error exists so that lowering stays a function rather than a panic.
pub fn lower_program(node: &ParseNode) -> Result<Program, ParseError> {
    match node {
        ParseNode::Rule { rule: Rule::Program,
                          children,
                          .. } => {
            let statements = children.iter()
                                     .map(lower_statement)
                                     .collect::<Result<Vec<_>, _>>()?;
            Ok(Program { statements })
        },
        _ => Err(malformed(node, "expected a program node")),
    }
}

/// Lowers one statement node.
fn lower_statement(node: &ParseNode) -> Result<Statement, ParseError> {
    let ParseNode::Rule { rule,
                          children,
                          position, } = node
    else {
        return Err(malformed(node, "expected a statement node"));
    };
    let position = *position;

    match rule {
        Rule::Print => match children.as_slice() {
            [expr] => Ok(Statement::Print { expr: lower_expr(expr)?,
                                            position }),
            _ => Err(malformed(node, "print takes exactly one expression")),
        },

        // The three surface forms of a binding are one and the same
        // statement from here on.
        Rule::CallAssign | Rule::CheddarAssign | Rule::OpAssign => match children.as_slice() {
            [name, value] => Ok(Statement::Assign { name: leaf_identifier(name)?,
                                                    value: lower_expr(value)?,
                                                    position }),
            _ => Err(malformed(node, "a binding takes a name and a value")),
        },

        Rule::If => match children.as_slice() {
            [condition, then_branch] => Ok(Statement::If { condition: lower_expr(condition)?,
                                                           then_branch: lower_block(then_branch)?,
                                                           else_branch: None,
                                                           position }),
            [condition, then_branch, else_branch] => {
                Ok(Statement::If { condition: lower_expr(condition)?,
                                   then_branch: lower_block(then_branch)?,
                                   else_branch: Some(lower_block(else_branch)?),
                                   position })
            },
            _ => Err(malformed(node, "a conditional takes a condition and one or two blocks")),
        },

        Rule::Loop => match children.as_slice() {
            [body, condition] => Ok(Statement::Loop { body: lower_block(body)?,
                                                      condition: lower_expr(condition)?,
                                                      position }),
            _ => Err(malformed(node, "a loop takes a body and a condition")),
        },

        Rule::Debug => Ok(Statement::Debug { position }),

        _ => Err(malformed(node, "rule is not a statement")),
    }
}

/// Lowers a [`Rule::Block`] node into a statement sequence.
fn lower_block(node: &ParseNode) -> Result<Vec<Statement>, ParseError> {
    match node {
        ParseNode::Rule { rule: Rule::Block,
                          children,
                          .. } => children.iter().map(lower_statement).collect(),
        _ => Err(malformed(node, "expected a block node")),
    }
}

/// Lowers one expression node.
fn lower_expr(node: &ParseNode) -> Result<Expr, ParseError> {
    let ParseNode::Rule { rule,
                          children,
                          position, } = node
    else {
        return Err(malformed(node, "expected an expression node"));
    };
    let position = *position;

    match rule {
        Rule::Number => match children.as_slice() {
            [ParseNode::Leaf { token: Token::Number(value),
                               .. }] => Ok(Expr::Number { value: *value,
                                                          position }),
            _ => Err(malformed(node, "expected a number token")),
        },

        Rule::Str => match children.as_slice() {
            [ParseNode::Leaf { token: Token::Str(raw),
                               .. }] => Ok(Expr::Str { value: decode_escapes(raw),
                                                       position }),
            _ => Err(malformed(node, "expected a string token")),
        },

        Rule::VarRef => match children.as_slice() {
            [name] => Ok(Expr::Variable { name: leaf_identifier(name)?,
                                          position }),
            _ => Err(malformed(node, "a variable access takes exactly one name")),
        },

        Rule::Binary => match children.as_slice() {
            [left, ParseNode::Leaf { token, .. }, right] => {
                let op = operator_tag(token).ok_or_else(|| {
                                                malformed(node, "expected an operator token")
                                            })?;
                Ok(Expr::Binary { left: Box::new(lower_expr(left)?),
                                  op,
                                  right: Box::new(lower_expr(right)?),
                                  position })
            },
            _ => Err(malformed(node, "a binary operation takes two operands and an operator")),
        },

        _ => Err(malformed(node, "rule is not an expression")),
    }
}

/// Maps an operator token to its normalized tag.
///
/// Both spellings of an operator arrive here as the same token, so this is
/// the single place where operator identity is decided.
const fn operator_tag(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}

/// Extracts the name out of an identifier leaf.
fn leaf_identifier(node: &ParseNode) -> Result<String, ParseError> {
    match node {
        ParseNode::Leaf { token: Token::Identifier(name),
                          .. } => Ok(name.clone()),
        _ => Err(malformed(node, "expected an identifier leaf")),
    }
}

/// Decodes backslash escapes in raw string content.
///
/// `\n`, `\t` and `\\` become their escaped characters; any other
/// backslash sequence is kept verbatim, as is everything else — accented
/// characters pass through untouched.
pub(crate) fn decode_escapes(raw: &str) -> String {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('t') => decoded.push('\t'),
            Some('\\') => decoded.push('\\'),
            Some(other) => {
                decoded.push('\\');
                decoded.push(other);
            },
            None => decoded.push('\\'),
        }
    }

    decoded
}

/// Builds a [`ParseError::MalformedParseTree`] for `node`.
fn malformed(node: &ParseNode, details: &str) -> ParseError {
    ParseError::MalformedParseTree { details:  details.to_string(),
                                     position: node.position(), }
}
