use crate::{ast::Position, interpreter::lexer::Token};

/// The grammar rule that produced a parse node.
///
/// One tag per production of the grammar. The three binding rules are kept
/// apart here on purpose — the parse tree records surface syntax, and it is
/// the transformer that collapses them into one AST shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The whole program between `Cheese` and `NoCheese`.
    Program,
    /// `Wensleydale(expr) Brie`
    Print,
    /// `Cheddar(name, expr) Brie`
    CallAssign,
    /// `Cheddar name Coleraine expr Brie`
    CheddarAssign,
    /// `name = expr Brie`
    OpAssign,
    /// `Halloumi … Gorgonzola`
    If,
    /// `Emmental … Ricotta … Gorgonzola`
    Loop,
    /// `Belgian Brie`
    Debug,
    /// A statement sequence inside a block construct.
    Block,
    /// A binary operation; children are left operand, operator leaf, right
    /// operand.
    Binary,
    /// A numeric literal wrapping its token.
    Number,
    /// A string literal wrapping its token.
    Str,
    /// `Glyn(name)` wrapping the name token.
    VarRef,
}

/// A node of the concrete parse tree.
///
/// Parse nodes are untyped in the sense that one shape serves every rule: a
/// rule tag with child nodes, or a leaf holding a token. The tree is a pure
/// ownership tree and is consumed by the transformer immediately after
/// parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseNode {
    /// An interior node produced by a grammar rule.
    Rule {
        /// The producing rule.
        rule:     Rule,
        /// Child nodes in source order.
        children: Vec<ParseNode>,
        /// Position of the construct.
        position: Position,
    },
    /// A leaf wrapping a single token.
    Leaf {
        /// The token.
        token:    Token,
        /// Position of the token.
        position: Position,
    },
}

impl ParseNode {
    /// Gets the source position of `self`.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Rule { position, .. } | Self::Leaf { position, .. } => *position,
        }
    }
}
