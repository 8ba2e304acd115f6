/// A location in the source text.
///
/// Both parts are 1-based. Every token, parse node and AST node carries its
/// position so that parse and runtime errors can point back into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// The source line.
    pub line:   usize,
    /// The column within the line.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and column pair.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The position of the very first character of a source text.
    #[must_use]
    pub const fn start() -> Self {
        Self::new(1, 1)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The root of the abstract syntax tree: an ordered sequence of top-level
/// statements.
///
/// The `Cheese`/`NoCheese` program frame is validated by the parser and does
/// not survive into the AST; a `Program` only owns what executes.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The top-level statements in program order.
    pub statements: Vec<Statement>,
}

/// A statement of the language.
///
/// There is one variant per executable construct. All three surface syntaxes
/// for binding a variable (`Cheddar(x, e)`, `Cheddar x Coleraine e` and
/// `x = e`) collapse into the single [`Statement::Assign`] variant during
/// lowering; the language does not distinguish declaration from reassignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `Wensleydale(expr) Brie` — evaluate and print one expression.
    Print {
        /// The expression whose value is printed.
        expr:     Expr,
        /// Position of the `Wensleydale` keyword.
        position: Position,
    },
    /// Bind or rebind a variable to the value of an expression.
    Assign {
        /// The variable name.
        name:     String,
        /// The initializer expression.
        value:    Expr,
        /// Position of the statement start.
        position: Position,
    },
    /// `Halloumi cond … White … Gorgonzola` — a conditional with an optional
    /// else block.
    If {
        /// The condition; must be a comparison.
        condition:   Expr,
        /// Statements executed when the condition holds.
        then_branch: Vec<Statement>,
        /// Statements executed otherwise, when a `White` block is present.
        else_branch: Option<Vec<Statement>>,
        /// Position of the `Halloumi` keyword.
        position:    Position,
    },
    /// `Emmental … Ricotta cond Gorgonzola` — a repeat-until loop.
    ///
    /// The body runs once unconditionally, then the trailing condition is
    /// tested; the cycle repeats while the condition is false and stops on
    /// its first true result.
    Loop {
        /// The loop body.
        body:      Vec<Statement>,
        /// The trailing until-condition.
        condition: Expr,
        /// Position of the `Emmental` keyword.
        position:  Position,
    },
    /// `Belgian Brie` — re-emit the original source text of the whole
    /// program, exactly as it was given to the runtime.
    Debug {
        /// Position of the `Belgian` keyword.
        position: Position,
    },
}

/// An expression of the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value:    f64,
        /// Position of the literal.
        position: Position,
    },
    /// A string literal, with escape sequences already decoded.
    Str {
        /// The decoded string content.
        value:    String,
        /// Position of the opening delimiter.
        position: Position,
    },
    /// A marked variable access, `Glyn(name)`.
    Variable {
        /// The variable name.
        name:     String,
        /// Position of the `Glyn` marker.
        position: Position,
    },
    /// A binary operation with a normalized operator tag.
    Binary {
        /// Left operand.
        left:     Box<Expr>,
        /// The operator, already normalized from its symbolic or word alias.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Expr>,
        /// Position of the operator.
        position: Position,
    },
}

impl Expr {
    /// Gets the source position of `self`.
    ///
    /// ## Example
    /// ```
    /// use cheesepp::ast::{Expr, Position};
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: Position::new(5, 3), };
    ///
    /// assert_eq!(expr.position(), Position::new(5, 3));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Number { position, .. }
            | Self::Str { position, .. }
            | Self::Variable { position, .. }
            | Self::Binary { position, .. } => *position,
        }
    }
}

/// A binary operator.
///
/// Every operator has a symbolic spelling and a word alias (`+`/`plus`,
/// `<`/`minor`, …); both lex to the same token and lower to the same tag, so
/// the distinction is gone by the time an operator reaches the evaluator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+` / `plus`)
    Add,
    /// Subtraction (`-` / `minus`)
    Sub,
    /// Multiplication (`*` / `times`)
    Mul,
    /// Division (`/` / `over`)
    Div,
    /// Equal to (`==` / `equals`)
    Equal,
    /// Not equal to (`!=` / `differs`)
    NotEqual,
    /// Less than (`<` / `minor`)
    Less,
    /// Greater than (`>` / `greater`)
    Greater,
    /// Less than or equal (`<=` / `atmost`)
    LessEqual,
    /// Greater than or equal (`>=` / `atleast`)
    GreaterEqual,
}

impl BinaryOperator {
    /// Returns `true` for the comparison operators.
    ///
    /// Comparisons produce a boolean that only `Halloumi` and `Ricotta`
    /// conditions may consume; booleans are not storable values.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Equal
                 | Self::NotEqual
                 | Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}
