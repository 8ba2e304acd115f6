use crate::ast::Position;

#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Parsing and evaluation are separate failure domains: a `ParseError` can
/// only originate from the lexer, the parser or the lowering step, never
/// from a running program.
pub enum ParseError {
    /// The lexer hit input that matches no token of the language.
    UnrecognizedCharacter {
        /// The offending slice of source text.
        found:    String,
        /// Where the slice begins.
        position: Position,
    },
    /// A `Swiss` string delimiter is never closed, or the closing delimiter
    /// runs straight into identifier characters.
    UnterminatedString {
        /// Where the string begins.
        position: Position,
    },
    /// Found a token that no production accepts at the current point.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token actually encountered.
        found:    String,
        /// Where the token begins.
        position: Position,
    },
    /// Reached the end of input in the middle of a production.
    UnexpectedEndOfInput {
        /// The last position the parser was working at.
        position: Position,
    },
    /// The program does not open with the `Cheese` keyword.
    MissingProgramStart {
        /// Where the program text begins.
        position: Position,
    },
    /// The program is never closed by the `NoCheese` keyword.
    MissingProgramEnd {
        /// The last position the parser was working at.
        position: Position,
    },
    /// A plain statement is not terminated by `Brie`.
    MissingStatementEnd {
        /// The token found in place of `Brie`.
        found:    String,
        /// Where that token begins.
        position: Position,
    },
    /// Found extra tokens after the closing `NoCheese`.
    TrailingTokens {
        /// The first extra token.
        found:    String,
        /// Where it begins.
        position: Position,
    },
    /// The parse tree handed to the lowering step does not have the shape
    /// the grammar guarantees.
    MalformedParseTree {
        /// Details about the mismatch.
        details:  String,
        /// Position of the offending node.
        position: Position,
    },
}

impl ParseError {
    /// Gets the source position the error points at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnrecognizedCharacter { position, .. }
            | Self::UnterminatedString { position }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::MissingProgramStart { position }
            | Self::MissingProgramEnd { position }
            | Self::MissingStatementEnd { position, .. }
            | Self::TrailingTokens { position, .. }
            | Self::MalformedParseTree { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { found, position } => {
                write!(f, "Error on {position}: Unrecognized character sequence '{found}'.")
            },

            Self::UnterminatedString { position } => write!(f,
                                                            "Error on {position}: Swiss string is never closed."),

            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => {
                write!(f, "Error on {position}: Expected {expected}, found {found}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error on {position}: Unexpected end of input.")
            },

            Self::MissingProgramStart { position } => write!(f,
                                                             "Error on {position}: Missing 'Cheese' at the beginning of the program."),

            Self::MissingProgramEnd { position } => write!(f,
                                                           "Error on {position}: Missing 'NoCheese' at the end of the program."),

            Self::MissingStatementEnd { found, position } => write!(f,
                                                                    "Error on {position}: Missing 'Brie' statement terminator, found {found}."),

            Self::TrailingTokens { found, position } => write!(f,
                                                               "Error on {position}: Extra tokens after 'NoCheese': {found}."),

            Self::MalformedParseTree { details, position } => {
                write!(f, "Error on {position}: Malformed parse tree: {details}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
