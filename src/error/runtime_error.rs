use crate::ast::Position;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// Every runtime error is unrecoverable for the current run: the evaluator
/// never catches and continues, the first failure aborts execution and is
/// returned to the caller.
pub enum RuntimeError {
    /// Tried to read a variable that was never bound.
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// Position of the access marker.
        position: Position,
    },
    /// An operator was applied to operand types it does not support.
    TypeMismatch {
        /// Details about the mismatch.
        details:  String,
        /// Position of the operator.
        position: Position,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Position of the division operator.
        position: Position,
    },
    /// A `Halloumi` or `Ricotta` condition is not a comparison.
    MalformedCondition {
        /// Position of the condition expression.
        position: Position,
    },
    /// Writing program output to the sink failed.
    Output {
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, position } => {
                write!(f, "Error on {position}: Variable '{name}' is not defined.")
            },

            Self::TypeMismatch { details, position } => {
                write!(f, "Error on {position}: Type mismatch: {details}.")
            },

            Self::DivisionByZero { position } => {
                write!(f, "Error on {position}: Division by zero.")
            },

            Self::MalformedCondition { position } => write!(f,
                                                            "Error on {position}: Condition must be a comparison."),

            Self::Output { source } => write!(f, "Failed to write program output: {source}."),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(source: std::io::Error) -> Self {
        Self::Output { source }
    }
}
