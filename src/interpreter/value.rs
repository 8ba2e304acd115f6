use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// Cheese++ values come in exactly two kinds: numbers and strings. Booleans
/// exist only transiently as the result of a comparison and are consumed by
/// control flow on the spot, so they have no variant here and can never be
/// stored in a variable.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    Str(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if it is a
    /// string.
    ///
    /// # Parameters
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::TypeMismatch)`: If it is a string.
    ///
    /// # Example
    /// ```
    /// use cheesepp::{ast::Position, interpreter::value::Value};
    ///
    /// let x = Value::Number(10.0);
    ///
    /// assert_eq!(x.as_number(Position::new(1, 1)).unwrap(), 10.0);
    /// ```
    pub fn as_number(&self, position: Position) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Str(_) => {
                Err(RuntimeError::TypeMismatch { details: format!("expected a number, found a \
                                                                   {}",
                                                                  self.kind()),
                                                 position })
            },
        }
    }

    /// Names the kind of the value, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}
