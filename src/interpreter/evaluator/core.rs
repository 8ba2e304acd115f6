use std::{collections::HashMap, io};

use crate::{
    ast::{Expr, Program},
    error::RuntimeError,
    interpreter::value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes programs against a variable environment and an output sink.
///
/// The environment is a single flat, case-sensitive mapping from variable
/// name to current value — the language has no nested scopes and no
/// functions. It is owned exclusively by the runtime and cleared at the
/// start of every [`run`](Self::run), so each program run is independent.
///
/// The sink receives everything the program prints. [`Runtime::new`] wires
/// it to standard output; [`Runtime::with_output`] accepts any
/// [`io::Write`], which is how tests and embedders capture output.
///
/// ## Usage
///
/// ```
/// use cheesepp::interpreter::evaluator::core::Runtime;
///
/// let source = "Cheese Wensleydale(3 plus 4) Brie NoCheese";
/// let program = cheesepp::parse(source).unwrap();
///
/// let mut runtime = Runtime::with_output(Vec::new());
/// runtime.run(&program, source).unwrap();
///
/// assert_eq!(runtime.into_output(), b"7\n");
/// ```
pub struct Runtime<W = io::Stdout> {
    pub(in crate::interpreter::evaluator) env: HashMap<String, Value>,
    pub(in crate::interpreter::evaluator) out: W,
}

#[allow(clippy::new_without_default)]
impl Runtime<io::Stdout> {
    /// Creates a runtime that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl<W: io::Write> Runtime<W> {
    /// Creates a runtime that prints to the given sink.
    pub fn with_output(out: W) -> Self {
        Self { env: HashMap::new(),
               out }
    }

    /// Executes a program.
    ///
    /// The environment is cleared first, then the statements are walked
    /// depth-first in program order. The first error aborts the run and is
    /// returned; there is no recovery or partial continuation.
    ///
    /// `source` must be the exact unparsed text the program was parsed
    /// from — the `Belgian` debug dump re-emits it verbatim.
    ///
    /// # Parameters
    /// - `program`: The program to execute.
    /// - `source`: The original source text of that program.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] evaluation raises.
    pub fn run(&mut self, program: &Program, source: &str) -> EvalResult<()> {
        self.env.clear();
        self.exec_block(&program.statements, source)
    }

    /// Looks up a variable in the environment.
    ///
    /// Meant for inspecting the final environment state after a run; the
    /// evaluator itself reads the environment directly.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.env.get(name)
    }

    /// Consumes the runtime and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Evaluates an expression to a value.
    ///
    /// Comparison operators are rejected here: the boolean they yield is
    /// not a storable value, so a comparison may only appear where
    /// [`eval_condition`](Self::eval_condition) consumes it.
    pub(in crate::interpreter::evaluator) fn eval_expr(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),

            Expr::Str { value, .. } => Ok(Value::Str(value.clone())),

            Expr::Variable { name, position } => {
                self.env
                    .get(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownVariable { name:     name.clone(),
                                                                   position: *position, })
            },

            Expr::Binary { left,
                           op,
                           right,
                           position, } => {
                if op.is_comparison() {
                    return Err(RuntimeError::TypeMismatch { details:  format!("comparison \
                                                                               '{op}' does not \
                                                                               produce a \
                                                                               storable value"),
                                                            position: *position, });
                }
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Self::eval_binary(*op, &left, &right, *position)
            },
        }
    }

    /// Evaluates a control-flow condition to a boolean.
    ///
    /// A condition must be a comparison; its operands are evaluated as
    /// numbers and compared. Anything else — a literal, a variable read, an
    /// arithmetic expression — is a malformed condition.
    pub(in crate::interpreter::evaluator) fn eval_condition(&self, expr: &Expr)
                                                            -> EvalResult<bool> {
        match expr {
            Expr::Binary { left,
                           op,
                           right,
                           position, } if op.is_comparison() => {
                let left = self.eval_expr(left)?.as_number(*position)?;
                let right = self.eval_expr(right)?.as_number(*position)?;
                Ok(Self::compare(*op, left, right))
            },
            _ => Err(RuntimeError::MalformedCondition { position: expr.position() }),
        }
    }
}
