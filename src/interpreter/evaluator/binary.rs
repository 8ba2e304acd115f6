use std::io;

use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Runtime},
        value::Value,
    },
};

impl<W: io::Write> Runtime<W> {
    /// Evaluates an arithmetic operation between two values.
    ///
    /// The four arithmetic operators require numeric operands on both
    /// sides; any string operand is a type mismatch, never a coercion.
    /// Division checks its right operand for zero explicitly.
    ///
    /// Comparison operators never reach this function — they are consumed
    /// by [`eval_condition`](Self::eval_condition) before operand
    /// evaluation even starts.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Operator position for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed number.
    pub(in crate::interpreter::evaluator) fn eval_binary(op: BinaryOperator,
                                                         left: &Value,
                                                         right: &Value,
                                                         position: Position)
                                                         -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let (Value::Number(l), Value::Number(r)) = (left, right) else {
            return Err(RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to a \
                                                                      {} and a {}",
                                                                     left.kind(),
                                                                     right.kind()),
                                                    position });
        };

        Ok(Value::Number(match op {
                             Add => l + r,
                             Sub => l - r,
                             Mul => l * r,
                             Div => {
                                 if *r == 0.0 {
                                     return Err(RuntimeError::DivisionByZero { position });
                                 }
                                 l / r
                             },
                             _ => unreachable!("comparisons are evaluated by eval_condition"),
                         }))
    }

    /// Compares two numbers under a comparison operator.
    ///
    /// The boolean produced here feeds straight into control flow; it is
    /// never wrapped in a [`Value`].
    pub(in crate::interpreter::evaluator) fn compare(op: BinaryOperator, left: f64, right: f64)
                                                     -> bool {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        match op {
            Equal => left == right,
            NotEqual => left != right,
            Less => left < right,
            Greater => left > right,
            LessEqual => left <= right,
            GreaterEqual => left >= right,
            _ => unreachable!("compare used with a non comparison operator"),
        }
    }
}
