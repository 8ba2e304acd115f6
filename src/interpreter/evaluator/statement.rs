use std::io;

use crate::{
    ast::Statement,
    interpreter::evaluator::core::{EvalResult, Runtime},
};

impl<W: io::Write> Runtime<W> {
    /// Executes a sequence of statements in order.
    ///
    /// Used for the program's top level and for every block inside a
    /// conditional or loop; the first failing statement aborts the whole
    /// sequence.
    pub(in crate::interpreter::evaluator) fn exec_block(&mut self,
                                                        statements: &[Statement],
                                                        source: &str)
                                                        -> EvalResult<()> {
        for statement in statements {
            self.exec_statement(statement, source)?;
        }
        Ok(())
    }

    /// Executes a single statement for its effects.
    ///
    /// - `Print` renders the value of its expression and writes it to the
    ///   sink followed by one `\n`; that trailing newline is the output
    ///   convention of the language.
    /// - `Assign` evaluates the initializer, then binds or rebinds the
    ///   name. Rebinding an existing name is not an error — declaration and
    ///   reassignment are the same operation.
    /// - `If` tests its condition and runs the then block or, when present,
    ///   the else block; with neither applicable it is a no-op.
    /// - `Loop` runs its body once unconditionally, then tests the trailing
    ///   condition, repeating while the condition is false and stopping on
    ///   its first true result.
    /// - `Debug` re-emits `source` verbatim, with nothing added — not even
    ///   a newline.
    ///
    /// # Errors
    /// Propagates evaluation errors and wraps sink failures in
    /// [`RuntimeError::Output`](crate::error::RuntimeError::Output).
    fn exec_statement(&mut self, statement: &Statement, source: &str) -> EvalResult<()> {
        match statement {
            Statement::Print { expr, .. } => {
                let value = self.eval_expr(expr)?;
                writeln!(self.out, "{value}")?;
            },

            Statement::Assign { name, value, .. } => {
                let value = self.eval_expr(value)?;
                self.env.insert(name.clone(), value);
            },

            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.eval_condition(condition)? {
                    self.exec_block(then_branch, source)?;
                } else if let Some(else_branch) = else_branch {
                    self.exec_block(else_branch, source)?;
                }
            },

            Statement::Loop { body, condition, .. } => loop {
                self.exec_block(body, source)?;
                if self.eval_condition(condition)? {
                    break;
                }
            },

            Statement::Debug { .. } => write!(self.out, "{source}")?,
        }

        Ok(())
    }
}
