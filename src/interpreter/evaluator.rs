/// Core evaluation logic and the runtime itself.
///
/// Defines the [`Runtime`](core::Runtime) that owns the variable
/// environment and the output sink, and implements expression and
/// condition evaluation.
pub mod core;

/// Binary operator evaluation.
///
/// Implements arithmetic over values and the numeric comparisons that feed
/// control flow.
pub mod binary;

/// Statement execution.
///
/// Implements the effects of each statement: printing, binding variables,
/// branching, looping and the debug dump.
pub mod statement;
