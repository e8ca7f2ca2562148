/// Evaluation errors.
///
/// Defines all error types that can occur while scanning and evaluating an
/// arithmetic expression. Evaluation errors include empty or incomplete
/// input, invalid characters, missing operands, mismatched parentheses,
/// malformed expressions and division by zero.
pub mod eval_error;

pub use eval_error::EvalError;
