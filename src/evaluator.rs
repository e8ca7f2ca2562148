/// The core module drives the two-stack evaluation.
///
/// The engine consumes tokens one at a time straight off the lexer and
/// maintains a value stack of operands and an operator stack of pending
/// operators and open-parenthesis barriers. Operator precedence and left
/// associativity decide when pending operators are applied.
///
/// # Responsibilities
/// - Validates the input before the scan (empty input, trailing operator).
/// - Runs the single left-to-right scan over the token stream.
/// - Applies operators to operands, reporting runtime errors such as
///   division by zero.
pub mod core;
/// The lexer module tokenizes expressions for the engine.
///
/// The lexer reads the raw expression text and produces a stream of tokens:
/// number literals, the four arithmetic operators and parentheses. Any other
/// character is a lexical error. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Captures number literals, including the permissive digits-and-dots
///   scan.
/// - Surfaces unrecognized characters as lexer errors.
pub mod lexer;
