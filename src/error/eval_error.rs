#[derive(Debug)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// The input was empty or contained only whitespace.
    EmptyExpression,
    /// The input ended in a binary operator.
    IncompleteExpression {
        /// The expression, with whitespace stripped.
        expression: String,
    },
    /// A character outside digits, operators, parentheses and the decimal
    /// point was scanned.
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// An operator could not be applied because fewer than two values were
    /// on the value stack.
    InsufficientOperands {
        /// The operator that could not be applied.
        operator: char,
    },
    /// A closing parenthesis had no matching opening one, or an opening
    /// parenthesis was never closed.
    MismatchedParentheses {
        /// The expression, with whitespace stripped.
        expression: String,
    },
    /// The expression was malformed in a way not covered by a more specific
    /// kind, such as leftover values after evaluation, a malformed number
    /// literal like `1.2.3`, or a unary minus with nothing to negate.
    InvalidFormat {
        /// The expression, with whitespace stripped.
        expression: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Expression cannot be empty."),
            Self::IncompleteExpression { expression } => {
                write!(f, "Incomplete expression: {expression}")
            },
            Self::InvalidCharacter { character } => {
                write!(f, "Invalid character in expression: '{character}'.")
            },
            Self::InsufficientOperands { operator } => {
                write!(f, "Operator '{operator}' is missing an operand.")
            },
            Self::MismatchedParentheses { expression } => {
                write!(f, "Mismatched parentheses in expression: {expression}")
            },
            Self::InvalidFormat { expression } => {
                write!(f, "Invalid expression format: {expression}")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
        }
    }
}

impl std::error::Error for EvalError {}
