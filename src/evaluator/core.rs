use logos::Logos;

use crate::{error::EvalError, evaluator::lexer::Token};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an arithmetic expression and returns the result.
///
/// The expression may contain numbers (including decimals), the four binary
/// operators `+ - * /`, parentheses, and whitespace, which is never
/// significant and is stripped before scanning. A `-` at the start of the
/// input or directly after `(` negates the number that follows it; a `-`
/// anywhere else is binary subtraction.
///
/// The engine runs a single left-to-right pass over the token stream,
/// keeping operands on a value stack and pending operators on an operator
/// stack. `*` and `/` bind tighter than `+` and `-`; operators of equal
/// precedence associate left-to-right. An open parenthesis acts as a barrier
/// on the operator stack until its matching close parenthesis removes it.
///
/// The call is a pure computation over its own transient stacks, so repeated
/// or concurrent evaluation of the same input always yields the same result.
///
/// # Parameters
/// - `expression`: The expression to evaluate, e.g. `"2+3*(4-1)"`.
///
/// # Returns
/// The value of the expression as `f64`.
///
/// # Errors
/// - `EmptyExpression` if the input is blank.
/// - `IncompleteExpression` if the input ends in an operator.
/// - `InvalidCharacter` for any character outside the recognized set.
/// - `InsufficientOperands` if an operator is missing an operand.
/// - `MismatchedParentheses` for unbalanced parentheses.
/// - `InvalidFormat` for any other malformed input.
/// - `DivisionByZero` if a divisor is exactly zero.
///
/// # Example
/// ```
/// use ciphercalc::evaluate;
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate("2*(3+4)").unwrap(), 14.0);
/// assert_eq!(evaluate("-5+2.5").unwrap(), -2.5);
/// assert!(evaluate("5/0").is_err());
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    let expression: String = expression.chars().filter(|c| !c.is_whitespace()).collect();

    if expression.is_empty() {
        return Err(EvalError::EmptyExpression);
    }
    // Cheap pre-scan: a trailing operator can never form a valid expression,
    // regardless of parenthesis nesting.
    if expression.ends_with(['+', '-', '*', '/']) {
        return Err(EvalError::IncompleteExpression { expression });
    }

    let mut values: Vec<f64> = Vec::new();
    let mut operators: Vec<Token> = Vec::new();

    // A `-` is unary only at the start of the input or right after `(`.
    let mut unary_position = true;
    let mut negate_next = false;

    let mut lexer = Token::lexer(&expression);

    while let Some(item) = lexer.next() {
        let token = match item {
            Ok(token) => token,
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or('\u{FFFD}');
                return Err(EvalError::InvalidCharacter { character });
            },
        };

        // A unary minus is absorbed into the number literal that follows it;
        // anything else after it is a malformed literal.
        if negate_next && !matches!(token, Token::Number(_)) {
            return Err(EvalError::InvalidFormat { expression });
        }

        match token {
            Token::Number(literal) => {
                let Ok(value) = literal.parse::<f64>() else {
                    // Multiple decimal points, e.g. `1.2.3`.
                    return Err(EvalError::InvalidFormat { expression });
                };

                values.push(if negate_next { -value } else { value });
                negate_next = false;
                unary_position = false;
            },

            Token::Minus if unary_position => {
                negate_next = true;
                unary_position = false;
            },

            Token::LParen => {
                operators.push(Token::LParen);
                unary_position = true;
            },

            Token::RParen => {
                loop {
                    match operators.pop() {
                        Some(Token::LParen) => break,
                        Some(operator) => apply_operation(&operator, &mut values)?,
                        None => return Err(EvalError::MismatchedParentheses { expression }),
                    }
                }
                unary_position = false;
            },

            incoming @ (Token::Plus | Token::Minus | Token::Star | Token::Slash) => {
                while let Some(top) = operators.last() {
                    if matches!(top, Token::LParen) || precedence(top) < precedence(&incoming) {
                        break;
                    }
                    if let Some(operator) = operators.pop() {
                        apply_operation(&operator, &mut values)?;
                    }
                }

                operators.push(incoming);
                unary_position = false;
            },

            Token::Ignored => {},
        }
    }

    while let Some(operator) = operators.pop() {
        if matches!(operator, Token::LParen) {
            return Err(EvalError::MismatchedParentheses { expression });
        }
        apply_operation(&operator, &mut values)?;
    }

    // The operator stack is drained; a valid expression leaves exactly one
    // value behind.
    match values.as_slice() {
        [result] => Ok(*result),
        _ => Err(EvalError::InvalidFormat { expression }),
    }
}

/// Pops the two most recent operands and pushes `a <operator> b`, where `b`
/// was pushed last. Division checks the divisor against exact zero so that
/// `5/0` fails instead of producing `inf`.
fn apply_operation(operator: &Token, values: &mut Vec<f64>) -> EvalResult<()> {
    let (Some(b), Some(a)) = (values.pop(), values.pop()) else {
        return Err(EvalError::InsufficientOperands { operator: operator_symbol(operator) });
    };

    let result = match operator {
        Token::Plus => a + b,
        Token::Minus => a - b,
        Token::Star => a * b,
        Token::Slash => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            a / b
        },
        _ => unreachable!("only binary operators are applied from the operator stack"),
    };

    values.push(result);
    Ok(())
}

/// Binding strength of a binary operator: `*` and `/` bind tighter than `+`
/// and `-`. The `>=` comparison in the scan loop makes operators of equal
/// precedence associate left-to-right.
fn precedence(token: &Token) -> u8 {
    match token {
        Token::Star | Token::Slash => 2,
        Token::Plus | Token::Minus => 1,
        _ => 0,
    }
}

/// Single-character spelling of a binary operator, used in error reports.
fn operator_symbol(operator: &Token) -> char {
    match operator {
        Token::Plus => '+',
        Token::Minus => '-',
        Token::Star => '*',
        Token::Slash => '/',
        _ => '?',
    }
}
