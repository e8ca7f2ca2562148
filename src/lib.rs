//! # ciphercalc
//!
//! ciphercalc is a small text-processing toolbox written in Rust.
//! It evaluates arithmetic expressions with operator precedence and
//! parentheses, shifts text with the Caesar cipher over English and Russian
//! alphabets, and reads and writes UTF-8 text files.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Implements the Caesar cipher over a closed set of alphabets.
///
/// This module shifts each letter of the input a fixed number of positions
/// within its own alphabet, wrapping around at the end. English and Russian
/// alphabets are recognized, uppercase and lowercase separately; every other
/// character passes through unchanged. Decryption is the same transform with
/// the shift negated.
///
/// # Responsibilities
/// - Encrypts and decrypts text with an integer shift, preserving case and
///   script per character.
/// - Wraps shifted positions around the alphabet, including negative shifts.
/// - Leaves digits, punctuation and unrecognized scripts untouched.
pub mod cipher;
/// Provides unified error types for expression evaluation.
///
/// This module defines all errors that can be raised while scanning or
/// evaluating an arithmetic expression. It standardizes error reporting and
/// carries detailed information about failures, including the offending
/// character or operator where one exists.
///
/// # Responsibilities
/// - Defines an error enum covering every failure mode of the evaluator.
/// - Attaches the relevant expression, character or operator for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Evaluates arithmetic expressions with a two-stack shunting-yard engine.
///
/// This module ties together the lexer and the evaluation engine to compute
/// the value of an infix expression in a single left-to-right pass. It
/// exposes the public entry point for expression evaluation.
///
/// # Responsibilities
/// - Tokenizes the expression and drives the value and operator stacks.
/// - Resolves operator precedence and left associativity.
/// - Reports precise errors for malformed input and division by zero.
pub mod evaluator;
/// Reads and writes UTF-8 text files.
///
/// This module provides the file access pair used by the command line
/// interface: reading a whole text file into a string and writing a string
/// out to a path.
///
/// # Responsibilities
/// - Reads a UTF-8 text file into memory.
/// - Writes text content to a path, creating or truncating the file.
pub mod files;

pub use evaluator::core::evaluate;
