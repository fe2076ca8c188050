//! Infix arithmetic to Reverse Polish Notation, and RPN evaluation.
//!
//! ```
//! let rpn = rpncalc::ShuntingParser::parse_str("2 + 3 * 4").unwrap();
//! assert_eq!(rpn.to_string(), "2 3 4 * +");
//! assert_eq!(rpncalc::parse_and_evaluate("(2 + 3) * 4"), Ok(20.0));
//! ```

pub use lexers::{tokenize, MathToken, Operator};

pub use error::ExpressionError;
pub use parser::{precedence, Assoc, ParseError, RPNExpr, ShuntingParser};
pub use rpneval::{DivisionMode, EvalErr, MathContext, UnaryFallback};

pub mod error;
pub mod logger;
pub mod parser;

mod rpneval;
mod rpnprint;
#[cfg(test)]
mod rpneval_test;

/// Shunting-yard conversion of an infix token sequence.
pub fn convert(tokens: &[MathToken]) -> Result<RPNExpr, ParseError> {
    ShuntingParser::parse(tokens.iter().copied())
}

/// Evaluate a postfix sequence with the default (strict) context.
pub fn evaluate(rpn: &[MathToken]) -> Result<f64, EvalErr> {
    MathContext::new().eval(rpn)
}

pub fn parse_and_evaluate(expr: &str) -> Result<f64, ExpressionError> {
    parse_and_evaluate_with(&MathContext::new(), expr)
}

pub fn parse_and_evaluate_with(cx: &MathContext, expr: &str) -> Result<f64, ExpressionError> {
    let rpn = ShuntingParser::parse_str(expr)?;
    Ok(cx.eval(&rpn)?)
}
