use crate::parser::ParseError;
use crate::rpneval::EvalErr;
use lexers::LexError;

/// Everything that can go wrong between an input string and its value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpressionError {
    #[error("invalid character {ch:?} at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },
    #[error("malformed number {lexeme:?} at position {pos}")]
    InvalidNumber { lexeme: String, pos: usize },
    #[error("mismatched parentheses")]
    ParenMismatch,
    #[error("malformed expression")]
    MalformedExpression,
    #[error("division by zero")]
    DivisionByZero,
}

impl From<LexError> for ExpressionError {
    fn from(err: LexError) -> Self {
        match err {
            LexError::InvalidCharacter { ch, pos } => ExpressionError::InvalidCharacter { ch, pos },
            LexError::MalformedNumber { lexeme, pos } => ExpressionError::InvalidNumber { lexeme, pos },
        }
    }
}

impl From<ParseError> for ExpressionError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::ParenMismatch => ExpressionError::ParenMismatch,
        }
    }
}

impl From<EvalErr> for ExpressionError {
    fn from(err: EvalErr) -> Self {
        match err {
            EvalErr::MalformedExpression => ExpressionError::MalformedExpression,
            EvalErr::DivisionByZero => ExpressionError::DivisionByZero,
        }
    }
}
