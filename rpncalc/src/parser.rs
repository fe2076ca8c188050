use crate::error::ExpressionError;
use lexers::{MathToken, Operator};
use std::ops::Deref;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Assoc {
    Left,
    Right,
}

/// Fixed operator table: `*` and `/` bind tighter than `+` and `-`,
/// everything is left associative.
pub fn precedence(op: Operator) -> (usize, Assoc) {
    match op {
        Operator::Add | Operator::Sub => (2, Assoc::Left),
        Operator::Mul | Operator::Div => (3, Assoc::Left),
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum ParseError {
    #[error("mismatched parentheses")]
    ParenMismatch,
}

/// A postfix token sequence: numbers and operators only.
#[derive(PartialEq, Debug, Clone)]
pub struct RPNExpr(pub Vec<MathToken>);

impl Deref for RPNExpr {
    type Target = [MathToken];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ExpressionError> {
        let tokens = lexers::tokenize(expr)?;
        Ok(Self::parse(tokens)?)
    }

    pub fn parse(tokens: impl IntoIterator<Item = MathToken>) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        for token in tokens {
            match token {
                MathToken::Number(_) => out.push(token),
                MathToken::OParen => stack.push(token),
                MathToken::CParen => loop {
                    match stack.pop() {
                        Some(MathToken::OParen) => break,
                        Some(op) => out.push(op),
                        None => return Err(ParseError::ParenMismatch),
                    }
                },
                MathToken::Op(o1) => {
                    let (prec_rhs, assoc_rhs) = precedence(o1);
                    while let Some(&MathToken::Op(o2)) = stack.last() {
                        let (prec_lhs, _) = precedence(o2);
                        if prec_rhs < prec_lhs || (prec_rhs == prec_lhs && assoc_rhs == Assoc::Left) {
                            out.push(MathToken::Op(o2));
                            stack.pop();
                        } else {
                            break;
                        }
                    }
                    stack.push(token);
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                MathToken::OParen | MathToken::CParen => return Err(ParseError::ParenMismatch),
                token => out.push(token),
            }
        }
        let rpn = RPNExpr(out);
        tracing::debug!("converted to postfix: {}", rpn);
        Ok(rpn)
    }
}
