#![deny(warnings)]

use crate::scanner::Scanner;
use std::fmt;

static NUMERIC: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Operator> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum MathToken {
    Number(f64),
    Op(Operator),
    OParen,
    CParen,
}

impl fmt::Display for MathToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MathToken::Number(n) => write!(f, "{}", n),
            MathToken::Op(op) => write!(f, "{}", op),
            MathToken::OParen => write!(f, "("),
            MathToken::CParen => write!(f, ")"),
        }
    }
}

/// Positions are zero-based character indices into the source.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("invalid character {ch:?} at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },
    #[error("malformed number {lexeme:?} at position {pos}")]
    MalformedNumber { lexeme: String, pos: usize },
}

pub struct MathTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> MathTokenizer<I> {
    pub fn new(source: I) -> Self {
        MathTokenizer{src: Scanner::new(source)}
    }

    fn get_token(&mut self) -> Option<Result<MathToken, LexError>> {
        self.src.skip_ws();
        let start = self.src.offset();
        if let Some(c) = self.src.accept_any(&['+', '-', '*', '/', '(', ')']) {
            self.src.ignore();
            return Some(Ok(match c {
                '(' => MathToken::OParen,
                ')' => MathToken::CParen,
                op => MathToken::Op(Operator::from_symbol(op)?),
            }));
        }
        if self.src.skip_all(NUMERIC) {
            let lexeme = self.src.extract_string();
            return Some(match lexeme.parse::<f64>() {
                Ok(num) => Ok(MathToken::Number(num)),
                Err(_) => Err(LexError::MalformedNumber { lexeme, pos: start }),
            });
        }
        let ch = self.src.next()?;
        self.src.ignore();
        Some(Err(LexError::InvalidCharacter { ch, pos: start }))
    }
}

impl<I: Iterator<Item=char>> Iterator for MathTokenizer<I> {
    type Item = Result<MathToken, LexError>;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

/// Split `expr` into tokens, stopping at the first lexical error.
pub fn tokenize(expr: &str) -> Result<Vec<MathToken>, LexError> {
    let tokens = MathTokenizer::new(expr.chars()).collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

///////////////////////////////////////////////////////////////////////////////
