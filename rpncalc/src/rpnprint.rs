use crate::parser::{precedence, Assoc, RPNExpr};
use lexers::{MathToken, Operator};
use std::fmt::{self, Write};

// Infix keeps the leaves in postfix order, so a subtree is a contiguous
// run of leaves and its parentheses hang off the first and last of them.
struct Leaf {
    value: f64,
    opens: usize,
    closes: usize,
    op: Option<Operator>,
}

struct Span {
    first: usize,
    last: usize,
    prec: usize,
    assoc: Assoc,
}

impl RPNExpr {
    /// Render back to infix, keeping only the parentheses that precedence
    /// and associativity require. None when the operand count doesn't work out.
    pub fn to_infix(&self) -> Option<String> {
        let mut leaves: Vec<Leaf> = Vec::new();
        let mut stack: Vec<Span> = Vec::new();
        for token in self.0.iter() {
            match *token {
                MathToken::Number(value) => {
                    let idx = leaves.len();
                    leaves.push(Leaf{value, opens: 0, closes: 0, op: None});
                    stack.push(Span{first: idx, last: idx, prec: usize::MAX, assoc: Assoc::Left});
                }
                MathToken::Op(op) => {
                    let rhs = stack.pop()?;
                    let lhs = stack.pop()?;
                    let (prec, assoc) = precedence(op);
                    if prec > lhs.prec || (prec == lhs.prec && assoc != Assoc::Left) {
                        leaves[lhs.first].opens += 1;
                        leaves[lhs.last].closes += 1;
                    }
                    // NOTE: '2 + (3 + 4)' keeps its parens, the grouping was explicit
                    if prec > rhs.prec || (prec == rhs.prec && assoc != Assoc::Right) {
                        leaves[rhs.first].opens += 1;
                        leaves[rhs.last].closes += 1;
                    }
                    leaves[lhs.last].op = Some(op);
                    stack.push(Span{first: lhs.first, last: rhs.last, prec, assoc});
                }
                MathToken::OParen | MathToken::CParen => return None,
            }
        }
        if stack.len() != 1 {
            return None;
        }

        let mut out = String::new();
        for leaf in leaves.iter() {
            out.extend(std::iter::repeat('(').take(leaf.opens));
            write!(out, "{}", leaf.value).ok()?;
            out.extend(std::iter::repeat(')').take(leaf.closes));
            if let Some(op) = leaf.op {
                write!(out, " {} ", op).ok()?;
            }
        }
        Some(out)
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut tokens = self.0.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{}", first)?;
        }
        for token in tokens {
            write!(f, " {}", token)?;
        }
        Ok(())
    }
}
