use lexers::{MathToken, Operator};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErr {
    #[error("malformed expression")]
    MalformedExpression,
    #[error("division by zero")]
    DivisionByZero,
}

/// What to do with an operator that finds a single operand on the stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnaryFallback {
    /// Report `MalformedExpression`.
    #[default]
    Reject,
    /// `-` negates the operand, any other operator passes it through.
    Legacy,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DivisionMode {
    /// A zero divisor is `DivisionByZero`.
    #[default]
    Checked,
    /// Follow IEEE-754: inf or NaN.
    Ieee,
}

/// Evaluation policy. The default is strict; `legacy()` mirrors the
/// reference calculator's unary and division behavior. Leftover operands
/// are still `MalformedExpression` in every mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MathContext {
    pub unary: UnaryFallback,
    pub division: DivisionMode,
}

impl MathContext {
    pub fn new() -> MathContext {
        MathContext::default()
    }

    pub fn legacy() -> MathContext {
        MathContext{unary: UnaryFallback::Legacy, division: DivisionMode::Ieee}
    }

    pub fn with_unary(mut self, unary: UnaryFallback) -> MathContext {
        self.unary = unary;
        self
    }

    pub fn with_division(mut self, division: DivisionMode) -> MathContext {
        self.division = division;
        self
    }

    pub fn eval(&self, rpn: &[MathToken]) -> Result<f64, EvalErr> {
        let mut operands = Vec::new();

        for token in rpn.iter() {
            match *token {
                MathToken::Number(num) => operands.push(num),
                MathToken::Op(op) => {
                    let r = operands.pop().ok_or(EvalErr::MalformedExpression)?;
                    let value = match operands.pop() {
                        Some(l) => self.binary(op, l, r)?,
                        None => self.unary(op, r)?,
                    };
                    tracing::trace!(%op, value, depth = operands.len(), "reduced");
                    operands.push(value);
                }
                MathToken::OParen | MathToken::CParen => return Err(EvalErr::MalformedExpression),
            }
        }
        match operands.as_slice() {
            &[result] => {
                tracing::debug!(result, "evaluated");
                Ok(result)
            }
            _ => Err(EvalErr::MalformedExpression),
        }
    }

    fn binary(&self, op: Operator, l: f64, r: f64) -> Result<f64, EvalErr> {
        match op {
            Operator::Add => Ok(l + r),
            Operator::Sub => Ok(l - r),
            Operator::Mul => Ok(l * r),
            Operator::Div if r == 0.0 => match self.division {
                DivisionMode::Checked => Err(EvalErr::DivisionByZero),
                DivisionMode::Ieee => {
                    tracing::warn!(l, "division by zero");
                    Ok(l / r)
                }
            },
            Operator::Div => Ok(l / r),
        }
    }

    fn unary(&self, op: Operator, operand: f64) -> Result<f64, EvalErr> {
        match self.unary {
            UnaryFallback::Reject => Err(EvalErr::MalformedExpression),
            UnaryFallback::Legacy => {
                tracing::warn!(%op, operand, "operator applied to a single operand");
                match op {
                    Operator::Sub => Ok(-operand),
                    _ => Ok(operand),
                }
            }
        }
    }
}
