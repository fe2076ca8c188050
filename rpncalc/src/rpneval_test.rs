use crate::parser::{RPNExpr, ShuntingParser};
use crate::rpneval::{DivisionMode, EvalErr, MathContext, UnaryFallback};
use lexers::{MathToken, Operator};

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

fn eval(expr: &str) -> Result<f64, EvalErr> {
    MathContext::new().eval(&ShuntingParser::parse_str(expr).unwrap())
}

fn eval_legacy(expr: &str) -> Result<f64, EvalErr> {
    MathContext::legacy().eval(&ShuntingParser::parse_str(expr).unwrap())
}

#[test]
fn test_eval1() {
    fuzzy_eq!(eval("2 + 3 * 4").unwrap(), 14.0);
    fuzzy_eq!(eval("8 - 4 - 2").unwrap(), 2.0);
    fuzzy_eq!(eval("(2 + 3) * 4").unwrap(), 20.0);
    fuzzy_eq!(eval("16 / 4 / 2").unwrap(), 2.0);
}

#[test]
fn test_eval2() {
    fuzzy_eq!(eval("         2 * 4 + 9 /        3  - 4 * 5 / 2            ").unwrap(), 1.0);
    fuzzy_eq!(eval("2*4+9/3-4*5/2").unwrap(), 1.0);
}

#[test]
fn test_eval3() {
    fuzzy_eq!(eval("(1.5 + 2.25) * (10 - 6) / 3").unwrap(), 5.0);
    fuzzy_eq!(eval("0.1 + 0.2").unwrap(), 0.3);
    fuzzy_eq!(eval("1 / 3").unwrap(), 1.0 / 3.0);
}

#[test]
fn test_eval4() {
    // values stay as f64 throughout, nothing is rounded through text
    let big = eval("123456789012 * 1000000000").unwrap();
    assert_eq!(big, 123456789012.0 * 1000000000.0);
    let tiny = eval("1 / 1000000000 / 1000000000").unwrap();
    assert_eq!(tiny, 1.0 / 1000000000.0 / 1000000000.0);
}

#[test]
fn malformed() {
    assert_eq!(eval("1 2"), Err(EvalErr::MalformedExpression));
    assert_eq!(eval("1 +"), Err(EvalErr::MalformedExpression));
    assert_eq!(eval("+"), Err(EvalErr::MalformedExpression));
    assert_eq!(eval(""), Err(EvalErr::MalformedExpression));
    assert_eq!(eval("1 + + 2"), Err(EvalErr::MalformedExpression));
    assert_eq!(eval("-3"), Err(EvalErr::MalformedExpression));
    let with_paren = RPNExpr(vec![MathToken::Number(1.0), MathToken::OParen]);
    assert_eq!(MathContext::new().eval(&with_paren), Err(EvalErr::MalformedExpression));
}

#[test]
fn legacy_unary() {
    fuzzy_eq!(eval_legacy("-3").unwrap(), -3.0);
    fuzzy_eq!(eval_legacy("-3 + 5").unwrap(), 2.0);
    fuzzy_eq!(eval_legacy("1 + + 2").unwrap(), 3.0);
    fuzzy_eq!(eval_legacy("*4").unwrap(), 4.0);
    // the fallback only applies with exactly one operand on the stack
    assert_eq!(eval_legacy("+"), Err(EvalErr::MalformedExpression));
    assert_eq!(eval_legacy("1 2"), Err(EvalErr::MalformedExpression));
}

#[test]
fn division_by_zero() {
    assert_eq!(eval("1 / 0"), Err(EvalErr::DivisionByZero));
    assert_eq!(eval("1 / (2 - 2)"), Err(EvalErr::DivisionByZero));
    assert_eq!(eval("0 / 0"), Err(EvalErr::DivisionByZero));

    let ieee = MathContext::new().with_division(DivisionMode::Ieee);
    let rpn = ShuntingParser::parse_str("1 / 0").unwrap();
    assert_eq!(ieee.eval(&rpn), Ok(f64::INFINITY));
    let rpn = ShuntingParser::parse_str("0 / 0").unwrap();
    assert!(ieee.eval(&rpn).unwrap().is_nan());
}

#[test]
fn context_builders() {
    let cx = MathContext::new()
        .with_unary(UnaryFallback::Legacy)
        .with_division(DivisionMode::Ieee);
    assert_eq!(cx, MathContext::legacy());
    assert_eq!(MathContext::new().unary, UnaryFallback::Reject);
    assert_eq!(MathContext::new().division, DivisionMode::Checked);
}

#[test]
fn deterministic() {
    let rpn = ShuntingParser::parse_str("(7 - 2.5) * 3 / 9 + 1").unwrap();
    let cx = MathContext::new();
    let first = cx.eval(&rpn).unwrap();
    for _ in 0..10 {
        assert_eq!(cx.eval(&rpn).unwrap().to_bits(), first.to_bits());
    }
}

#[test]
fn raw_rpn() {
    let rpn = [
        MathToken::Number(5.0),
        MathToken::Number(1.0),
        MathToken::Number(2.0),
        MathToken::Op(Operator::Add),
        MathToken::Number(4.0),
        MathToken::Op(Operator::Mul),
        MathToken::Op(Operator::Add),
        MathToken::Number(3.0),
        MathToken::Op(Operator::Sub),
    ];
    fuzzy_eq!(MathContext::new().eval(&rpn).unwrap(), 14.0);
}
