use crate::engine::eval::evaluate;
use crate::error::CsvselResult;
use crate::parser::query::{CompareOp, Condition};
use crate::types::Row;
use crate::types::value::{ConcreteValue, parse_double, parse_long};
use std::cmp::Ordering;

/// A missing condition matches every row
pub fn matches(cond: Option<&Condition>, row: &Row) -> CsvselResult<bool> {
    match cond {
        None => Ok(true),
        Some(c) => eval_condition(c, row),
    }
}

pub fn eval_condition(cond: &Condition, row: &Row) -> CsvselResult<bool> {
    match cond {
        Condition::Simple { left, op, right } => {
            let lhs = evaluate(left, row)?;
            let rhs = evaluate(right, row)?;
            Ok(compare(lhs, *op, rhs))
        }
        Condition::And(l, r) => Ok(eval_condition(l, row)? && eval_condition(r, row)?),
        Condition::Or(l, r) => Ok(eval_condition(l, row)? || eval_condition(r, row)?),
        Condition::Not(inner) => Ok(!eval_condition(inner, row)?),
    }
}

/// Brings both sides of a comparison to a common type.
///
/// | left \ right | int | float | text |
/// |--------------|-----|-------|------|
/// | int          | int | float | *    |
/// | float        |float| float | float|
/// | text         | *   | float | text |
///
/// `*`: text containing a `.` makes both sides float, otherwise the text
/// becomes an int.
pub fn coerce_pair(lhs: ConcreteValue, rhs: ConcreteValue) -> (ConcreteValue, ConcreteValue) {
    use ConcreteValue::{Float, Int, Text};
    match (lhs, rhs) {
        (Float(a), b) => {
            let b = b.to_double();
            (Float(a), Float(b))
        }
        (a, Float(b)) => (Float(a.to_double()), Float(b)),
        (Int(a), Text(t)) => {
            if t.contains(&b'.') {
                (Float(a as f64), Float(parse_double(&t)))
            } else {
                (Int(a), Int(parse_long(&t)))
            }
        }
        (Text(t), Int(b)) => {
            if t.contains(&b'.') {
                (Float(parse_double(&t)), Float(b as f64))
            } else {
                (Int(parse_long(&t)), Int(b))
            }
        }
        pair => pair,
    }
}

pub fn compare(lhs: ConcreteValue, op: CompareOp, rhs: ConcreteValue) -> bool {
    match coerce_pair(lhs, rhs) {
        (ConcreteValue::Int(a), ConcreteValue::Int(b)) => apply(op, &a, &b),
        (ConcreteValue::Float(a), ConcreteValue::Float(b)) => apply(op, &a, &b),
        (ConcreteValue::Text(a), ConcreteValue::Text(b)) => apply(op, &a, &b),
        // coerce_pair always yields matching types
        _ => false,
    }
}

fn apply<T: PartialOrd + ?Sized>(op: CompareOp, a: &T, b: &T) -> bool {
    match op {
        CompareOp::Eq => a == b,
        CompareOp::Neq => a != b,
        CompareOp::Lt => a < b,
        CompareOp::Gt => a > b,
        CompareOp::Lte => a <= b,
        CompareOp::Gte => a >= b,
    }
}

/// Ordering for sort keys of one type; floats use IEEE total order
pub fn compare_keys(a: &ConcreteValue, b: &ConcreteValue) -> Ordering {
    match (a, b) {
        (ConcreteValue::Int(x), ConcreteValue::Int(y)) => x.cmp(y),
        (ConcreteValue::Float(x), ConcreteValue::Float(y)) => x.total_cmp(y),
        (ConcreteValue::Text(x), ConcreteValue::Text(y)) => x.cmp(y),
        _ => a.type_name().cmp(b.type_name()),
    }
}
