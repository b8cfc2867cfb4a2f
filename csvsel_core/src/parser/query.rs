use crate::types::value::Value;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompareOp {
    Eq,
    Neq,
    Lt,
    Gt,
    Lte,
    Gte,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Condition {
    Simple {
        left: Value,
        op: CompareOp,
        right: Value,
    },
    And(Box<Condition>, Box<Condition>),
    Or(Box<Condition>, Box<Condition>),
    Not(Box<Condition>),
}

impl Condition {
    pub fn simple(left: Value, op: CompareOp, right: Value) -> Self {
        Condition::Simple { left, op, right }
    }

    pub fn and(left: Condition, right: Condition) -> Self {
        Condition::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Condition, right: Condition) -> Self {
        Condition::Or(Box::new(left), Box::new(right))
    }

    pub fn not(operand: Condition) -> Self {
        Condition::Not(Box::new(operand))
    }
}

/// One element of the SELECT list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Selector {
    Column(usize),
    AllColumns,
    Expr(Value),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub direction: Direction,
    pub key: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    pub selectors: Vec<Selector>,
    pub condition: Option<Condition>,
    pub order: Option<Order>,
}

impl Query {
    /// Every value node in the query, outermost first
    pub fn values(&self) -> Vec<&Value> {
        let mut out = Vec::new();
        for sel in &self.selectors {
            if let Selector::Expr(v) = sel {
                out.push(v);
            }
        }
        if let Some(cond) = &self.condition {
            collect_condition_values(cond, &mut out);
        }
        if let Some(order) = &self.order {
            out.push(&order.key);
        }
        out
    }
}

fn collect_condition_values<'a>(cond: &'a Condition, out: &mut Vec<&'a Value>) {
    match cond {
        Condition::Simple { left, right, .. } => {
            out.push(left);
            out.push(right);
        }
        Condition::And(l, r) | Condition::Or(l, r) => {
            collect_condition_values(l, out);
            collect_condition_values(r, out);
        }
        Condition::Not(inner) => collect_condition_values(inner, out),
    }
}
