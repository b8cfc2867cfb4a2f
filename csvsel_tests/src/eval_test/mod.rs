use csvsel_core::engine::condition::{coerce_pair, compare, eval_condition, matches};
use csvsel_core::engine::eval::evaluate;
use csvsel_core::error::CsvselError;
use csvsel_core::parser::query::{CompareOp, Condition};
use csvsel_core::types::Row;
use csvsel_core::types::datatype::Conversion;
use csvsel_core::types::value::{ConcreteValue, Special, Value};

fn row(fields: &[&str]) -> Row {
    Row::new(
        fields.iter().map(|f| f.as_bytes().to_vec()).collect(),
        7,
        0,
    )
}

fn text(s: &str) -> ConcreteValue {
    ConcreteValue::text(s)
}

fn eval(v: Value, r: &Row) -> ConcreteValue {
    evaluate(&v, r).unwrap()
}

mod functions;
