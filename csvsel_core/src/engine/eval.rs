use crate::engine::functions;
use crate::error::CsvselResult;
use crate::types::Row;
use crate::types::value::{ConcreteValue, Special, Value, ValueKind};

/// Evaluates a query value against one row, then applies its cast
pub fn evaluate(node: &Value, row: &Row) -> CsvselResult<ConcreteValue> {
    let base = match &node.kind {
        ValueKind::Int(n) => ConcreteValue::Int(*n),
        ValueKind::Float(f) => ConcreteValue::Float(*f),
        ValueKind::Text(s) => ConcreteValue::text(s.as_bytes()),
        ValueKind::Column(idx) => ConcreteValue::text(row.field(*idx)),
        ValueKind::Special(Special::NumCols) => {
            ConcreteValue::Int(i64::try_from(row.field_count()).unwrap_or(i64::MAX))
        }
        ValueKind::Special(Special::RowNum) => {
            ConcreteValue::Int(i64::try_from(row.row_number).unwrap_or(i64::MAX))
        }
        ValueKind::Call { name, args } => {
            let spec = functions::resolve(name, args.len())?;
            let mut evaluated = Vec::with_capacity(args.len());
            for (arg, ty) in args.iter().zip(spec.arg_types) {
                evaluated.push(evaluate(arg, row)?.convert(*ty));
            }
            functions::call(spec, evaluated)?
        }
    };

    Ok(match node.conversion {
        Some(conversion) => base.convert(conversion),
        None => base,
    })
}
