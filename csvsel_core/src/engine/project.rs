use crate::engine::eval::evaluate;
use crate::error::CsvselResult;
use crate::parser::query::Selector;
use crate::types::Row;

/// Output fields for one matching row, in SELECT-list order
pub fn project_row(selectors: &[Selector], row: &Row) -> CsvselResult<Vec<Vec<u8>>> {
    let mut out: Vec<Vec<u8>> = Vec::with_capacity(selectors.len());
    for selector in selectors {
        match selector {
            Selector::AllColumns => out.extend(row.fields.iter().cloned()),
            Selector::Column(idx) => out.push(row.field(*idx).to_vec()),
            Selector::Expr(value) => out.push(evaluate(value, row)?.into_field()),
        }
    }
    Ok(out)
}
