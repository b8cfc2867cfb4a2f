use crate::config::EngineConfig;
use crate::csv::{RowReader, write_record};
use crate::engine::condition::{compare_keys, matches};
use crate::engine::eval::evaluate;
use crate::engine::execute::ExecutionSummary;
use crate::engine::project::project_row;
use crate::error::{CsvselError, CsvselResult};
use crate::parser::query::{Direction, Order, Query};
use crate::types::value::ConcreteValue;
use std::io::{Read, Seek, Write};
use tracing::debug;

/// What pass one keeps per matching row: enough to find it again, plus its key
#[derive(Debug, Clone, PartialEq)]
pub struct SortRecord {
    pub row_number: u64,
    pub start_offset: u64,
    pub key: ConcreteValue,
}

/// Two passes over a seekable input.
///
/// Pass one filters every row and records `(row_number, start_offset, key)`
/// for the matches. The records are stable-sorted by key; descending output
/// walks the ascending order backwards. Pass two seeks to each recorded
/// offset, re-parses that one row and projects it. WHERE is not re-checked.
pub fn execute_ordered<R: Read + Seek, W: Write>(
    query: &Query,
    order: &Order,
    input: R,
    output: &mut W,
    config: &EngineConfig,
) -> CsvselResult<ExecutionSummary> {
    let mut reader = RowReader::with_mode(input, config.quote_mode);

    let (rows_read, mut records) = collect_sort_records(&mut reader, query, order, config)?;
    let rows_matched = records.len() as u64;
    debug!(rows_read, rows_matched, "order-by collect pass finished");

    records.sort_by(|a, b| compare_keys(&a.key, &b.key));
    if order.direction == Direction::Descending {
        records.reverse();
    }

    let mut rows_written = 0u64;
    for rec in &records {
        reader.read_row_at(rec.start_offset, rec.row_number, |row| {
            let fields = project_row(&query.selectors, &row)?;
            write_record(output, &fields, config.quote_style)?;
            Ok(())
        })?;
        rows_written += 1;
    }
    output.flush()?;

    debug!(rows_written, "order-by emit pass finished");
    Ok(ExecutionSummary {
        rows_read,
        rows_matched,
        rows_written,
    })
}

/// Pass one. Keys must all share one type.
pub fn collect_sort_records<R: Read>(
    reader: &mut RowReader<R>,
    query: &Query,
    order: &Order,
    config: &EngineConfig,
) -> CsvselResult<(u64, Vec<SortRecord>)> {
    let mut records: Vec<SortRecord> = Vec::new();
    let mut key_type: Option<&'static str> = None;

    let rows_read = reader.for_each_row(|row| {
        let matched = matches(query.condition.as_ref(), &row)?;
        if config.debug {
            debug!(row_number = row.row_number, matched, "row evaluated");
        }
        if !matched {
            return Ok(());
        }

        let key = evaluate(&order.key, &row)?;
        match key_type {
            None => key_type = Some(key.type_name()),
            Some(first) if first != key.type_name() => {
                return Err(CsvselError::MixedSortKeys {
                    first,
                    other: key.type_name(),
                });
            }
            Some(_) => {}
        }

        records.push(SortRecord {
            row_number: row.row_number,
            start_offset: row.start_offset,
            key,
        });
        Ok(())
    })?;

    Ok((rows_read, records))
}
