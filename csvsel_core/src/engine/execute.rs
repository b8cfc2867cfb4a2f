use crate::config::EngineConfig;
use crate::csv::{RowReader, write_record};
use crate::engine::condition::matches;
use crate::engine::project::project_row;
use crate::error::CsvselResult;
use crate::parser::query::Query;
use std::io::{Read, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Non-blank rows parsed from the input
    pub rows_read: u64,
    /// Rows for which the WHERE condition held
    pub rows_matched: u64,
    pub rows_written: u64,
}

/// Single pass: filter and project each row as it is read.
/// Any `order` on the query is ignored here.
pub fn execute_streaming<R: Read, W: Write>(
    query: &Query,
    input: R,
    output: &mut W,
    config: &EngineConfig,
) -> CsvselResult<ExecutionSummary> {
    let mut reader = RowReader::with_mode(input, config.quote_mode);
    let mut rows_matched = 0u64;
    let mut rows_written = 0u64;

    let rows_read = reader.for_each_row(|row| {
        let matched = matches(query.condition.as_ref(), &row)?;
        if config.debug {
            debug!(row_number = row.row_number, matched, "row evaluated");
        }
        if !matched {
            return Ok(());
        }
        rows_matched += 1;
        let fields = project_row(&query.selectors, &row)?;
        write_record(output, &fields, config.quote_style)?;
        rows_written += 1;
        Ok(())
    })?;

    output.flush()?;
    let summary = ExecutionSummary {
        rows_read,
        rows_matched,
        rows_written,
    };
    debug!(
        rows_read = summary.rows_read,
        rows_matched = summary.rows_matched,
        rows_written = summary.rows_written,
        "single-pass query finished"
    );
    Ok(summary)
}
