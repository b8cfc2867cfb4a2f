use csvsel_core::config::{QuoteMode, QuoteStyle};
use csvsel_core::csv::RowReader;
use csvsel_core::error::CsvselError;
use csvsel_core::types::Row;
use std::io::Cursor;

fn reader(input: &str) -> RowReader<Cursor<Vec<u8>>> {
    RowReader::new(Cursor::new(input.as_bytes().to_vec()))
}

fn read_all(input: &str) -> Vec<Row> {
    let mut rows = Vec::new();
    reader(input)
        .for_each_row(|row| {
            rows.push(row);
            Ok(())
        })
        .unwrap();
    rows
}

fn fields(row: &Row) -> Vec<String> {
    row.fields
        .iter()
        .map(|f| String::from_utf8(f.clone()).unwrap())
        .collect()
}

mod quoted;
