use crate::config::QuoteMode;
use crate::error::{CsvselError, CsvselResult};
use crate::types::Row;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use tracing::{trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    FieldStart,
    Unquoted,
    Quoted,
    /// Saw `"` inside a quoted field: either an escape or the closing quote
    QuotedPendingQuote,
}

/// Streaming, quote-aware CSV row parser that tracks byte offsets.
///
/// Rows come out one at a time in stream order. A row can be parsed again
/// later with [`RowReader::read_row_at`] using its recorded `start_offset`.
#[derive(Debug)]
pub struct RowReader<R> {
    inner: BufReader<R>,
    mode: QuoteMode,
    position: u64,
    row_number: u64,
    failed: bool,
}

impl<R: Read> RowReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_mode(inner, QuoteMode::Strict)
    }

    pub fn with_mode(inner: R, mode: QuoteMode) -> Self {
        Self {
            inner: BufReader::new(inner),
            mode,
            position: 0,
            row_number: 0,
            failed: false,
        }
    }

    /// Bytes consumed from the start of the stream
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Number the next parsed row will carry
    pub fn row_number(&self) -> u64 {
        self.row_number
    }

    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }

    /// Next non-blank row, or `None` at end of stream
    pub fn next_row(&mut self) -> CsvselResult<Option<Row>> {
        while let Some(row) = self.read_raw_row()? {
            if row.is_blank() {
                trace!(row_number = row.row_number, "suppressed blank row");
                continue;
            }
            return Ok(Some(row));
        }
        Ok(None)
    }

    /// Parses to end of stream, handing each non-blank row to `on_row`.
    /// Returns how many rows were delivered.
    pub fn for_each_row<F>(&mut self, mut on_row: F) -> CsvselResult<u64>
    where
        F: FnMut(Row) -> CsvselResult<()>,
    {
        let mut delivered = 0u64;
        while let Some(row) = self.next_row()? {
            on_row(row)?;
            delivered += 1;
        }
        Ok(delivered)
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => {
                    let Some(&b) = buf.first() else {
                        return Ok(None);
                    };
                    self.inner.consume(1);
                    self.position += 1;
                    return Ok(Some(b));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn malformed(&self, field_number: usize) -> CsvselError {
        CsvselError::MalformedQuote {
            row_number: self.row_number,
            field_number,
        }
    }

    /// Parses one physical row, blank or not. `None` when nothing is left.
    fn read_raw_row(&mut self) -> CsvselResult<Option<Row>> {
        let start_offset = self.position;
        let mut fields: Vec<Vec<u8>> = Vec::new();
        let mut field: Vec<u8> = Vec::new();
        let mut state = FieldState::FieldStart;
        let mut consumed_any = false;

        while let Some(byte) = self.next_byte()? {
            consumed_any = true;

            match state {
                FieldState::Quoted => {
                    if byte == b'"' {
                        state = FieldState::QuotedPendingQuote;
                    } else {
                        field.push(byte);
                    }
                    continue;
                }
                FieldState::QuotedPendingQuote => match byte {
                    b'"' => {
                        field.push(b'"');
                        state = FieldState::Quoted;
                        continue;
                    }
                    // closing quote; the separator is handled below
                    b',' | b'\n' => state = FieldState::Unquoted,
                    _ => match self.mode {
                        QuoteMode::Strict => return Err(self.malformed(fields.len())),
                        QuoteMode::Lenient => {
                            warn!(
                                row_number = self.row_number,
                                field_number = fields.len(),
                                "dropping byte after closing quote"
                            );
                            state = FieldState::Unquoted;
                            continue;
                        }
                    },
                },
                FieldState::FieldStart | FieldState::Unquoted => {}
            }

            match byte {
                b',' => {
                    fields.push(std::mem::take(&mut field));
                    state = FieldState::FieldStart;
                }
                b'\n' => {
                    fields.push(field);
                    return Ok(Some(self.finish_row(fields, start_offset)));
                }
                b'"' if state == FieldState::FieldStart => state = FieldState::Quoted,
                b'"' => match self.mode {
                    QuoteMode::Strict => return Err(self.malformed(fields.len())),
                    QuoteMode::Lenient => {
                        warn!(
                            row_number = self.row_number,
                            field_number = fields.len(),
                            "keeping quote found mid-field"
                        );
                        field.push(byte);
                    }
                },
                _ => {
                    field.push(byte);
                    state = FieldState::Unquoted;
                }
            }
        }

        if !consumed_any {
            return Ok(None);
        }
        fields.push(field);
        Ok(Some(self.finish_row(fields, start_offset)))
    }

    fn finish_row(&mut self, fields: Vec<Vec<u8>>, start_offset: u64) -> Row {
        let row = Row::new(fields, self.row_number, start_offset);
        self.row_number += 1;
        row
    }
}

impl<R: Read + Seek> RowReader<R> {
    /// Moves the reader so the next row parsed starts at `offset` and is
    /// numbered `row_number`.
    pub fn seek_to(&mut self, offset: u64, row_number: u64) -> CsvselResult<()> {
        self.inner.seek(SeekFrom::Start(offset))?;
        self.position = offset;
        self.row_number = row_number;
        self.failed = false;
        Ok(())
    }

    /// Re-parses exactly one row starting at `offset` and hands it to `on_row`
    pub fn read_row_at<F, T>(&mut self, offset: u64, row_number: u64, on_row: F) -> CsvselResult<T>
    where
        F: FnOnce(Row) -> CsvselResult<T>,
    {
        self.seek_to(offset, row_number)?;
        match self.read_raw_row()? {
            Some(row) => on_row(row),
            None => Err(CsvselError::NoRowAtOffset(offset)),
        }
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = CsvselResult<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_row() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
