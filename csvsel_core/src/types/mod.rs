pub mod datatype;
pub mod value;

/// One logical CSV record: raw field bytes plus where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub fields: Vec<Vec<u8>>,
    /// 0-based, counts suppressed blank rows too
    pub row_number: u64,
    /// Stream position of the row's first byte
    pub start_offset: u64,
}

impl Row {
    pub fn new(fields: Vec<Vec<u8>>, row_number: u64, start_offset: u64) -> Self {
        Self {
            fields,
            row_number,
            start_offset,
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Field bytes, or empty for an index past the end of the row
    pub fn field(&self, idx: usize) -> &[u8] {
        self.fields.get(idx).map(Vec::as_slice).unwrap_or(&[])
    }

    /// A blank physical line parses as exactly one empty field
    pub fn is_blank(&self) -> bool {
        self.fields.len() == 1 && self.fields[0].is_empty()
    }
}
