use crate::config::QuoteStyle;
use std::io::{self, Write};

pub fn needs_quotes(field: &[u8], style: QuoteStyle) -> bool {
    field.iter().any(|b| match style {
        QuoteStyle::Rfc4180 => matches!(b, b',' | b'\n' | b'"'),
        QuoteStyle::Legacy => matches!(b, b',' | b'\n' | b' '),
    })
}

/// Writes one field, quoting it and doubling inner quotes when required
pub fn write_field<W: Write>(out: &mut W, field: &[u8], style: QuoteStyle) -> io::Result<()> {
    if !needs_quotes(field, style) {
        return out.write_all(field);
    }

    out.write_all(b"\"")?;
    for chunk in field.split_inclusive(|b| *b == b'"') {
        out.write_all(chunk)?;
        if chunk.last() == Some(&b'"') {
            out.write_all(b"\"")?;
        }
    }
    out.write_all(b"\"")
}

/// Writes fields joined by commas, terminated by `\n`
pub fn write_record<W: Write>(out: &mut W, fields: &[Vec<u8>], style: QuoteStyle) -> io::Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.write_all(b",")?;
        }
        write_field(out, field, style)?;
    }
    out.write_all(b"\n")
}
