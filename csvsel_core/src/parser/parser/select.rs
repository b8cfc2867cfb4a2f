use super::is_reserved;
use super::tokenizer::Token;
use super::value::parse_value;
use crate::error::{CsvselError, CsvselResult};
use crate::parser::query::Selector;

/// Widest `N-M` range a single selector may expand to
pub const MAX_RANGE_COLUMNS: usize = 1 << 16;

pub(super) fn parse_selectors(tokens: &[Token], idx: &mut usize) -> CsvselResult<Vec<Selector>> {
    let mut selectors: Vec<Selector> = Vec::new();
    loop {
        if *idx >= tokens.len() || is_reserved(&tokens[*idx]) {
            let msg = if selectors.is_empty() {
                "SELECT list cannot be empty"
            } else {
                "Expected a column or value after ','"
            };
            return Err(CsvselError::parse(msg, *idx));
        }
        parse_selector(tokens, idx, &mut selectors)?;
        if *idx < tokens.len() && tokens[*idx].is_sym(",") {
            *idx += 1;
            continue;
        }
        return Ok(selectors);
    }
}

fn parse_selector(tokens: &[Token], idx: &mut usize, out: &mut Vec<Selector>) -> CsvselResult<()> {
    match &tokens[*idx] {
        Token::Sym(s) if s == "*" => {
            out.push(Selector::AllColumns);
            *idx += 1;
            Ok(())
        }
        Token::Word(w) if is_column_word(w) => {
            if *idx + 1 < tokens.len() && tokens[*idx + 1].is_sym("::") {
                return Err(CsvselError::parse(
                    format!("Cannot cast bare column '{w}'. Use ${w}::<type>"),
                    *idx + 1,
                ));
            }
            let (start, end) = parse_column_range(w, *idx)?;
            out.extend((start..=end).map(Selector::Column));
            *idx += 1;
            Ok(())
        }
        _ => {
            let v = parse_value(tokens, idx)?;
            out.push(Selector::Expr(v));
            Ok(())
        }
    }
}

/// `N` or `N-M`, digits only
fn is_column_word(w: &str) -> bool {
    let mut parts = w.splitn(2, '-');
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match (parts.next(), parts.next()) {
        (Some(a), None) => all_digits(a),
        (Some(a), Some(b)) => all_digits(a) && all_digits(b),
        _ => false,
    }
}

fn parse_column_range(w: &str, pos: usize) -> CsvselResult<(usize, usize)> {
    let parse_idx = |s: &str| {
        s.parse::<usize>()
            .map_err(|_| CsvselError::parse(format!("Column index '{s}' is out of range"), pos))
    };
    match w.split_once('-') {
        None => {
            let n = parse_idx(w)?;
            Ok((n, n))
        }
        Some((a, b)) => {
            let start = parse_idx(a)?;
            let end = parse_idx(b)?;
            if start > end {
                return Err(CsvselError::parse(
                    format!("Column range '{w}' runs backwards"),
                    pos,
                ));
            }
            if end - start >= MAX_RANGE_COLUMNS {
                return Err(CsvselError::parse(
                    format!("Column range '{w}' is too large (at most {MAX_RANGE_COLUMNS} columns)"),
                    pos,
                ));
            }
            Ok((start, end))
        }
    }
}
