use super::is_reserved;
use super::tokenizer::Token;
use crate::error::{CsvselError, CsvselResult};
use crate::types::datatype::parse_conversion;
use crate::types::value::{Special, Value};

pub(super) fn parse_value(tokens: &[Token], idx: &mut usize) -> CsvselResult<Value> {
    let mut value = parse_primary(tokens, idx)?;
    if *idx < tokens.len() && tokens[*idx].is_sym("::") {
        *idx += 1;
        let Some(Token::Word(ty)) = tokens.get(*idx) else {
            return Err(CsvselError::parse("Expected a type name after '::'", *idx));
        };
        let conversion = parse_conversion(ty).map_err(|e| CsvselError::parse(e, *idx))?;
        value = value.cast(conversion);
        *idx += 1;
        if *idx < tokens.len() && tokens[*idx].is_sym("::") {
            return Err(CsvselError::parse("Only one cast is allowed per value", *idx));
        }
    }
    Ok(value)
}

fn parse_primary(tokens: &[Token], idx: &mut usize) -> CsvselResult<Value> {
    let pos = *idx;
    let Some(tok) = tokens.get(pos) else {
        return Err(CsvselError::parse("Expected a value but the query ended", pos));
    };

    let w = match tok {
        Token::Str(s) => {
            *idx += 1;
            return Ok(Value::text(s.clone()));
        }
        Token::Sym(s) => {
            return Err(CsvselError::parse(
                format!("Expected a value but found '{s}'"),
                pos,
            ));
        }
        Token::Word(_) if is_reserved(tok) => {
            return Err(CsvselError::parse(
                format!("Expected a value but found keyword '{}'", tok.text()),
                pos,
            ));
        }
        Token::Word(w) => w,
    };

    if tokens.get(pos + 1).is_some_and(|t| t.is_sym("(")) {
        return parse_call(tokens, idx);
    }

    *idx += 1;

    if let Some(col) = w.strip_prefix('$') {
        let n = col
            .parse::<usize>()
            .map_err(|_| CsvselError::parse(format!("Bad column reference '{w}'"), pos))?;
        return Ok(Value::column(n));
    }
    if w.eq_ignore_ascii_case("rownum") {
        return Ok(Value::special(Special::RowNum));
    }
    if w.eq_ignore_ascii_case("numcols") {
        return Ok(Value::special(Special::NumCols));
    }
    if let Ok(n) = w.parse::<i64>() {
        return Ok(Value::int(n));
    }
    let numeric_start = w
        .bytes()
        .next()
        .is_some_and(|b| b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.'));
    if numeric_start {
        if let Ok(f) = w.parse::<f64>() {
            return Ok(Value::float(f));
        }
    }

    Err(CsvselError::parse(format!("Unknown value '{w}'"), pos))
}

fn parse_call(tokens: &[Token], idx: &mut usize) -> CsvselResult<Value> {
    let name = tokens[*idx].text().to_lowercase();
    // skip name and '('
    *idx += 2;

    let mut args: Vec<Value> = Vec::new();
    if *idx < tokens.len() && tokens[*idx].is_sym(")") {
        *idx += 1;
        return Ok(Value::call(name, args));
    }

    loop {
        args.push(parse_value(tokens, idx)?);
        match tokens.get(*idx) {
            Some(t) if t.is_sym(",") => *idx += 1,
            Some(t) if t.is_sym(")") => {
                *idx += 1;
                return Ok(Value::call(name, args));
            }
            _ => {
                return Err(CsvselError::parse(
                    format!("Unclosed argument list for '{name}'"),
                    *idx,
                ));
            }
        }
    }
}
