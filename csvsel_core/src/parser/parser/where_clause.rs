use super::tokenizer::Token;
use super::value::parse_value;
use crate::error::{CsvselError, CsvselResult};
use crate::parser::query::{CompareOp, Condition};

pub(super) fn parse_compare_op(tok: &Token, pos: usize) -> CsvselResult<CompareOp> {
    let raw = match tok {
        Token::Sym(s) | Token::Word(s) => s.to_lowercase(),
        Token::Str(s) => {
            return Err(CsvselError::parse(
                format!("Expected a comparison operator but found \"{s}\""),
                pos,
            ));
        }
    };
    match raw.as_str() {
        "=" | "==" | "eq" => Ok(CompareOp::Eq),
        "!=" | "<>" | "ne" => Ok(CompareOp::Neq),
        ">" | "gt" => Ok(CompareOp::Gt),
        "<" | "lt" => Ok(CompareOp::Lt),
        ">=" | "gte" => Ok(CompareOp::Gte),
        "<=" | "lte" => Ok(CompareOp::Lte),
        _ => Err(CsvselError::parse(
            format!("Unknown WHERE operator '{raw}'. Use =|!=|<>|>|<|>=|<=|eq|ne|gt|lt|gte|lte"),
            pos,
        )),
    }
}

pub(super) fn parse_condition(tokens: &[Token], idx: &mut usize) -> CsvselResult<Condition> {
    parse_or_expr(tokens, idx)
}

fn parse_or_expr(tokens: &[Token], idx: &mut usize) -> CsvselResult<Condition> {
    let mut left = parse_and_expr(tokens, idx)?;
    while *idx < tokens.len() && tokens[*idx].is_keyword("or") {
        *idx += 1;
        let right = parse_and_expr(tokens, idx)?;
        left = Condition::or(left, right);
    }
    Ok(left)
}

fn parse_and_expr(tokens: &[Token], idx: &mut usize) -> CsvselResult<Condition> {
    let mut left = parse_not_expr(tokens, idx)?;
    while *idx < tokens.len() && tokens[*idx].is_keyword("and") {
        *idx += 1;
        let right = parse_not_expr(tokens, idx)?;
        left = Condition::and(left, right);
    }
    Ok(left)
}

fn parse_not_expr(tokens: &[Token], idx: &mut usize) -> CsvselResult<Condition> {
    if *idx >= tokens.len() {
        return Err(CsvselError::parse("WHERE condition is incomplete", *idx));
    }
    if tokens[*idx].is_keyword("not") {
        *idx += 1;
        let operand = parse_not_expr(tokens, idx)?;
        return Ok(Condition::not(operand));
    }
    if tokens[*idx].is_sym("(") {
        *idx += 1;
        let expr = parse_or_expr(tokens, idx)?;
        if *idx >= tokens.len() || !tokens[*idx].is_sym(")") {
            return Err(CsvselError::parse("Unclosed '(' in WHERE condition", *idx));
        }
        *idx += 1;
        return Ok(expr);
    }
    parse_simple(tokens, idx)
}

fn parse_simple(tokens: &[Token], idx: &mut usize) -> CsvselResult<Condition> {
    let left = parse_value(tokens, idx)?;
    let Some(op_tok) = tokens.get(*idx) else {
        return Err(CsvselError::parse(
            "Expected a comparison operator but the query ended",
            *idx,
        ));
    };
    let op = parse_compare_op(op_tok, *idx)?;
    *idx += 1;
    let right = parse_value(tokens, idx)?;
    Ok(Condition::simple(left, op, right))
}
