mod select;
pub mod tokenizer;
mod value;
mod where_clause;

use crate::engine::functions::validate_value;
use crate::error::{CsvselError, CsvselResult};
use crate::parser::query::{Direction, Order, Query};
use select::parse_selectors;
use tokenizer::{Token, tokenize};
use value::parse_value;
use where_clause::parse_condition;

const USAGE: &str = "Usage: select <cols|*|values> [where <condition>] [order by <value> [asc|desc]]";

/// Words that end one clause and start the next
const RESERVED: &[&str] = &["select", "where", "order", "by", "and", "or", "not", "asc", "desc"];

pub fn parse(input: &str) -> CsvselResult<Query> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(CsvselError::parse("Empty query", 0));
    }

    if !tokens[0].is_keyword("select") {
        return Err(CsvselError::parse(
            format!("Unknown command '{}'. {USAGE}", tokens[0].text()),
            0,
        ));
    }

    let mut idx = 1usize;
    let selectors = parse_selectors(&tokens, &mut idx)?;

    let mut condition = None;
    if idx < tokens.len() && tokens[idx].is_keyword("where") {
        idx += 1;
        condition = Some(parse_condition(&tokens, &mut idx)?);
    }

    let mut order = None;
    if idx < tokens.len() && tokens[idx].is_keyword("order") {
        idx += 1;
        if idx >= tokens.len() || !tokens[idx].is_keyword("by") {
            return Err(CsvselError::parse("ORDER must be followed by BY", idx));
        }
        idx += 1;
        let key = parse_value(&tokens, &mut idx)?;
        let mut direction = Direction::Ascending;
        if idx < tokens.len() && tokens[idx].is_keyword("asc") {
            idx += 1;
        } else if idx < tokens.len() && tokens[idx].is_keyword("desc") {
            direction = Direction::Descending;
            idx += 1;
        }
        order = Some(Order { direction, key });
    }

    if idx != tokens.len() {
        return Err(CsvselError::parse(
            format!("Unexpected token '{}'. {USAGE}", tokens[idx].text()),
            idx,
        ));
    }

    let query = Query {
        selectors,
        condition,
        order,
    };
    for v in query.values() {
        validate_value(v)?;
    }
    Ok(query)
}

pub(super) fn is_reserved(tok: &Token) -> bool {
    RESERVED.iter().any(|kw| tok.is_keyword(kw))
}
