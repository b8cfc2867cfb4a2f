use crate::error::{CsvselError, CsvselResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Bare word: keyword, number, `$N`, column range or function name
    Word(String),
    /// Double-quoted string literal, escapes already resolved
    Str(String),
    /// Punctuation or comparison operator
    Sym(String),
}

impl Token {
    pub fn is_sym(&self, s: &str) -> bool {
        matches!(self, Token::Sym(t) if t == s)
    }

    pub fn is_keyword(&self, kw: &str) -> bool {
        matches!(self, Token::Word(w) if w.eq_ignore_ascii_case(kw))
    }

    pub fn text(&self) -> &str {
        match self {
            Token::Word(s) | Token::Str(s) | Token::Sym(s) => s,
        }
    }
}

pub fn tokenize(input: &str) -> CsvselResult<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut just_closed_quote = false;

    let mut it = input.chars().peekable();

    while let Some(ch) = it.next() {
        match ch {
            '"' => {
                if just_closed_quote {
                    return Err(CsvselError::parse(
                        "Unexpected quote after closing quote. Add whitespace between tokens.",
                        tokens.len(),
                    ));
                }

                if !in_quotes {
                    if !current.is_empty() {
                        return Err(CsvselError::parse(
                            "Quote (\") cannot start in the middle of a token. Add whitespace before the quote.",
                            tokens.len(),
                        ));
                    }
                    in_quotes = true;
                } else {
                    in_quotes = false;
                    just_closed_quote = true;
                }
            }

            '\\' if in_quotes => {
                match it.peek().copied() {
                    Some('"') => {
                        it.next();
                        current.push('"');
                    }
                    Some('\\') => {
                        it.next();
                        current.push('\\');
                    }
                    _ => {
                        return Err(CsvselError::parse(
                            "Invalid escape sequence in quotes. Use \\\" for a quote or \\\\ for a backslash.",
                            tokens.len(),
                        ));
                    }
                }
            }

            c if in_quotes => current.push(c),

            c if c.is_whitespace() => {
                flush(&mut tokens, &mut current, &mut just_closed_quote);
            }

            ',' | '(' | ')' | '*' => {
                flush(&mut tokens, &mut current, &mut just_closed_quote);
                tokens.push(Token::Sym(ch.to_string()));
            }

            ':' => {
                flush(&mut tokens, &mut current, &mut just_closed_quote);
                if it.peek().copied() != Some(':') {
                    return Err(CsvselError::parse(
                        "Single ':' found. Casts are written as <value>::<type>.",
                        tokens.len(),
                    ));
                }
                it.next();
                tokens.push(Token::Sym("::".to_string()));
            }

            '>' | '<' | '=' | '!' => {
                flush(&mut tokens, &mut current, &mut just_closed_quote);
                let next = it.peek().copied();
                let op = match (ch, next) {
                    (_, Some('=')) => {
                        it.next();
                        format!("{ch}=")
                    }
                    ('<', Some('>')) => {
                        it.next();
                        "<>".to_string()
                    }
                    ('!', _) => {
                        return Err(CsvselError::parse(
                            "'!' must be followed by '='",
                            tokens.len(),
                        ));
                    }
                    _ => ch.to_string(),
                };
                tokens.push(Token::Sym(op));
            }

            _ => {
                if just_closed_quote {
                    return Err(CsvselError::parse(
                        "Characters found immediately after a closing quote. Add whitespace after the quoted string.",
                        tokens.len(),
                    ));
                }
                current.push(ch);
            }
        }
    }

    if in_quotes {
        return Err(CsvselError::parse(
            "Unclosed quote (\") in input",
            tokens.len(),
        ));
    }

    flush(&mut tokens, &mut current, &mut just_closed_quote);
    Ok(tokens)
}

fn flush(tokens: &mut Vec<Token>, current: &mut String, just_closed_quote: &mut bool) {
    if *just_closed_quote {
        tokens.push(Token::Str(std::mem::take(current)));
        *just_closed_quote = false;
    } else if !current.is_empty() {
        tokens.push(Token::Word(std::mem::take(current)));
    }
}
