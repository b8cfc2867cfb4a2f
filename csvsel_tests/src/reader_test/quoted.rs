use super::*;

fn read_with_mode(input: &str, mode: QuoteMode) -> Result<Vec<Row>, CsvselError> {
    RowReader::with_mode(Cursor::new(input.as_bytes().to_vec()), mode).collect()
}

#[test]
fn quoted_field_keeps_commas_and_newlines() {
    let rows = read_all("\"a,b\",\"x\ny\"\n");
    assert_eq!(rows.len(), 1);
    assert_eq!(fields(&rows[0]), vec!["a,b", "x\ny"]);
}

#[test]
fn doubled_quote_is_literal_quote() {
    let rows = read_all("\"say \"\"hi\"\"\",z\n");
    assert_eq!(fields(&rows[0]), vec!["say \"hi\"", "z"]);
}

#[test]
fn empty_quoted_field() {
    let rows = read_all("\"\",x\n");
    assert_eq!(fields(&rows[0]), vec!["", "x"]);
}

#[test]
fn quoted_empty_line_is_suppressed() {
    let rows = read_all("\"\"\nnext\n");
    assert_eq!(rows.len(), 1);
    assert_eq!(fields(&rows[0]), vec!["next"]);
    assert_eq!(rows[0].row_number, 1);
}

#[test]
fn quote_in_middle_of_field_is_error() {
    let err = read_with_mode("x,y\nok,a\"b\n", QuoteMode::Strict).unwrap_err();
    match err {
        CsvselError::MalformedQuote {
            row_number,
            field_number,
        } => {
            assert_eq!(row_number, 1);
            assert_eq!(field_number, 1);
        }
        other => panic!("expected malformed quote, got {other:?}"),
    }
}

#[test]
fn byte_after_closing_quote_is_error() {
    let err = read_with_mode("\"ab\"c,d\n", QuoteMode::Strict).unwrap_err();
    assert!(matches!(
        err,
        CsvselError::MalformedQuote {
            row_number: 0,
            field_number: 0
        }
    ));
    assert!(err.to_string().contains("unexpected quote"));
}

#[test]
fn lenient_mode_keeps_mid_field_quote_and_drops_trailing_byte() {
    let rows = read_with_mode("ab\"c,\"xy\"z\n", QuoteMode::Lenient).unwrap();
    assert_eq!(fields(&rows[0]), vec!["ab\"c", "xy"]);
}

#[test]
fn unterminated_quote_at_eof_keeps_content() {
    let rows = read_all("\"abc");
    assert_eq!(fields(&rows[0]), vec!["abc"]);
}

#[test]
fn error_before_first_row_delivers_nothing() {
    let mut delivered = 0;
    let result = reader("a\"\nb\n").for_each_row(|_| {
        delivered += 1;
        Ok(())
    });
    assert!(result.is_err());
    assert_eq!(delivered, 0);
}
