use super::*;
use csvsel_core::error::ErrorKind;

const BAD_QUOTE: &str = "a\nb\"x\nc\n";

#[test]
fn malformed_quote_aborts_and_keeps_partial_output() {
    let (out, result) = run_capture(EngineConfig::default(), "select *", BAD_QUOTE);
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        CsvselError::MalformedQuote {
            row_number: 1,
            field_number: 0
        }
    ));
    assert_eq!(err.kind(), ErrorKind::Data);
    assert_eq!(err.exit_code(), 65);
    assert_eq!(out, "a\n");
}

#[test]
fn malformed_quote_aborts_order_by_before_output() {
    let (out, result) = run_capture(EngineConfig::default(), "select * order by $0", BAD_QUOTE);
    assert!(matches!(result, Err(CsvselError::MalformedQuote { .. })));
    assert_eq!(out, "");
}

#[test]
fn lenient_mode_keeps_stray_quote() {
    let config = EngineConfig::default().with_quote_mode(QuoteMode::Lenient);
    let (out, result) = run_capture(config, "select *", BAD_QUOTE);
    result.unwrap();
    assert_eq!(out, "a\n\"b\"\"x\"\nc\n");
}

#[test]
fn unknown_function_runs_nothing() {
    let (out, result) = run_capture(EngineConfig::default(), "select nope($0)", PEOPLE);
    let err = result.unwrap_err();
    assert!(matches!(err, CsvselError::UnknownFunction(_)));
    assert_eq!(err.kind(), ErrorKind::Evaluation);
    assert_eq!(out, "");
}

#[test]
fn parse_error_exit_code() {
    let (_, result) = run_capture(EngineConfig::default(), "select * where", PEOPLE);
    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::QueryParse);
    assert_eq!(err.exit_code(), 64);
}

#[test]
fn debug_config_does_not_change_output() {
    let config = EngineConfig::default().with_debug(true);
    let (out, result) = run_capture(config, "select 0 where rownum = 2", PEOPLE);
    result.unwrap();
    assert_eq!(out, "bob\n");
}
