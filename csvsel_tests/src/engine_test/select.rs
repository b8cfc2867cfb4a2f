use super::*;

#[test]
fn wildcard_reproduces_input_without_blank_rows() {
    let out = run("select *", PEOPLE);
    assert_eq!(
        out,
        "name,age,city\nalice,30,\"Portland, OR\"\nbob,25,Seattle\ncarol,35,\"New\nYork\"\ndave,25,Boston\n"
    );
}

#[test]
fn filter_with_implicit_numeric_coercion() {
    assert_eq!(run("select 0 where $1 > 26", PEOPLE), "alice\ncarol\n");
    assert_eq!(run("select 0 where $1::long > 26", PEOPLE), "alice\ncarol\n");
}

#[test]
fn rownum_counts_suppressed_rows() {
    assert_eq!(
        run("select rownum, 0 where rownum > 0", PEOPLE),
        "1,alice\n2,bob\n4,carol\n5,dave\n"
    );
}

#[test]
fn out_of_range_column_is_empty() {
    assert_eq!(
        run(r#"select 0, 7 where $7 = "" and rownum = 1"#, PEOPLE),
        "alice,\n"
    );
}

#[test]
fn computed_values() {
    assert_eq!(
        run("select upper($0), strlen($2), numcols where rownum = 2", PEOPLE),
        "BOB,7,3\n"
    );
    assert_eq!(
        run("select max($1, 10) where rownum = 1", PEOPLE),
        "30.000000\n"
    );
}

#[test]
fn projected_text_is_requoted() {
    assert_eq!(
        run(
            r#"select substr($2, 0, 9), $2, "say \"hi\"" where rownum = 0"#,
            "x,y,\"Portland, OR\"\n"
        ),
        "\"Portland,\",\"Portland, OR\",\"say \"\"hi\"\"\"\n"
    );
}

#[test]
fn column_ranges_and_repeats() {
    assert_eq!(run("select 2, 0-1, 0 where rownum = 2", PEOPLE), "Seattle,bob,25,bob\n");
}

#[test]
fn boolean_combinations() {
    assert_eq!(
        run(
            r#"select 0 where not ($2 = "Seattle" or $1 < 30) and rownum > 0"#,
            PEOPLE
        ),
        "alice\ncarol\n"
    );
}

#[test]
fn dotted_literal_promotes_to_float() {
    assert_eq!(run("select 0 where $1 = 25.0", PEOPLE), "bob\ndave\n");
    assert_eq!(run(r#"select 0 where 30 = "30.0""#, "a\n"), "a\n");
}

#[test]
fn currency_values_compare_numerically() {
    let input = "item,price\nwidget,\"$1,200.50\"\ngadget,$99\n";
    assert_eq!(
        run("select 0 where $1::double > 100 and rownum > 0", input),
        "widget\n"
    );
}

#[test]
fn summary_counts_rows() {
    let (_, result) = run_capture(EngineConfig::default(), "select 0 where rownum > 1", PEOPLE);
    let summary = result.unwrap();
    assert_eq!(summary.rows_read, 5);
    assert_eq!(summary.rows_matched, 3);
    assert_eq!(summary.rows_written, 3);
}

#[test]
fn streaming_run_accepts_plain_readers() {
    let engine = Engine::default();
    let query = engine.parse("select 1 where rownum > 0").unwrap();
    let mut out = Vec::new();
    let input: &[u8] = b"h,v\na,1\nb,2\n";
    engine.run_streaming(&query, input, &mut out).unwrap();
    assert_eq!(out, b"1\n2\n");
}

#[test]
fn legacy_quoting_style() {
    let config = EngineConfig::default().with_quote_style(QuoteStyle::Legacy);
    let (out, result) = run_capture(config, "select *", "hello world,x\n");
    result.unwrap();
    assert_eq!(out, "\"hello world\",x\n");
}

#[test]
fn embedded_quote_is_requoted_on_output() {
    assert_eq!(run("select 0", "\"he\"\"llo\"\n"), "\"he\"\"llo\"\n");
}

#[test]
fn engine_keeps_its_config() {
    let config = EngineConfig::default()
        .with_debug(true)
        .with_quote_mode(QuoteMode::Lenient);
    let engine = Engine::new(config);
    assert_eq!(engine.config(), &config);
    assert_eq!(Engine::default().config().quote_style, QuoteStyle::Rfc4180);
}
