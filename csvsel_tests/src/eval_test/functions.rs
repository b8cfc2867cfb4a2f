use super::*;

fn substr(args: Vec<Value>) -> ConcreteValue {
    eval(Value::call("substr", args), &row(&["graycode"]))
}

#[test]
fn substr_perl_semantics_on_column() {
    let s = || Value::column(0);
    assert_eq!(substr(vec![s(), Value::int(20)]), text(""));
    assert_eq!(substr(vec![s(), Value::int(-3)]), text("ode"));
    assert_eq!(substr(vec![s(), Value::int(4)]), text("code"));
    assert_eq!(substr(vec![s(), Value::int(4), Value::int(3)]), text("cod"));
    assert_eq!(substr(vec![s(), Value::int(4), Value::int(-3)]), text("co"));
    assert_eq!(
        substr(vec![s(), Value::int(-20), Value::int(40)]),
        text("graycode")
    );
}

#[test]
fn substr_on_literal_matches_column() {
    let lit = || Value::text("graycode");
    assert_eq!(substr(vec![lit(), Value::int(-3)]), text("ode"));
    assert_eq!(substr(vec![lit(), Value::int(4), Value::int(-3)]), text("co"));
}

#[test]
fn substr_coerces_text_arguments() {
    assert_eq!(substr(vec![Value::column(0), Value::text("4")]), text("code"));
}

#[test]
fn strlen_counts_bytes() {
    let r = row(&["graycode", "héllo"]);
    assert_eq!(
        eval(Value::call("strlen", vec![Value::column(0)]), &r),
        ConcreteValue::Int(8)
    );
    assert_eq!(
        eval(Value::call("strlen", vec![Value::column(1)]), &r),
        ConcreteValue::Int(6)
    );
    assert_eq!(
        eval(Value::call("strlen", vec![Value::int(12345)]), &r),
        ConcreteValue::Int(5)
    );
}

#[test]
fn max_min_abs_always_return_float() {
    let r = row(&["3"]);
    assert_eq!(
        eval(Value::call("max", vec![Value::int(1), Value::int(2)]), &r),
        ConcreteValue::Float(2.0)
    );
    assert_eq!(
        eval(Value::call("min", vec![Value::column(0), Value::int(10)]), &r),
        ConcreteValue::Float(3.0)
    );
    assert_eq!(
        eval(Value::call("abs", vec![Value::int(-4)]), &r),
        ConcreteValue::Float(4.0)
    );
}

#[test]
fn case_folding_is_ascii_only() {
    let r = row(&["straße Mixed"]);
    assert_eq!(
        eval(Value::call("upper", vec![Value::column(0)]), &r),
        text("STRAßE MIXED")
    );
    assert_eq!(
        eval(Value::call("lower", vec![Value::column(0)]), &r),
        text("straße mixed")
    );
}

#[test]
fn upper_of_lower_equals_upper() {
    for s in ["", "abc", "ABC", "MiXeD 123 !?", "tab\tand\nnewline"] {
        let r = row(&[s]);
        let lower = Value::call("lower", vec![Value::column(0)]);
        let upper_lower = eval(Value::call("upper", vec![lower]), &r);
        let upper = eval(Value::call("upper", vec![Value::column(0)]), &r);
        assert_eq!(upper_lower, upper, "for {s:?}");
    }
}

#[test]
fn trim_strips_whitespace() {
    let r = row(&[" \tpadded value\r\n"]);
    assert_eq!(
        eval(Value::call("trim", vec![Value::column(0)]), &r),
        text("padded value")
    );
}

#[test]
fn argument_casts_apply_before_the_call() {
    let r = row(&["12.75"]);
    let arg = Value::column(0).cast(Conversion::Long);
    assert_eq!(
        eval(Value::call("abs", vec![arg]), &r),
        ConcreteValue::Float(12.0)
    );
}

#[test]
fn function_result_can_be_cast() {
    let r = row(&["graycode"]);
    let v = Value::call("strlen", vec![Value::column(0)]).cast(Conversion::String);
    assert_eq!(eval(v, &r), text("8"));
}
