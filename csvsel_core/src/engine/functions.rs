use crate::error::{CsvselError, CsvselResult};
use crate::types::datatype::Conversion;
use crate::types::value::{ConcreteValue, Value, ValueKind};

/// Signature of a built-in function. Arguments are converted to `arg_types`
/// before the body runs; `arg_types.len()` is the maximum arity.
#[derive(Debug)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub min_args: usize,
    pub arg_types: &'static [Conversion],
}

impl FunctionSpec {
    pub fn max_args(&self) -> usize {
        self.arg_types.len()
    }
}

pub const FUNCTIONS: &[FunctionSpec] = &[
    FunctionSpec {
        name: "substr",
        min_args: 2,
        arg_types: &[Conversion::String, Conversion::Long, Conversion::Long],
    },
    FunctionSpec {
        name: "strlen",
        min_args: 1,
        arg_types: &[Conversion::String],
    },
    FunctionSpec {
        name: "max",
        min_args: 2,
        arg_types: &[Conversion::Double, Conversion::Double],
    },
    FunctionSpec {
        name: "min",
        min_args: 2,
        arg_types: &[Conversion::Double, Conversion::Double],
    },
    FunctionSpec {
        name: "abs",
        min_args: 1,
        arg_types: &[Conversion::Double],
    },
    FunctionSpec {
        name: "lower",
        min_args: 1,
        arg_types: &[Conversion::String],
    },
    FunctionSpec {
        name: "upper",
        min_args: 1,
        arg_types: &[Conversion::String],
    },
    FunctionSpec {
        name: "trim",
        min_args: 1,
        arg_types: &[Conversion::String],
    },
];

pub fn lookup(name: &str) -> Option<&'static FunctionSpec> {
    FUNCTIONS.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}

/// Resolves `name` and checks it accepts `got` arguments
pub fn resolve(name: &str, got: usize) -> CsvselResult<&'static FunctionSpec> {
    let spec = lookup(name).ok_or_else(|| CsvselError::UnknownFunction(name.to_string()))?;
    if got < spec.min_args || got > spec.max_args() {
        let expected = if spec.min_args == spec.max_args() {
            spec.min_args.to_string()
        } else {
            format!("{}-{}", spec.min_args, spec.max_args())
        };
        return Err(CsvselError::Arity {
            name: spec.name.to_string(),
            expected,
            got,
        });
    }
    Ok(spec)
}

/// Checks every call in `value`, including nested arguments
pub fn validate_value(value: &Value) -> CsvselResult<()> {
    if let ValueKind::Call { name, args } = &value.kind {
        resolve(name, args.len())?;
        for arg in args {
            validate_value(arg)?;
        }
    }
    Ok(())
}

/// Runs a function on arguments already converted to its declared types
pub fn call(spec: &FunctionSpec, args: Vec<ConcreteValue>) -> CsvselResult<ConcreteValue> {
    let mut args = args.into_iter();
    let mut next = || args.next();

    let out = match spec.name {
        "substr" => {
            let s = text_arg(next());
            let start = next().map(|v| v.to_long()).unwrap_or(0);
            let len = next().map(|v| v.to_long());
            ConcreteValue::Text(substr(&s, start, len))
        }
        "strlen" => {
            let s = text_arg(next());
            ConcreteValue::Int(i64::try_from(s.len()).unwrap_or(i64::MAX))
        }
        "max" => {
            let a = double_arg(next());
            let b = double_arg(next());
            ConcreteValue::Float(a.max(b))
        }
        "min" => {
            let a = double_arg(next());
            let b = double_arg(next());
            ConcreteValue::Float(a.min(b))
        }
        "abs" => ConcreteValue::Float(double_arg(next()).abs()),
        "lower" => ConcreteValue::Text(text_arg(next()).to_ascii_lowercase()),
        "upper" => ConcreteValue::Text(text_arg(next()).to_ascii_uppercase()),
        "trim" => ConcreteValue::Text(trim(&text_arg(next())).to_vec()),
        other => return Err(CsvselError::UnknownFunction(other.to_string())),
    };
    Ok(out)
}

fn text_arg(v: Option<ConcreteValue>) -> Vec<u8> {
    v.map(ConcreteValue::into_field).unwrap_or_default()
}

fn double_arg(v: Option<ConcreteValue>) -> f64 {
    v.map(|v| v.to_double()).unwrap_or(0.0)
}

/// Perl-style substring over bytes.
///
/// A negative `start` counts from the end. A negative `len` marks the end
/// relative to the end of the string, `-1` meaning the last byte.
pub fn substr(s: &[u8], start: i64, len: Option<i64>) -> Vec<u8> {
    let total = i64::try_from(s.len()).unwrap_or(i64::MAX);

    let mut start = start;
    if start < 0 {
        start = start.saturating_add(total).max(0);
    }
    if start >= total {
        return Vec::new();
    }

    let end = match len {
        None => total,
        Some(n) if n < 0 => total.saturating_add(n).saturating_add(1),
        Some(n) => start.saturating_add(n),
    }
    .min(total);

    if end <= start {
        return Vec::new();
    }
    s[start as usize..end as usize].to_vec()
}

pub fn trim(s: &[u8]) -> &[u8] {
    let is_space = |b: &u8| matches!(b, b' ' | b'\t' | b'\n' | b'\r');
    let Some(first) = s.iter().position(|b| !is_space(b)) else {
        return &[];
    };
    let last = s.iter().rposition(|b| !is_space(b)).unwrap_or(first);
    &s[first..=last]
}
