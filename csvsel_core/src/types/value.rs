use crate::types::datatype::Conversion;
use serde::Serialize;

/// Values the engine computes per row without reading a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Special {
    NumCols,
    RowNum,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ValueKind {
    Int(i64),
    Float(f64),
    Text(String),
    Column(usize),
    Special(Special),
    Call { name: String, args: Vec<Value> },
}

/// A value position in a query, with the cast the query asked for, if any
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Value {
    pub kind: ValueKind,
    pub conversion: Option<Conversion>,
}

impl Value {
    pub fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            conversion: None,
        }
    }

    pub fn int(n: i64) -> Self {
        Self::new(ValueKind::Int(n))
    }

    pub fn float(f: f64) -> Self {
        Self::new(ValueKind::Float(f))
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(ValueKind::Text(s.into()))
    }

    pub fn column(idx: usize) -> Self {
        Self::new(ValueKind::Column(idx))
    }

    pub fn special(s: Special) -> Self {
        Self::new(ValueKind::Special(s))
    }

    pub fn call(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self::new(ValueKind::Call {
            name: name.into(),
            args,
        })
    }

    pub fn cast(mut self, conversion: Conversion) -> Self {
        self.conversion = Some(conversion);
        self
    }
}

/// Result of evaluating a `Value` against a row
#[derive(Debug, Clone, PartialEq)]
pub enum ConcreteValue {
    Int(i64),
    Float(f64),
    Text(Vec<u8>),
}

impl ConcreteValue {
    pub fn text(s: impl Into<Vec<u8>>) -> Self {
        ConcreteValue::Text(s.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ConcreteValue::Int(_) => "int",
            ConcreteValue::Float(_) => "float",
            ConcreteValue::Text(_) => "text",
        }
    }

    pub fn to_long(&self) -> i64 {
        match self {
            ConcreteValue::Int(n) => *n,
            ConcreteValue::Float(f) => f.trunc() as i64,
            ConcreteValue::Text(t) => parse_long(t),
        }
    }

    pub fn to_double(&self) -> f64 {
        match self {
            ConcreteValue::Int(n) => *n as f64,
            ConcreteValue::Float(f) => *f,
            ConcreteValue::Text(t) => parse_double(t),
        }
    }

    pub fn convert(self, conversion: Conversion) -> ConcreteValue {
        match conversion {
            Conversion::Long => ConcreteValue::Int(self.to_long()),
            Conversion::Double => ConcreteValue::Float(self.to_double()),
            Conversion::String => ConcreteValue::Text(self.into_field()),
        }
    }

    /// Output bytes: decimal ints, fixed-point floats, text verbatim
    pub fn into_field(self) -> Vec<u8> {
        match self {
            ConcreteValue::Int(n) => n.to_string().into_bytes(),
            ConcreteValue::Float(f) => format!("{f:.6}").into_bytes(),
            ConcreteValue::Text(t) => t,
        }
    }
}

fn strip_currency(raw: &[u8]) -> Vec<u8> {
    raw.iter()
        .copied()
        .filter(|b| *b != b'$' && *b != b',')
        .collect()
}

fn skip_leading_space(s: &[u8]) -> &[u8] {
    let start = s
        .iter()
        .position(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c))
        .unwrap_or(s.len());
    &s[start..]
}

/// Integer prefix of `raw` after dropping `$` and `,`; no digits parses as 0.
/// Out-of-range values saturate.
pub fn parse_long(raw: &[u8]) -> i64 {
    let stripped = strip_currency(raw);
    let s = skip_leading_space(&stripped);

    let (negative, digits) = match s.first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut n: i64 = 0;
    for b in digits.iter().take_while(|b| b.is_ascii_digit()) {
        let d = i64::from(b - b'0');
        n = if negative {
            n.saturating_mul(10).saturating_sub(d)
        } else {
            n.saturating_mul(10).saturating_add(d)
        };
    }
    n
}

/// Floating-point prefix of `raw` after dropping `$` and `,`; no number parses as 0.0
pub fn parse_double(raw: &[u8]) -> f64 {
    let stripped = strip_currency(raw);
    let s = skip_leading_space(&stripped);

    let mut end = 0usize;
    if matches!(s.first(), Some(b'-') | Some(b'+')) {
        end = 1;
    }

    let special = &s[end..];
    for word in ["infinity", "inf", "nan"] {
        if special.len() >= word.len() && special[..word.len()].eq_ignore_ascii_case(word.as_bytes())
        {
            let text = String::from_utf8_lossy(&s[..end + word.len()]).to_string();
            return text.parse().unwrap_or(0.0);
        }
    }

    let int_digits = count_digits(&s[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if s.get(end) == Some(&b'.') {
        frac_digits = count_digits(&s[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    if matches!(s.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(s.get(exp_end), Some(b'-') | Some(b'+')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&s[exp_end.min(s.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    // the prefix is plain ASCII by construction
    String::from_utf8_lossy(&s[..end]).parse().unwrap_or(0.0)
}

fn count_digits(s: &[u8]) -> usize {
    s.iter().take_while(|b| b.is_ascii_digit()).count()
}
