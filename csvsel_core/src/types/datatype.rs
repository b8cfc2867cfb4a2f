use serde::Serialize;

/// Target of an explicit cast (`value::long` etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Conversion {
    Long,
    Double,
    String,
}

pub fn parse_conversion(s: &str) -> Result<Conversion, String> {
    match s.to_lowercase().as_str() {
        "long" | "int" | "integer" => Ok(Conversion::Long),
        "double" | "float" | "real" => Ok(Conversion::Double),
        "string" | "text" => Ok(Conversion::String),
        other => Err(format!("Unknown type '{other}'. Use long|double|string")),
    }
}
