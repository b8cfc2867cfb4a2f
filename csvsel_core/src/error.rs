use thiserror::Error;

/// Result type for every fallible engine operation
pub type CsvselResult<T> = Result<T, CsvselError>;

/// Broad failure category, used by callers to pick an exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    QueryParse,
    Data,
    Evaluation,
    Io,
}

#[derive(Debug, Error)]
pub enum CsvselError {
    #[error("query parse error at token {position}: {message}")]
    QueryParse { message: String, position: usize },

    #[error("csv format error: unexpected quote at row {row_number}, field {field_number}")]
    MalformedQuote { row_number: u64, field_number: usize },

    #[error("no row found at byte offset {0}")]
    NoRowAtOffset(u64),

    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("function '{name}' takes {expected} arguments but got {got}")]
    Arity {
        name: String,
        expected: String,
        got: usize,
    },

    #[error("sort keys have mixed types: {first} and {other}")]
    MixedSortKeys {
        first: &'static str,
        other: &'static str,
    },

    #[error("ORDER BY needs a seekable input")]
    UnseekableInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CsvselError {
    pub fn parse(message: impl Into<String>, position: usize) -> Self {
        CsvselError::QueryParse {
            message: message.into(),
            position,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CsvselError::QueryParse { .. } => ErrorKind::QueryParse,
            CsvselError::MalformedQuote { .. } | CsvselError::NoRowAtOffset(_) => ErrorKind::Data,
            CsvselError::UnknownFunction(_)
            | CsvselError::Arity { .. }
            | CsvselError::MixedSortKeys { .. } => ErrorKind::Evaluation,
            CsvselError::UnseekableInput | CsvselError::Io(_) => ErrorKind::Io,
        }
    }

    /// sysexits(3) status for this error
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::QueryParse => 64,
            ErrorKind::Data | ErrorKind::Evaluation => 65,
            ErrorKind::Io => 74,
        }
    }
}
