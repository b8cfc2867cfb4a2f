/// Which fields get wrapped in double quotes on output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// Quote fields containing a comma, newline or double quote
    #[default]
    Rfc4180,
    /// Older trigger: comma, newline or space
    Legacy,
}

/// How the reader treats quotes in places RFC 4180 does not allow them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteMode {
    /// Stray quotes and bytes trailing a closing quote are data errors
    #[default]
    Strict,
    /// Keep a mid-field quote as data; drop the byte after a closing quote
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Log every row decision at debug level
    pub debug: bool,
    pub quote_style: QuoteStyle,
    pub quote_mode: QuoteMode,
}

impl EngineConfig {
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_quote_style(mut self, style: QuoteStyle) -> Self {
        self.quote_style = style;
        self
    }

    pub fn with_quote_mode(mut self, mode: QuoteMode) -> Self {
        self.quote_mode = mode;
        self
    }
}
