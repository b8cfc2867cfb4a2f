pub mod config;
pub mod csv;
pub mod engine;
pub mod error;
pub mod parser;
pub mod types;

use config::EngineConfig;
use engine::ExecutionSummary;
use error::{CsvselError, CsvselResult};
use parser::query::Query;
use std::io::{Read, Seek, Write};
use tracing::debug;

/// Runs parsed queries over CSV streams with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn parse(&self, input: &str) -> CsvselResult<Query> {
        let query = parser::parser::parse(input)?;
        if self.config.debug {
            debug!(?query, "parsed query");
        }
        Ok(query)
    }

    /// Parses `query` and runs it
    pub fn execute<R: Read + Seek, W: Write>(
        &self,
        query: &str,
        input: R,
        output: &mut W,
    ) -> CsvselResult<ExecutionSummary> {
        let query = self.parse(query)?;
        self.run(&query, input, output)
    }

    /// Two passes when the query has ORDER BY, one otherwise
    pub fn run<R: Read + Seek, W: Write>(
        &self,
        query: &Query,
        input: R,
        output: &mut W,
    ) -> CsvselResult<ExecutionSummary> {
        match &query.order {
            Some(order) => engine::execute_ordered(query, order, input, output, &self.config),
            None => engine::execute_streaming(query, input, output, &self.config),
        }
    }

    /// For inputs that cannot seek; fails on queries with ORDER BY
    pub fn run_streaming<R: Read, W: Write>(
        &self,
        query: &Query,
        input: R,
        output: &mut W,
    ) -> CsvselResult<ExecutionSummary> {
        if query.order.is_some() {
            return Err(CsvselError::UnseekableInput);
        }
        engine::execute_streaming(query, input, output, &self.config)
    }
}
