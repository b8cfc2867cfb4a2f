pub mod query;
pub mod parser;
