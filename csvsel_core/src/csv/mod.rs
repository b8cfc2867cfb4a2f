pub mod reader;
pub mod writer;

pub use reader::RowReader;
pub use writer::{write_field, write_record};
