pub mod condition;
pub mod eval;
pub mod execute;
pub mod functions;
pub mod order_by;
pub mod project;

pub use execute::{ExecutionSummary, execute_streaming};
pub use order_by::execute_ordered;
