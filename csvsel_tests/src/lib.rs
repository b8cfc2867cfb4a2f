#[cfg(test)]
mod eval_test;
#[cfg(test)]
mod reader_test;
