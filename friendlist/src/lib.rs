pub use executor::{Executor, Outcome};
pub use generator::Generator;
pub use output::Output;
pub use parser::Parser;
pub use source::Source;

pub mod executor;
pub mod generator;
pub mod model;
pub mod output;
pub mod parser;
pub mod query;
pub mod source;
pub mod view;

#[cfg(test)]
mod test_util;
