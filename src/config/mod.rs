pub mod parser;
pub mod types;

pub use parser::{load, load_with};
pub use types::*;
