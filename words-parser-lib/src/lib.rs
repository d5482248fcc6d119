pub mod types;
pub mod errors;
pub mod tables;
pub mod enclitic;
pub mod inflection;
pub mod matcher;
pub mod aggregate;
pub mod endings;
pub mod reduce;
pub mod parser;
pub mod output;

pub use errors::{Result, WordsError};
pub use parser::{parse_word, parse_word_with};
pub use tables::Tables;
pub use types::{ParseOptions, ParseResult, ResolvedWord};
