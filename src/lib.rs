pub mod bookmark;
pub mod parser;

pub use bookmark::{search, Bookmark};
pub use parser::{parse, ParseError, SearchQuery};

#[cfg(test)]
mod tests;
