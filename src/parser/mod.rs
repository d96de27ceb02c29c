//! Boolean search expressions.
//!
//! A query is a list of terms combined with `!` (not), `&` (and), `|` (or)
//! and parentheses. Terms are bare words or phrases in `"` or `'` quotes;
//! terms written next to each other are joined with an implicit and.

mod data;
mod implicit;
mod lexer;
mod rpn;
mod shunting_yard;

pub use data::{Associativity, OperatorKind, ParseError, ParseErrorKind, Result, Token};
pub use implicit::insert_and;
pub use lexer::{tokenize, Tokenizer};
pub use shunting_yard::to_rpn;

pub fn parse(query: &str) -> Result<SearchQuery> {
	SearchQuery::parse(query)
}

/// A parsed query, ready to be matched against any number of records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery<'a> {
	query: &'a str,
	rpn: Vec<Token<'a>>,
}

impl<'a> SearchQuery<'a> {
	pub fn parse(query: &'a str) -> Result<'a, Self> {
		let tokens = insert_and(tokenize(query));
		let rpn = to_rpn(tokens, query)?;
		rpn::validate(&rpn, query)?;
		log::debug!("parsed query {:?} into {} tokens", query, rpn.len());
		Ok(Self { query, rpn })
	}

	/// Matches the query against one record; `predicate` tells whether the
	/// record matches a single term.
	pub fn evaluate(&self, predicate: impl FnMut(&str) -> bool) -> bool {
		rpn::evaluate(&self.rpn, predicate)
	}

	pub fn query(&self) -> &'a str {
		self.query
	}

	pub fn rpn(&self) -> &[Token<'a>] {
		&self.rpn
	}
}

impl<'a> TryFrom<&'a str> for SearchQuery<'a> {
	type Error = ParseError<'a>;

	fn try_from(value: &'a str) -> std::result::Result<Self, Self::Error> {
		Self::parse(value)
	}
}

#[cfg(test)]
mod tests;
