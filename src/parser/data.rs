use std::fmt;

pub type Result<'a, T> = std::result::Result<T, ParseError<'a>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
	UnmatchedCloseParen,
	UnmatchedOpenParen,
	SyntaxErrorAtToken,
	UnknownSyntaxError,
}

impl ParseErrorKind {
	pub fn message(self) -> &'static str {
		match self {
			ParseErrorKind::UnmatchedCloseParen => "Unmatched close paren",
			ParseErrorKind::UnmatchedOpenParen => "Unmatched open paren",
			ParseErrorKind::SyntaxErrorAtToken => "Syntax error around token",
			ParseErrorKind::UnknownSyntaxError => "Unknown syntax error",
		}
	}
}

/// A query that cannot be turned into a valid program.
///
/// `position` is a byte offset into `query`; it is `None` when the parser
/// could not pin the problem to a single token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError<'a> {
	pub kind: ParseErrorKind,
	pub position: Option<usize>,
	pub query: &'a str,
}

impl<'a> ParseError<'a> {
	pub fn at(kind: ParseErrorKind, token: &Token, query: &'a str) -> Self {
		Self {
			kind,
			position: Some(token.position()),
			query,
		}
	}

	pub fn unknown(query: &'a str) -> Self {
		Self {
			kind: ParseErrorKind::UnknownSyntaxError,
			position: None,
			query,
		}
	}
}

impl fmt::Display for ParseError<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let position = match self.position {
			Some(position) => position,
			None => return f.write_str(self.kind.message()),
		};
		// the caret is aligned in characters, not bytes
		let indent = self
			.query
			.get(..position)
			.map_or(position, |head| head.chars().count());
		write!(
			f,
			"{}:\n{}\n{}\u{2191}",
			self.kind.message(),
			self.query,
			" ".repeat(indent)
		)
	}
}

impl std::error::Error for ParseError<'_> {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
	Operand { value: &'a str, position: usize },
	Operator { kind: OperatorKind, position: usize },
	OpenParen { position: usize },
	CloseParen { position: usize },
}

impl<'a> Token<'a> {
	pub fn position(&self) -> usize {
		match *self {
			Token::Operand { position, .. }
			| Token::Operator { position, .. }
			| Token::OpenParen { position }
			| Token::CloseParen { position } => position,
		}
	}

	/// Number of values the token pops when the program runs.
	/// Every token that can appear in a program pushes exactly one.
	pub fn valence(&self) -> usize {
		match self {
			Token::Operator { kind, .. } => kind.valence(),
			_ => 0,
		}
	}

	pub fn is_operator(&self) -> bool {
		matches!(self, Token::Operator { .. })
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
	Left,
	Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperatorKind {
	Not,
	And,
	Or,
}

impl OperatorKind {
	pub fn valence(self) -> usize {
		match self {
			OperatorKind::Not => 1,
			OperatorKind::And | OperatorKind::Or => 2,
		}
	}

	pub fn precedence(self) -> u8 {
		match self {
			OperatorKind::Not => 3,
			OperatorKind::And => 2,
			OperatorKind::Or => 1,
		}
	}

	pub fn associativity(self) -> Associativity {
		match self {
			OperatorKind::Not => Associativity::Right,
			OperatorKind::And | OperatorKind::Or => Associativity::Left,
		}
	}
}
