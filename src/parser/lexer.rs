use super::data::*;

/// Characters that end a bare word.
const DELIMITERS: &str = "!&|\"'()";

pub fn tokenize(query: &str) -> Vec<Token> {
	let tokens: Vec<Token> = Tokenizer::from(query).collect();
	log::trace!("tokenized {:?} into {:?}", query, tokens);
	tokens
}

pub struct Tokenizer<'a> {
	tail: &'a str,
	position: usize,
}

impl<'a> From<&'a str> for Tokenizer<'a> {
	fn from(input: &'a str) -> Self {
		Self {
			tail: input,
			position: 0,
		}
	}
}

impl<'a> Iterator for Tokenizer<'a> {
	type Item = Token<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			self.skip_whitespace();
			let c = self.tail.chars().next()?;
			let position = self.position;
			if let Some(token) = self.next_symbol(c, position) {
				return Some(token);
			}
			if c == '"' || c == '\'' {
				match self.next_quoted(c) {
					Some(value) => return Some(Token::Operand { value, position }),
					None => {
						log::warn!("ignoring unterminated quote at {}", position);
						continue;
					}
				}
			}
			let value = self.next_word();
			return Some(Token::Operand { value, position });
		}
	}
}

impl<'a> Tokenizer<'a> {
	fn skip_whitespace(&mut self) {
		self.advance_bytes(self.try_chars(|c| c.is_whitespace()));
	}

	fn next_symbol(&mut self, c: char, position: usize) -> Option<Token<'a>> {
		let token = match c {
			'!' => Token::Operator {
				kind: OperatorKind::Not,
				position,
			},
			'&' => Token::Operator {
				kind: OperatorKind::And,
				position,
			},
			'|' => Token::Operator {
				kind: OperatorKind::Or,
				position,
			},
			'(' => Token::OpenParen { position },
			')' => Token::CloseParen { position },
			_ => return None,
		};
		self.advance_bytes(1);
		Some(token)
	}

	/// Consumes a phrase enclosed in `quote`. An opening quote without a
	/// closing one is consumed alone and `None` is returned.
	fn next_quoted(&mut self, quote: char) -> Option<&'a str> {
		let phrase = self.tail[1..].find(quote);
		self.advance_bytes(1);
		let phrase = phrase?;
		let result = self.advance_bytes(phrase);
		self.advance_bytes(1);
		Some(result)
	}

	fn next_word(&mut self) -> &'a str {
		self.advance_bytes(self.try_chars(|&c| !c.is_whitespace() && !DELIMITERS.contains(c)))
	}

	fn try_chars(&self, f: impl FnMut(&char) -> bool) -> usize {
		self.tail.chars().take_while(f).map(char::len_utf8).sum()
	}

	fn advance_bytes(&mut self, count: usize) -> &'a str {
		let (word, tail) = self.tail.split_at(count);
		self.position += count;
		self.tail = tail;
		word
	}
}
