use super::data::*;

/// Inserts an AND between neighbouring terms that have no operator between
/// them, so `cat dog` reads as `cat & dog` and `cat (dog|cow)` as
/// `cat & (dog|cow)`.
pub fn insert_and(tokens: Vec<Token>) -> Vec<Token> {
	let mut result = Vec::with_capacity(tokens.len() * 2);
	let mut iter = tokens.into_iter().peekable();
	while let Some(token) = iter.next() {
		result.push(token);
		let next = match iter.peek() {
			Some(next) => next,
			None => break,
		};
		if needs_and(&token, next) {
			result.push(Token::Operator {
				kind: OperatorKind::And,
				position: next.position(),
			});
		}
	}
	result
}

fn needs_and(this: &Token, next: &Token) -> bool {
	!this.is_operator()
		&& !next.is_operator()
		&& !matches!(this, Token::OpenParen { .. })
		&& !matches!(next, Token::CloseParen { .. })
}
