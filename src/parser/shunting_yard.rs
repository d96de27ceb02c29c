use super::data::*;

/// Reorders an infix token stream into postfix order.
///
/// The bottom of the operator stack acts as a pseudo-operator with
/// precedence 0, so it is never popped by an incoming operator.
pub fn to_rpn<'a>(tokens: Vec<Token<'a>>, query: &'a str) -> Result<'a, Vec<Token<'a>>> {
	let mut output = Vec::with_capacity(tokens.len());
	let mut stack: Vec<Token> = Vec::new();

	for token in tokens {
		match token {
			Token::Operand { .. } => output.push(token),
			Token::Operator { kind, .. } => {
				while let Some(&top) = stack.last() {
					match top {
						Token::Operator { kind: top_kind, .. } if yields_to(kind, top_kind) => {
							output.push(top);
							stack.pop();
						}
						_ => break,
					}
				}
				stack.push(token);
			}
			Token::OpenParen { .. } => stack.push(token),
			Token::CloseParen { .. } => loop {
				match stack.pop() {
					Some(Token::OpenParen { .. }) => break,
					Some(top) => output.push(top),
					None => {
						return Err(ParseError::at(
							ParseErrorKind::UnmatchedCloseParen,
							&token,
							query,
						))
					}
				}
			},
		}
	}

	while let Some(token) = stack.pop() {
		if let Token::OpenParen { .. } = token {
			return Err(ParseError::at(
				ParseErrorKind::UnmatchedOpenParen,
				&token,
				query,
			));
		}
		output.push(token);
	}

	log::trace!("rpn for {:?}: {:?}", query, output);
	Ok(output)
}

/// Whether `incoming` has to wait until the operator on top of the stack
/// has been emitted.
fn yields_to(incoming: OperatorKind, top: OperatorKind) -> bool {
	match incoming.associativity() {
		Associativity::Left => incoming.precedence() <= top.precedence(),
		Associativity::Right => incoming.precedence() < top.precedence(),
	}
}
