use super::data::*;

/// Checks that running `rpn` never underflows the value stack and leaves
/// exactly one value on it.
pub fn validate<'a>(rpn: &[Token<'a>], query: &'a str) -> Result<'a, ()> {
	let mut depth: isize = 0;
	for token in rpn {
		depth += 1 - token.valence() as isize;
		if depth <= 0 {
			return Err(ParseError::at(
				ParseErrorKind::SyntaxErrorAtToken,
				token,
				query,
			));
		}
	}
	if depth != 1 {
		return Err(ParseError::unknown(query));
	}
	Ok(())
}

/// Runs a validated program. Every operand is passed to `predicate` in
/// postfix order, operators never short-circuit.
///
/// Panics if the program leaves anything but a single value, which
/// `validate` rules out.
pub fn evaluate(rpn: &[Token], mut predicate: impl FnMut(&str) -> bool) -> bool {
	let mut stack: Vec<bool> = Vec::with_capacity(rpn.len());
	for token in rpn {
		let value = match *token {
			Token::Operand { value, .. } => predicate(value),
			Token::Operator { kind, .. } => match kind {
				OperatorKind::Not => !pop(&mut stack),
				OperatorKind::And => {
					let rhs = pop(&mut stack);
					let lhs = pop(&mut stack);
					lhs && rhs
				}
				OperatorKind::Or => {
					let rhs = pop(&mut stack);
					let lhs = pop(&mut stack);
					lhs || rhs
				}
			},
			Token::OpenParen { .. } | Token::CloseParen { .. } => {
				panic!("parenthesis left in rpn program: {:?}", rpn)
			}
		};
		stack.push(value);
	}
	assert_eq!(stack.len(), 1, "evaluation stack gone wrong: {:?}", stack);
	stack[0]
}

fn pop(stack: &mut Vec<bool>) -> bool {
	match stack.pop() {
		Some(value) => value,
		None => panic!("evaluation stack underflow"),
	}
}
