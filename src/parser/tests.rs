use super::*;
use crate::tests;
use rand::{seq::SliceRandom, Rng};

fn matcher<'t>(truthy: &'t [&'t str]) -> impl FnMut(&str) -> bool + 't {
	move |value| truthy.iter().any(|t| *t == value)
}

fn without_positions<'a>(query: &SearchQuery<'a>) -> Vec<Token<'a>> {
	query
		.rpn()
		.iter()
		.map(|token| match *token {
			Token::Operand { value, .. } => Token::Operand { value, position: 0 },
			Token::Operator { kind, .. } => Token::Operator { kind, position: 0 },
			Token::OpenParen { .. } => Token::OpenParen { position: 0 },
			Token::CloseParen { .. } => Token::CloseParen { position: 0 },
		})
		.collect()
}

fn error_kind(query: &str) -> Option<ParseErrorKind> {
	parse(query).err().map(|err| err.kind)
}

#[test]
fn precedence() {
	let query = parse("a|b&c").unwrap();
	assert!(query.evaluate(matcher(&["a", "c"])));
	assert!(!query.evaluate(matcher(&["c"])));
	assert_eq!(without_positions(&query), without_positions(&parse("a|(b&c)").unwrap()));
}

#[test]
fn not_binds_tightest() {
	let query = parse("!a&b").unwrap();
	assert_eq!(without_positions(&query), without_positions(&parse("(!a)&b").unwrap()));
	assert!(query.evaluate(matcher(&["b"])));
	assert!(!query.evaluate(matcher(&["a", "b"])));
	assert!(!query.evaluate(matcher(&[])));
}

#[test]
fn implicit_and() {
	let implicit = parse("cat dog").unwrap();
	let explicit = parse("cat & dog").unwrap();
	assert_eq!(without_positions(&implicit), without_positions(&explicit));
	for truthy in [&["cat", "dog"][..], &["cat"], &["dog"], &[]] {
		assert_eq!(
			implicit.evaluate(matcher(truthy)),
			explicit.evaluate(matcher(truthy))
		);
	}
	assert!(implicit.evaluate(matcher(&["cat", "dog"])));
	assert!(!implicit.evaluate(matcher(&["cat"])));
}

#[test]
fn parentheses() {
	let query = parse("(cat|dog)&!fish").unwrap();
	assert!(query.evaluate(matcher(&["cat"])));
	assert!(!query.evaluate(matcher(&["cat", "fish"])));
	assert!(query.evaluate(matcher(&["dog"])));
	assert!(!query.evaluate(matcher(&[])));
}

#[test]
fn quoted_phrase_is_one_term() {
	let query = parse("\"hello world\"").unwrap();
	assert_eq!(
		query.rpn(),
		[Token::Operand {
			value: "hello world",
			position: 0,
		}]
	);
	assert!(query.evaluate(matcher(&["hello world"])));
	assert!(!query.evaluate(matcher(&["hello", "world"])));
}

#[test]
fn unterminated_quote_is_ignored() {
	let query = parse("cat \"dog").unwrap();
	assert_eq!(without_positions(&query), without_positions(&parse("cat dog").unwrap()));
}

#[test]
fn errors() {
	let cases = [
		("(cat", Some(ParseErrorKind::UnmatchedOpenParen)),
		("cat)", Some(ParseErrorKind::UnmatchedCloseParen)),
		("", Some(ParseErrorKind::UnknownSyntaxError)),
		(" \t ", Some(ParseErrorKind::UnknownSyntaxError)),
		("()", Some(ParseErrorKind::UnknownSyntaxError)),
		("cat !dog", Some(ParseErrorKind::UnknownSyntaxError)),
		("&cat", Some(ParseErrorKind::SyntaxErrorAtToken)),
		("cat |", Some(ParseErrorKind::SyntaxErrorAtToken)),
		("!", Some(ParseErrorKind::SyntaxErrorAtToken)),
		("cat & !dog", None),
		("cat (!dog)", None),
		("\"", Some(ParseErrorKind::UnknownSyntaxError)),
	];
	for (query, expected) in cases {
		assert_eq!(error_kind(query), expected, "query: {:?}", query);
	}
}

#[test]
fn error_diagnostic() {
	let err = parse("cat | (dog").unwrap_err();
	assert_eq!(err.position, Some(6));
	assert_eq!(err.query, "cat | (dog");
	assert_eq!(err.to_string(), "Unmatched open paren:\ncat | (dog\n      \u{2191}");

	let err = parse("cat |").unwrap_err();
	assert_eq!(err.to_string(), "Syntax error around token:\ncat |\n    \u{2191}");
}

#[test]
fn idempotent() {
	let query = "cat !(dog | 'light green') | fish";
	assert_eq!(parse(query), parse(query));
}

#[test]
fn whitespace_does_not_matter() {
	tests::init_logger();
	let parts = ["(", "cat", "|", "dog", ")", "&", "!", "fish", "\"light  green\"", "bird"];
	let reference = parse_owned(&parts.join(" "));
	let mut rng = rand::thread_rng();
	for _ in 0..100 {
		let mut query = String::new();
		for part in parts {
			for _ in 0..rng.gen_range(1..4) {
				query.push(*[' ', '\t', '\n', '\u{a0}'].choose(&mut rng).unwrap());
			}
			query.push_str(part);
		}
		assert_eq!(parse_owned(&query), reference, "query: {:?}", query);
	}
}

fn parse_owned(query: &str) -> Vec<String> {
	let query = parse(query).unwrap();
	without_positions(&query)
		.into_iter()
		.map(|token| format!("{:?}", token))
		.collect()
}

#[test]
fn shared_between_threads() {
	let query = parse("(cat|dog) & !fish").unwrap();
	let records: [&[&str]; 4] = [&["cat"], &["dog", "fish"], &["fish"], &["dog"]];
	let results: Vec<bool> = std::thread::scope(|scope| {
		let handles: Vec<_> = records
			.iter()
			.map(|record| {
				let query = &query;
				scope.spawn(move || query.evaluate(matcher(record)))
			})
			.collect();
		handles.into_iter().map(|handle| handle.join().unwrap()).collect()
	});
	assert_eq!(results, [true, false, false, true]);
}
