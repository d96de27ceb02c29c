use crate::parser::SearchQuery;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Terms with this prefix match tags exactly instead of searching text.
pub const TAG_PREFIX: &str = "tag:";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Bookmark {
	pub title: String,
	pub url: String,
	pub note: String,
	pub tags: Vec<String>,
}

impl Bookmark {
	/// Case-insensitive substring search over the title, url, note and tags.
	pub fn contains(&self, needle: &str) -> bool {
		let needle = needle.to_lowercase();
		self.title.to_lowercase().contains(&needle)
			|| self.url.to_lowercase().contains(&needle)
			|| self.note.to_lowercase().contains(&needle)
			|| self.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
	}

	pub fn matches(&self, needle: &str) -> bool {
		match needle.strip_prefix(TAG_PREFIX) {
			Some(tag) => self.tags.iter().any(|t| t == tag),
			None => self.contains(needle),
		}
	}
}

pub fn search<'b>(query: &SearchQuery, bookmarks: &'b [Bookmark]) -> Vec<&'b Bookmark> {
	let found: Vec<&Bookmark> = bookmarks
		.iter()
		.filter(|mark| query.evaluate(|needle| mark.matches(needle)))
		.collect();
	log::debug!(
		"{:?} matched {} of {} bookmarks",
		query.query(),
		found.len(),
		bookmarks.len()
	);
	found
}

pub fn split_tags(tags: &str) -> Vec<String> {
	tags.split(' ')
		.filter(|tag| !tag.is_empty())
		.map(str::to_string)
		.collect()
}

pub fn read_bookmarks(input: impl Read) -> Result<Vec<Bookmark>, anyhow::Error> {
	let bookmarks: Vec<Bookmark> = rmp_serde::from_read(input)?;
	log::debug!("read {} bookmarks", bookmarks.len());
	Ok(bookmarks)
}

pub fn write_bookmarks(bookmarks: &[Bookmark], mut output: impl Write) -> Result<(), anyhow::Error> {
	bookmarks.serialize(&mut rmp_serde::Serializer::new(&mut output))?;
	output.flush()?;
	Ok(())
}
