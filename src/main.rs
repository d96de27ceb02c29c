use clap::{Parser, Subcommand};
use marksearch::bookmark::{read_bookmarks, split_tags, write_bookmarks};
use marksearch::{search, Bookmark, SearchQuery};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(about = "Search a bookmark collection with boolean queries")]
struct Args {
	/// Bookmark collection file
	#[arg(long, env = "MARKSEARCH_DB", default_value = "bookmarks.mp")]
	db: PathBuf,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print bookmarks matching a query like `rust (book|guide) & !tag:old`
	Search {
		/// Query words, joined with spaces. An empty query lists everything.
		query: Vec<String>,
	},
	/// Append a bookmark to the collection
	Add {
		#[arg(long)]
		title: String,
		#[arg(long)]
		url: String,
		#[arg(long, default_value = "")]
		note: String,
		/// Space separated tags
		#[arg(long, default_value = "")]
		tags: String,
	},
}

fn main() -> Result<(), anyhow::Error> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let args = Args::parse();
	match args.command {
		Command::Search { query } => run_search(&args.db, &query.join(" ")),
		Command::Add {
			title,
			url,
			note,
			tags,
		} => {
			let mark = Bookmark {
				title,
				url,
				note,
				tags: split_tags(&tags),
			};
			run_add(&args.db, mark)
		}
	}
}

fn run_search(db: &Path, query: &str) -> Result<(), anyhow::Error> {
	let bookmarks = load(db)?;
	let query = query.trim();
	let found: Vec<&Bookmark> = if query.is_empty() {
		bookmarks.iter().collect()
	} else {
		let parsed = SearchQuery::parse(query).map_err(|err| anyhow::anyhow!("{}", err))?;
		search(&parsed, &bookmarks)
	};
	for mark in found {
		println!("{}\t{}\t{}", mark.title, mark.url, mark.tags.join(" "));
	}
	Ok(())
}

fn run_add(db: &Path, mark: Bookmark) -> Result<(), anyhow::Error> {
	let mut bookmarks = load(db)?;
	log::info!("adding {:?} to {}", mark.url, db.display());
	bookmarks.push(mark);
	write_bookmarks(&bookmarks, BufWriter::new(File::create(db)?))
}

fn load(db: &Path) -> Result<Vec<Bookmark>, anyhow::Error> {
	if !db.exists() {
		log::info!("{} does not exist, starting empty", db.display());
		return Ok(Vec::new());
	}
	read_bookmarks(BufReader::new(File::open(db)?))
}
