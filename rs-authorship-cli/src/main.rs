use std::path::PathBuf;

use clap::Parser;
use rs_authorship_core::{FolderCorpus, VerificationInput, verify};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Decides which of two authors wrote each of their held-out texts.
///
/// Each author is read from `<data>/<name>.dat`, one text per line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
	/// First author (its score is the one length-normalized)
	#[arg(required_unless_present = "list")]
	first: Option<String>,

	/// Second author
	#[arg(required_unless_present = "list")]
	second: Option<String>,

	/// Folder holding the `.dat` corpus files
	#[arg(short, long, default_value = "./data")]
	data: PathBuf,

	/// Seed for the split and the paired sample; random when omitted
	#[arg(short, long)]
	seed: Option<u64>,

	/// Share of each author's texts used to build its model
	#[arg(short = 'r', long, default_value_t = 0.9)]
	known_ratio: f64,

	/// Print the report as JSON instead of text
	#[arg(long, default_value_t = false)]
	json: bool,

	/// List the authors available in the data folder and exit
	#[arg(long, default_value_t = false)]
	list: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Logs go to stderr, the report to stdout
	tracing_subscriber::registry()
		.with(fmt::layer().with_writer(std::io::stderr))
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let cli = Cli::parse();
	debug!(data = %cli.data.display(), "opening corpus folder");
	let corpus = FolderCorpus::new(&cli.data)?;

	if cli.list {
		for author in corpus.list_authors()? {
			println!("{author}");
		}
		return Ok(());
	}

	let (Some(first), Some(second)) = (cli.first.as_deref(), cli.second.as_deref()) else {
		return Err("two author names are required".into());
	};

	let mut input = VerificationInput::with_seed(cli.seed);
	input.set_known_ratio(cli.known_ratio)?;

	let report = verify(&corpus, first, second, &input)?;
	info!(
		questioned = report.total_questioned,
		correct = report.correct,
		accuracy = report.accuracy,
		"verification finished"
	);
	if cli.json {
		println!("{}", serde_json::to_string_pretty(&report)?);
	} else {
		println!("{report}");
	}

	Ok(())
}
