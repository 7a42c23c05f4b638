use std::path::PathBuf;
use std::process::Command;

use clap::{ArgAction, Args, Parser, Subcommand};
use log::info;

use namelab_core::error::Error;
use namelab_core::store::syllable_store::SyllableStore;
use namelab_core::synth::synthesizer::WordSynthesizer;
use namelab_core::synth::word_request::WordRequest;

/// Default arguments always passed to the speech command.
const SAY_DEFAULT_ARGS: [&str; 3] = ["-i", "-v", "Victoria"];

/// Path of the speech binary used by the `say` subcommand.
const SAY_COMMAND: &str = "/usr/bin/say";

#[derive(Parser)]
#[command(
	name = "namelab",
	about = "Pseudo-word generator sampling syllables from a corpus",
	version
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Generate pseudo-words and print them to stdout
	#[command(visible_aliases = ["generate", "g"])]
	Gen(GenArgs),

	/// Generate pseudo-words and speak them through the system voice
	#[command(visible_aliases = ["speak", "s"])]
	Say(SayArgs),
}

#[derive(Args)]
struct GenArgs {
	/// Sequence of lengths for each target word separated by space
	#[arg(default_values_t = [6usize])]
	lengths: Vec<usize>,

	/// Amount of generated samples
	#[arg(short, long, default_value_t = 1)]
	samples: usize,

	/// Normalize generated words, i.e. truncate to target length
	#[arg(short = 'N', long, default_value_t = true, action = ArgAction::Set)]
	normalize: bool,

	/// Path of the syllable corpus file (one syllable per line)
	#[arg(short, long, default_value = "./data/syllables.txt")]
	corpus: PathBuf,
}

#[derive(Args)]
struct SayArgs {
	#[command(flatten)]
	r#gen: GenArgs,

	/// Arguments for the say command (whitespace-separated)
	#[arg(long, default_value = "-i -v Victoria", allow_hyphen_values = true)]
	sayopt: String,
}

/// Destination of one composed output line.
enum Sink {
	Stdout,
	Say(Vec<String>),
}

impl Sink {
	/// Routes a composed line to the sink.
	///
	/// The speech sink passes the line verbatim as the final argument of
	/// the external command and treats a nonzero exit as an error.
	fn output(&self, result: &str) -> Result<(), Box<dyn std::error::Error>> {
		match self {
			Sink::Stdout => {
				println!("{}", result);
				Ok(())
			}
			Sink::Say(args) => {
				let status = Command::new(SAY_COMMAND).args(args).arg(result).status()?;
				if !status.success() {
					return Err(format!("{} exited with {}", SAY_COMMAND, status).into());
				}
				Ok(())
			}
		}
	}
}

/// Splits `sayopt` on whitespace and prepends the default voice
/// arguments when the user-supplied options differ from them.
fn build_say_args(sayopt: &str) -> Vec<String> {
	let mut args: Vec<String> = sayopt.split_whitespace().map(str::to_owned).collect();
	if args != SAY_DEFAULT_ARGS {
		let mut full: Vec<String> = SAY_DEFAULT_ARGS.iter().map(|arg| (*arg).to_owned()).collect();
		full.append(&mut args);
		return full;
	}
	args
}

/// Builds the store once, then emits `samples` lines of one word per
/// requested length, space-joined.
///
/// An empty composed line is fatal and never reaches the sink.
fn run(args: &GenArgs, sink: &Sink) -> Result<(), Box<dyn std::error::Error>> {
	let store = SyllableStore::open(&args.corpus)?;
	info!(
		"Corpus loaded: {} syllables, record width {}",
		store.record_count(),
		store.record_width()
	);

	let synthesizer = WordSynthesizer::new(store);
	let requests = args
		.lengths
		.iter()
		.map(|&length| WordRequest::new(length).map(|request| request.with_normalize(args.normalize)))
		.collect::<Result<Vec<_>, _>>()?;

	for _ in 0..args.samples {
		let mut words = Vec::with_capacity(requests.len());
		for request in &requests {
			words.push(synthesizer.generate(request)?);
		}
		let result = words.join(" ");
		if result.is_empty() {
			return Err(Error::EmptyResult.into());
		}
		sink.output(&result)?;
	}

	Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();

	match Cli::parse().command {
		Commands::Gen(args) => run(&args, &Sink::Stdout),
		Commands::Say(args) => {
			let say_args = build_say_args(&args.sayopt);
			run(&args.r#gen, &Sink::Say(say_args))
		}
	}
}
