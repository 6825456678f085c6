use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mention")]
#[command(about = "Probe and replay inline mention completion")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Options file (TOML); defaults apply when omitted
	#[arg(long, short = 'c', global = true, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Verbose logging to stderr
	#[arg(long, short = 'v', global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Print the match at the caret as JSON (`null` when there is none)
	Match {
		/// Text to scan
		text: String,

		/// Caret position in chars (end of text if omitted)
		#[arg(long)]
		caret: Option<usize>,

		/// Override the configured trigger ("" for none)
		#[arg(long, short = 't')]
		trigger: Option<String>,

		/// Match candidates by substring instead of prefix
		#[arg(long)]
		any: bool,

		/// Candidate pool entry (repeatable)
		#[arg(long = "candidate", value_name = "NAME")]
		candidates: Vec<String>,
	},
	/// Drive a field through a scripted session and print its state after each step
	Replay {
		/// Script file (TOML)
		script: PathBuf,
	},
}

#[cfg(test)]
mod tests;
