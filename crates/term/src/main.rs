//! `mention` command-line driver.

mod cli;
mod replay;
#[cfg(test)]
mod tests;

use clap::Parser;
use cli::{Cli, Command};
use mention_config::AutocompleteOptions;
use mention_matcher::find_match;
use mention_primitives::text::char_len;
use replay::Script;
use tracing::info;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let options = match &cli.config {
		Some(path) => {
			info!(path = %path.display(), "loading options");
			AutocompleteOptions::load(path)?
		}
		None => AutocompleteOptions::default(),
	};

	match cli.command {
		Command::Match {
			text,
			caret,
			trigger,
			any,
			candidates,
		} => {
			let query = Query {
				text,
				caret,
				trigger,
				any,
				candidates,
			};
			println!("{}", probe(&options, &query)?);
		}
		Command::Replay { script } => {
			let script = Script::load(&script)?;
			let config = script.compile(&options)?;
			for line in replay::run(&script, config)? {
				println!("{line}");
			}
		}
	}
	Ok(())
}

/// Arguments of `mention match`.
struct Query {
	text: String,
	caret: Option<usize>,
	trigger: Option<String>,
	any: bool,
	candidates: Vec<String>,
}

/// Runs the matcher once and renders the result as JSON.
fn probe(options: &AutocompleteOptions, query: &Query) -> anyhow::Result<String> {
	let mut options = options.clone();
	if let Some(trigger) = &query.trigger {
		options.trigger.clone_from(trigger);
	}
	options.match_any |= query.any;
	let config = options.compile()?;

	let caret = query.caret.unwrap_or_else(|| char_len(&query.text));
	let found = find_match(&query.text, caret, &query.candidates, &config.trigger);
	Ok(serde_json::to_string(&found)?)
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("mention=debug,mention_editor=trace,mention_matcher=trace,info")
		} else {
			EnvFilter::new("warn")
		}
	});
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}
