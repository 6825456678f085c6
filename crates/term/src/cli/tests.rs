use clap::Parser;

use super::*;

#[test]
fn match_takes_repeated_candidates() {
	let cli = Cli::try_parse_from([
		"mention",
		"match",
		"Hello @jo",
		"--caret",
		"9",
		"--candidate",
		"john",
		"--candidate",
		"joanna",
	])
	.unwrap();
	match cli.command {
		Command::Match {
			text,
			caret,
			trigger,
			any,
			candidates,
		} => {
			assert_eq!(text, "Hello @jo");
			assert_eq!(caret, Some(9));
			assert_eq!(trigger, None);
			assert!(!any);
			assert_eq!(candidates, vec!["john", "joanna"]);
		}
		other => panic!("unexpected command: {other:?}"),
	}
}

#[test]
fn empty_trigger_is_accepted() {
	let cli = Cli::try_parse_from(["mention", "match", "--trigger", "", "--any", "foobar"]).unwrap();
	let Command::Match { trigger, any, .. } = cli.command else {
		panic!("expected match");
	};
	assert_eq!(trigger.as_deref(), Some(""));
	assert!(any);
}

#[test]
fn global_flags_follow_subcommand() {
	let cli = Cli::try_parse_from(["mention", "replay", "s.toml", "-v", "--config", "opts.toml"]).unwrap();
	assert!(cli.verbose);
	assert_eq!(cli.config, Some(PathBuf::from("opts.toml")));
	assert!(matches!(cli.command, Command::Replay { script } if script == PathBuf::from("s.toml")));
}

#[test]
fn subcommand_is_required() {
	assert!(Cli::try_parse_from(["mention"]).is_err());
}
