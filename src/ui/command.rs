//! Command-line interface of the `tickwriter` binary.

use clap::Parser;
use std::path::PathBuf;

const KEYS: &str = "Keys: Esc or Ctrl-C quits, any other key continues after a wait.";

/// Play a markup script in the terminal, one character at a time.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "tickwriter", version, about, after_help = KEYS, max_term_width(100))]
pub struct Cli {
    /// Markup script to play.
    #[arg(required_unless_present = "tags")]
    pub script: Option<PathBuf>,

    /// RON writer configuration.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Characters per second; 0 reveals instantly.
    #[arg(long, value_name = "N")]
    pub speed: Option<f32>,

    /// Extra seconds after punctuation.
    #[arg(long, value_name = "S")]
    pub pause: Option<f32>,

    /// Reveal whole words at a time.
    #[arg(long = "words")]
    pub whole_words: bool,

    /// Show markup verbatim instead of styling it.
    #[arg(long)]
    pub plain: bool,

    /// Frames per second.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: Option<u32>,

    /// Register an audio source the script can name (repeatable).
    #[arg(long = "sound", value_name = "NAME")]
    pub sounds: Vec<String>,

    /// Ring the terminal bell when a sound starts.
    #[arg(long)]
    pub bell: bool,

    /// List the markup tags and exit.
    #[arg(long)]
    pub tags: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("tickwriter").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_script_only() {
        let cli = parse(&["story.txt"]).unwrap();
        assert_eq!(cli.script, Some(PathBuf::from("story.txt")));
        assert_eq!(cli.speed, None);
        assert!(!cli.plain);
        assert!(!cli.tags);
    }

    #[test]
    fn test_parse_all_options() {
        let cli = parse(&[
            "--speed", "30", "--pause", "0.5", "--words", "--plain", "--fps", "24", "--config",
            "w.ron", "--sound", "door", "--sound", "wind", "--bell", "story.txt",
        ])
        .unwrap();
        assert_eq!(cli.speed, Some(30.0));
        assert_eq!(cli.pause, Some(0.5));
        assert!(cli.whole_words);
        assert!(cli.plain);
        assert!(cli.bell);
        assert_eq!(cli.fps, Some(24));
        assert_eq!(cli.config, Some(PathBuf::from("w.ron")));
        assert_eq!(cli.sounds, vec!["door", "wind"]);
    }

    #[test]
    fn test_tags_needs_no_script() {
        let cli = parse(&["--tags"]).unwrap();
        assert!(cli.tags);
        assert_eq!(cli.script, None);
    }

    #[test]
    fn test_parse_errors() {
        let kind = |args: &[&str]| parse(args).unwrap_err().kind();
        assert_eq!(kind(&[]), ErrorKind::MissingRequiredArgument);
        assert_eq!(kind(&["a", "--speed"]), ErrorKind::InvalidValue);
        assert_eq!(kind(&["a", "--speed", "fast"]), ErrorKind::ValueValidation);
        assert_eq!(kind(&["a", "--fps", "0"]), ErrorKind::ValueValidation);
        assert_eq!(kind(&["--loud"]), ErrorKind::UnknownArgument);
        assert_eq!(kind(&["a", "b"]), ErrorKind::UnknownArgument);
        assert_eq!(kind(&["--help"]), ErrorKind::DisplayHelp);
    }
}
