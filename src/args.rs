use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Default skill directory, relative to the working directory
pub const DEFAULT_SOURCE: &str = "fogo";

/// Default output filename template (`$NAME` is the skill directory name)
pub const DEFAULT_OUTPUT: &str = "$NAME.skill";

/// Command-line arguments for the skill packager
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Skill directory to package
    pub source: PathBuf,

    /// Output archive path (may contain `$NAME`)
    pub output: String,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        Self::from_matches(command().get_matches())
    }

    fn from_matches(matches: clap::ArgMatches) -> Self {
        Self {
            verbose: matches.get_flag("verbose"),
            source: matches
                .get_one::<String>("source")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE)),
            output: matches
                .get_one::<String>("output")
                .cloned()
                .unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
        }
    }
}

fn command() -> Command {
    Command::new("skill-pack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Package a skill directory into a .skill archive")
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .value_name("DIR")
                .env("SKILL_PACK_SOURCE")
                .default_value(DEFAULT_SOURCE)
                .help("Skill directory to package (must contain SKILL.md)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .env("SKILL_PACK_OUTPUT")
                .default_value(DEFAULT_OUTPUT)
                .help("Output archive path; $NAME expands to the skill directory name"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable verbose output"),
        )
}
