use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "parklot", bin_name = "parklot", version)]
#[command(about = "Line-oriented parking lot command interpreter", long_about = None)]
pub struct Cli {
    /// Read commands from FILE instead of standard input
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, env = "PARKLOT_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Never print the command menu or prompt
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_file_and_flags() {
        let cli = Cli::try_parse_from(["parklot", "-q", "--no-color", "input.txt"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("input.txt")));
        assert!(cli.quiet);
        assert!(cli.no_color);
        assert!(!cli.verbose);
    }

    #[test]
    fn defaults_to_stdin() {
        let cli = Cli::try_parse_from(["parklot"]).unwrap();
        assert!(cli.file.is_none());
    }
}
