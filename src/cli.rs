//! Command-line interface definition for pwfilter
//!
//! Provides argument parsing for the password wordlist filtering tool.

use clap::Parser;
use std::path::PathBuf;

/// Password wordlist filter for penetration testing
///
/// Filter candidate passwords by composable policy presets, a custom regex,
/// and dictionary membership.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pwfilter",
    author = "m0h1nd4",
    version,
    about = "Filter a password wordlist by combined presets or a custom regex",
    long_about = r#"
Filter a password wordlist by named policy presets and/or a custom regex.
A line is kept only if it satisfies ALL selected criteria; --invert keeps
the lines that do not (like grep -v). Blank lines are always dropped.

EXAMPLES:
    # Keep strong passwords (min 8 chars, all character types)
    pwfilter rockyou.txt --presets s8all -o strong.txt

    # Combine presets: at least 12 chars, with uppercase and digit
    pwfilter rockyou.txt --presets ml12 upper digit

    # Drop everything that appears in a known-breached dictionary
    pwfilter rockyou.txt --presets dict --dictionary-file breached.txt --invert

    # Custom regex, case-insensitive, reading stdin
    cat rockyou.txt | pwfilter - --regex '^[a-z]{4}[0-9]{4}$' -i

    # Show every preset
    pwfilter --list-presets
"#,
    after_help = "For more information, visit: https://github.com/m0h1nd4/pwfilter"
)]
pub struct Args {
    /// Path to the wordlist file ('-' for stdin)
    #[arg(value_name = "WORDLIST", required_unless_present = "list_presets")]
    pub wordlist: Option<PathBuf>,

    /// One or more preset IDs or names; lines must match ALL of them
    #[arg(long, num_args = 1.., value_name = "PRESET_ID_OR_NAME")]
    pub presets: Vec<String>,

    /// Custom regex pattern lines must match (combined with presets via AND)
    #[arg(long, value_name = "PATTERN")]
    pub regex: Option<String>,

    /// Dictionary file for the 'in_dictionary' (dict) preset
    #[arg(long, value_name = "PATH")]
    pub dictionary_file: Option<PathBuf>,

    /// Case-insensitive matching for regexes and dictionary checks
    #[arg(short = 'i', long)]
    pub case_insensitive: bool,

    /// Invert the sense of matching, selecting non-matching lines
    #[arg(short = 'v', long)]
    pub invert: bool,

    /// Output file for matched passwords (default: stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// List all available presets and exit
    #[arg(long)]
    pub list_presets: bool,

    /// Quiet mode - suppress the summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(long)]
    pub verbose: bool,
}

impl Args {
    /// True when the wordlist argument requests standard input
    pub fn reads_stdin(&self) -> bool {
        self.wordlist
            .as_deref()
            .is_some_and(|p| p.as_os_str() == "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_presets_and_flags() {
        let args = Args::parse_from([
            "pwfilter",
            "rockyou.txt",
            "--presets",
            "ml8",
            "upper",
            "-i",
            "-v",
        ]);
        assert_eq!(args.wordlist, Some(PathBuf::from("rockyou.txt")));
        assert_eq!(args.presets, vec!["ml8", "upper"]);
        assert!(args.case_insensitive);
        assert!(args.invert);
        assert!(!args.reads_stdin());
    }

    #[test]
    fn test_parse_regex_and_output() {
        let args = Args::parse_from(["pwfilter", "-", "--regex", "^[0-9]+$", "-o", "out.txt"]);
        assert!(args.reads_stdin());
        assert_eq!(args.regex.as_deref(), Some("^[0-9]+$"));
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_list_presets_needs_no_wordlist() {
        let args = Args::parse_from(["pwfilter", "--list-presets"]);
        assert!(args.list_presets);
        assert!(args.wordlist.is_none());
    }

    #[test]
    fn test_wordlist_required_otherwise() {
        assert!(Args::try_parse_from(["pwfilter", "--presets", "ml8"]).is_err());
    }
}
