//! CLI command definitions

use clap::{Parser, ValueEnum};

/// Output format for the exit summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON snapshot of the assessment
    Json,
}

/// CLI arguments for aiq-screener
#[derive(Parser, Debug)]
#[command(name = "aiq-screener")]
#[command(author, version, about = "Interactive terminal form for AIQ candidate screening")]
#[command(long_about = r#"
aiq-screener renders the AI Quotient (AIQ) assessment form in the terminal.

A screener walks through 6 fixed interview questions, marks each as
relevant or non-relevant, and records free-text notes. The AIQ level
(High / Medium / Low) updates live from the relevant count.

Keys:
  j/k or arrows   move between questions and the notes field
  r / n           toggle Relevant / Non-Relevant on the highlighted question
  i or Enter      edit notes (Esc to leave)
  ?               help overlay
  q               quit (prints the summary)

Nothing is persisted; the summary printed on exit is the only output.
"#)]
pub struct Cli {
    /// Output format for the exit summary
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Skip printing the summary on exit
    #[arg(long)]
    pub no_summary: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["aiq-screener"]);
        assert_eq!(cli.output, OutputFormat::Text);
        assert!(!cli.no_summary);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_json_output_and_verbosity() {
        let cli = Cli::parse_from(["aiq-screener", "-o", "json", "-vv"]);
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_no_summary_flag() {
        let cli = Cli::parse_from(["aiq-screener", "--no-summary"]);
        assert!(cli.no_summary);
    }
}
