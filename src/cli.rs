//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    Run {
        /// Base URL override for the remote dataset
        base_url: Option<String>,
    },
    /// Argument parsing failed
    Invalid(String),
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
postboard - browse a remote users/posts/comments dataset

USAGE:
    postboard [--base-url <URL>]

OPTIONS:
    --base-url <URL>   Dataset base URL (default: https://jsonplaceholder.typicode.com,
                       or the POSTBOARD_BASE_URL environment variable)
    -V, --version      Print version
    -h, --help         Print this help";

/// Parse command-line arguments and return the appropriate command.
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut base_url = None;
    let mut args = args.skip(1); // Skip the program name

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--base-url" => match args.next() {
                Some(url) => base_url = Some(url),
                None => return CliCommand::Invalid("--base-url requires a value".to_string()),
            },
            other => {
                if let Some(url) = other.strip_prefix("--base-url=") {
                    base_url = Some(url.to_string());
                } else {
                    return CliCommand::Invalid(format!("unknown argument: {}", other));
                }
            }
        }
    }
    CliCommand::Run { base_url }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["postboard".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_no_args_runs_tui() {
        assert_eq!(parse(&[]), CliCommand::Run { base_url: None });
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_base_url_separate_value() {
        assert_eq!(
            parse(&["--base-url", "http://localhost:3000"]),
            CliCommand::Run {
                base_url: Some("http://localhost:3000".to_string())
            }
        );
    }

    #[test]
    fn test_parse_base_url_equals_form() {
        assert_eq!(
            parse(&["--base-url=http://localhost:3000"]),
            CliCommand::Run {
                base_url: Some("http://localhost:3000".to_string())
            }
        );
    }

    #[test]
    fn test_parse_base_url_missing_value() {
        assert!(matches!(parse(&["--base-url"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_unknown_argument() {
        assert!(matches!(parse(&["--bogus"]), CliCommand::Invalid(_)));
    }
}
