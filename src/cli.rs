//! Minimal CLI parsing for run mode overrides.

use std::env;

use crate::app_mode::RunMode;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub run_mode_override: Option<RunMode>,
    /// Title given to `--lookup`
    pub lookup_query: Option<String>,
}

impl CliOptions {
    pub fn from_args() -> Self {
        Self::parse(env::args().skip(1))
    }

    pub fn parse<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = CliOptions::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bot" => options.run_mode_override = Some(RunMode::Bot),
                "--lookup" => {
                    options.run_mode_override = Some(RunMode::Lookup);
                    options.lookup_query = args.next();
                }
                "--run-mode" => {
                    if let Some(value) = args.next() {
                        options.run_mode_override = RunMode::from_arg(&value);
                    }
                }
                _ if arg.starts_with("--run-mode=") => {
                    if let Some(value) = arg.split_once('=').map(|(_, v)| v) {
                        options.run_mode_override = RunMode::from_arg(value);
                    }
                }
                _ if arg.starts_with("--lookup=") => {
                    options.run_mode_override = Some(RunMode::Lookup);
                    options.lookup_query = arg.split_once('=').map(|(_, v)| v.to_string());
                }
                _ => {}
            }
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args() {
        assert_eq!(CliOptions::parse(args(&[])), CliOptions::default());
    }

    #[test]
    fn test_lookup_with_query() {
        let options = CliOptions::parse(args(&["--lookup", "el padrno"]));
        assert_eq!(options.run_mode_override, Some(RunMode::Lookup));
        assert_eq!(options.lookup_query.as_deref(), Some("el padrno"));

        let options = CliOptions::parse(args(&["--lookup=breaking bad"]));
        assert_eq!(options.lookup_query.as_deref(), Some("breaking bad"));
    }

    #[test]
    fn test_run_mode_flags() {
        let options = CliOptions::parse(args(&["--run-mode", "bot"]));
        assert_eq!(options.run_mode_override, Some(RunMode::Bot));

        let options = CliOptions::parse(args(&["--run-mode=lookup"]));
        assert_eq!(options.run_mode_override, Some(RunMode::Lookup));

        let options = CliOptions::parse(args(&["--run-mode=tray"]));
        assert_eq!(options.run_mode_override, None);
    }
}
