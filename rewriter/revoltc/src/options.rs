//! Command-line options.
//!
//! Parsed by hand from `std::env::args`; the surface is small enough that
//! a parser crate would be heavier than the parsing.

use std::path::PathBuf;

/// Parsed invocation options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Report what would change; write nothing.
    pub dry_run: bool,
    /// Copy originals into this directory before overwriting.
    pub backup_dir: Option<PathBuf>,
    /// Print the rule catalog and exit.
    pub list_rules: bool,
    /// Per-file conversion counts on stdout.
    pub verbose: bool,
    /// Files or directories to process.
    pub paths: Vec<PathBuf>,
}

/// Parse arguments (excluding the program name).
///
/// Returns `Err` with a message suitable for stderr; the caller prints
/// usage and exits.
pub fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    for arg in args {
        if arg == "--dry-run" {
            options.dry_run = true;
        } else if arg == "--list-rules" {
            options.list_rules = true;
        } else if arg == "--verbose" || arg == "-v" {
            options.verbose = true;
        } else if let Some(dir) = arg.strip_prefix("--backup=") {
            if dir.is_empty() {
                return Err("--backup= requires a directory".to_string());
            }
            options.backup_dir = Some(PathBuf::from(dir));
        } else if arg.starts_with('-') {
            return Err(format!("unknown option `{arg}`"));
        } else {
            options.paths.push(PathBuf::from(arg));
        }
    }
    if options.paths.is_empty() && !options.list_rules {
        return Err("missing file or directory to process".to_string());
    }
    Ok(options)
}

/// Usage text for stderr.
pub const USAGE: &str = "\
Usage: revolt [options] <file-or-directory>...

Convert legacy assertion calls to the expression-macro API.

Options:
  --dry-run          Report files that would change; write nothing
  --backup=<dir>     Copy originals into <dir> before overwriting
  --list-rules       Print the convertible legacy names and exit
  -v, --verbose      Per-file conversion counts
";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_flags_and_paths() {
        let options = parse_args(&args(&["--dry-run", "-v", "Tests", "One.swift"])).unwrap();
        assert!(options.dry_run);
        assert!(options.verbose);
        assert_eq!(options.paths.len(), 2);
    }

    #[test]
    fn parses_backup_dir() {
        let options = parse_args(&args(&["--backup=.orig", "Tests"])).unwrap();
        assert_eq!(options.backup_dir, Some(PathBuf::from(".orig")));
    }

    #[test]
    fn rejects_unknown_flags_and_empty_invocations() {
        assert!(parse_args(&args(&["--frobnicate", "x"])).is_err());
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["--backup=", "x"])).is_err());
    }

    #[test]
    fn list_rules_needs_no_paths() {
        let options = parse_args(&args(&["--list-rules"])).unwrap();
        assert!(options.list_rules);
    }
}
