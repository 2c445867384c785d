//! Hand-rolled argument parsing for the `palisade` binary.
//!
//! The surface is small enough that a token loop beats a parser dependency:
//! a handful of boolean flags, one path option, and nothing positional.

use std::path::PathBuf;

use palisade_core::{BuildError, BuildResult, MinifyOverride};

/// Parsed command-line input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliInput {
    /// `--watch` / `-w`: rebuild on input changes after the first build.
    pub watch: bool,
    /// `--minify` / `--no-minify` resolution.
    pub minify: MinifyOverride,
    /// `--verbose` / `-v`.
    pub verbose: bool,
    /// `--quiet` / `-q`.
    pub quiet: bool,
    /// `--no-color`: suppress ANSI escapes regardless of terminal detection.
    pub no_color: bool,
    /// `--root <path>`: project root holding the input documents. Defaults
    /// to the current directory.
    pub root: Option<PathBuf>,
    /// `--help` / `-h`.
    pub help: bool,
    /// `--version` / `-V`.
    pub version: bool,
}

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
palisade - build a security-control framework into a static site

USAGE:
    palisade [OPTIONS]

OPTIONS:
    -w, --watch        Rebuild automatically when inputs change
        --minify       Minify output (overrides config)
        --no-minify    Do not minify output (overrides config)
        --root <DIR>   Project root (default: current directory)
    -v, --verbose      Debug-level log output
    -q, --quiet        Errors only
        --no-color     Disable ANSI colors
    -h, --help         Print this help
    -V, --version      Print version
";

/// Parse the argument list (without the binary name).
///
/// # Errors
///
/// Returns [`BuildError::Config`] for an unknown flag or a `--root` with no
/// value. If both `--minify` and `--no-minify` are given, `--minify` wins.
pub fn parse_cli_args<I>(args: I) -> BuildResult<CliInput>
where
    I: IntoIterator<Item = String>,
{
    let mut input = CliInput::default();
    let mut force_on = false;
    let mut force_off = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--watch" | "-w" => input.watch = true,
            "--minify" => force_on = true,
            "--no-minify" => force_off = true,
            "--verbose" | "-v" => input.verbose = true,
            "--quiet" | "-q" => input.quiet = true,
            "--no-color" => input.no_color = true,
            "--help" | "-h" => input.help = true,
            "--version" | "-V" => input.version = true,
            "--root" => {
                let value = args.next().ok_or_else(|| BuildError::Config {
                    field: "--root".to_owned(),
                    value: String::new(),
                    reason: "expected a directory path after --root".to_owned(),
                })?;
                input.root = Some(PathBuf::from(value));
            }
            other => {
                return Err(BuildError::Config {
                    field: "argument".to_owned(),
                    value: other.to_owned(),
                    reason: "unrecognized flag; see --help".to_owned(),
                });
            }
        }
    }

    input.minify = if force_on {
        MinifyOverride::ForceOn
    } else if force_off {
        MinifyOverride::ForceOff
    } else {
        MinifyOverride::UseConfig
    };

    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::parse_cli_args;
    use palisade_core::MinifyOverride;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> super::CliInput {
        parse_cli_args(args.iter().map(|s| (*s).to_owned())).expect("valid args")
    }

    #[test]
    fn empty_args_are_all_defaults() {
        let input = parse(&[]);
        assert!(!input.watch);
        assert_eq!(input.minify, MinifyOverride::UseConfig);
        assert!(input.root.is_none());
    }

    #[test]
    fn long_and_short_flags_are_equivalent() {
        assert_eq!(parse(&["--watch"]), parse(&["-w"]));
        assert_eq!(parse(&["--verbose"]), parse(&["-v"]));
        assert_eq!(parse(&["--quiet"]), parse(&["-q"]));
    }

    #[test]
    fn minify_flags_resolve_with_force_on_winning() {
        assert_eq!(parse(&["--minify"]).minify, MinifyOverride::ForceOn);
        assert_eq!(parse(&["--no-minify"]).minify, MinifyOverride::ForceOff);
        assert_eq!(
            parse(&["--no-minify", "--minify"]).minify,
            MinifyOverride::ForceOn
        );
    }

    #[test]
    fn root_takes_a_value() {
        let input = parse(&["--root", "/srv/framework"]);
        assert_eq!(input.root, Some(PathBuf::from("/srv/framework")));
    }

    #[test]
    fn root_without_a_value_is_rejected() {
        let error = parse_cli_args(["--root".to_owned()]).expect_err("must fail");
        assert!(error.to_string().contains("--root"));
    }

    #[test]
    fn unknown_flags_are_rejected_with_the_flag_named() {
        let error = parse_cli_args(["--frobnicate".to_owned()]).expect_err("must fail");
        assert!(error.to_string().contains("--frobnicate"));
    }
}
