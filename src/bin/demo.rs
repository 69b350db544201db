//! Command-line demonstration of `SStr` construction and formatting.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command, value_parser};
use logging::{LogConfig, init_tracing};
use sstr::SStr;
use sstr_format::{FormatConfig, FormatError, Formatter, sprintf};
use thiserror::Error;
use tracing::debug;

const PROGRAM_NAME: &str = "sstr-demo";

/// Exit status for command-line usage errors.
const USAGE_EXIT: u8 = 2;

#[derive(Debug, PartialEq)]
struct ParsedArgs {
    show_help: bool,
    show_version: bool,
    verbose: u8,
    precision: Option<usize>,
    float: Option<f64>,
}

fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .about("Builds a byte string and prints it through the sstr formatter.")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output; repeat for more detail.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("precision")
                .long("precision")
                .value_name("N")
                .help("Fraction digits used for --float.")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("float")
                .long("float")
                .value_name("F")
                .help("Also print this value through %f.")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64)),
        )
}

fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let matches = clap_command().try_get_matches_from(args)?;

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        verbose: matches.get_count("verbose"),
        precision: matches.get_one::<usize>("precision").copied(),
        float: matches.get_one::<f64>("float").copied(),
    })
}

#[derive(Debug, Error)]
enum DemoError {
    #[error("formatting failed: {0}")]
    Format(#[from] FormatError),
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

/// Builds `"hello world"` piecewise and renders the summary line.
fn summary_line() -> Result<SStr, FormatError> {
    let mut total = SStr::new();
    total.append_bytes(b"hello")?;
    total.append_bytes(b" ")?;
    total.append_bytes(b"world")?;
    debug!(
        target: "sstr::demo",
        length = total.len(),
        inline = total.is_inline(),
        "built total"
    );

    sprintf!(
        "stotal=%S, c-str=%s, int=%d, long=0x%ux%N",
        &total,
        c"this is c str",
        123,
        0x456
    )
}

fn float_line(value: f64, precision: Option<usize>) -> Result<SStr, FormatError> {
    let mut config = FormatConfig::new();
    if let Some(precision) = precision {
        config = config.with_default_precision(precision);
    }
    Formatter::new(config).render(b"float=%f%N", &[value.into()])
}

fn run_demo<Out: Write>(parsed: &ParsedArgs, stdout: &mut Out) -> Result<(), DemoError> {
    stdout.write_all(summary_line()?.as_bytes())?;
    if let Some(value) = parsed.float {
        stdout.write_all(float_line(value, parsed.precision)?.as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}

/// Parses `args`, prints the demonstration output and maps the outcome to an
/// exit status.
#[must_use]
pub fn run_with<I, Out, Err>(args: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let parsed = match parse_args(args) {
        Ok(parsed) => parsed,
        Err(error) => {
            let _ = write!(stderr, "{}", error.render());
            return ExitCode::from(USAGE_EXIT);
        }
    };

    if parsed.show_help {
        let help = clap_command().render_help();
        return match write!(stdout, "{help}") {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    }
    if parsed.show_version {
        return match writeln!(stdout, "{PROGRAM_NAME} {}", env!("CARGO_PKG_VERSION")) {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    }

    if let Err(error) = init_tracing(&LogConfig::from_verbose_level(parsed.verbose)) {
        debug!(target: "sstr::demo", %error, "subscriber already installed");
    }

    match run_demo(&parsed, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> (ExitCode, String, String) {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let exit = run_with(args.iter().copied(), &mut stdout, &mut stderr);
        (
            exit,
            String::from_utf8(stdout).expect("utf-8 stdout"),
            String::from_utf8(stderr).expect("utf-8 stderr"),
        )
    }

    #[test]
    fn prints_summary_line() {
        let (exit, stdout, stderr) = run(&[PROGRAM_NAME]);
        assert_eq!(exit, ExitCode::SUCCESS);
        assert_eq!(
            stdout,
            "stotal=hello world, c-str=this is c str, int=123, long=0x456\n"
        );
        assert!(stderr.is_empty());
    }

    #[test]
    fn float_uses_requested_precision() {
        let (exit, stdout, _) = run(&[PROGRAM_NAME, "--float", "-2.5", "--precision", "2"]);
        assert_eq!(exit, ExitCode::SUCCESS);
        assert!(stdout.ends_with("float=-2.50\n"), "{stdout}");
    }

    #[test]
    fn float_defaults_to_six_digits() {
        let (_, stdout, _) = run(&[PROGRAM_NAME, "--float", "0.125"]);
        assert!(stdout.ends_with("float=0.125000\n"), "{stdout}");
    }

    #[test]
    fn out_of_range_float_fails() {
        let (exit, stdout, stderr) = run(&[PROGRAM_NAME, "--float", "1e30"]);
        assert_eq!(exit, ExitCode::FAILURE);
        assert!(stdout.starts_with("stotal="));
        assert!(stderr.contains("formatting failed"), "{stderr}");
    }

    #[test]
    fn version_and_help() {
        let (exit, stdout, _) = run(&[PROGRAM_NAME, "--version"]);
        assert_eq!(exit, ExitCode::SUCCESS);
        assert!(stdout.starts_with(PROGRAM_NAME));

        let (exit, stdout, _) = run(&[PROGRAM_NAME, "--help"]);
        assert_eq!(exit, ExitCode::SUCCESS);
        assert!(stdout.contains("--precision"));
    }

    #[test]
    fn unknown_flag_is_a_usage_error() {
        let (exit, stdout, stderr) = run(&[PROGRAM_NAME, "--bogus"]);
        assert_eq!(exit, ExitCode::from(USAGE_EXIT));
        assert!(stdout.is_empty());
        assert!(!stderr.is_empty());
    }

    #[test]
    fn verbose_flags_are_counted() {
        let parsed = parse_args([PROGRAM_NAME, "-vvv", "--precision", "4"]).expect("valid args");
        assert_eq!(parsed.verbose, 3);
        assert_eq!(parsed.precision, Some(4));
        assert_eq!(parsed.float, None);

        let parsed = parse_args(Vec::<OsString>::new()).expect("empty args");
        assert!(!parsed.show_help);
    }
}
