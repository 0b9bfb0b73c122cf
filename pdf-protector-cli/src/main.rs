mod dispatch;

use clap::error::ErrorKind;
use clap::Parser;
use dispatch::{Invocation, UsageError, USAGE};
use std::env;
use std::ffi::OsString;
use std::io;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "pdf-protector",
    about = "Password-protect a PDF with restricted permissions, or check whether it is protected",
    override_usage = "pdf-protector <input-pdf> <output-pdf> <user-password> [owner-password]\n       pdf-protector --check <input-pdf>",
    version
)]
struct Cli {
    /// Operation arguments, taken verbatim (paths and passwords may start with '-')
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    args: Vec<String>,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse_from(positional_argv(env::args_os())) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            debug!(error = %e, "rejected command line");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let invocation = match Invocation::from_args(&cli.args) {
        Ok(invocation) => invocation,
        Err(UsageError::NoArguments) => {
            print_usage();
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    debug!(operation = kind(&invocation), "dispatching");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match dispatch::run(&invocation, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Flags clap answers itself when given as the first argument
const CLAP_FLAGS: [&str; 4] = ["-h", "--help", "-V", "--version"];

/// Insert an option terminator after the program name so clap keeps every
/// operation argument as a value, including a leading `--`.
fn positional_argv<I: IntoIterator<Item = OsString>>(raw: I) -> Vec<OsString> {
    let mut raw = raw.into_iter();
    let mut argv: Vec<OsString> = raw.next().into_iter().collect();
    let rest: Vec<OsString> = raw.collect();

    let answered_by_clap = rest
        .first()
        .and_then(|first| first.to_str())
        .is_some_and(|first| CLAP_FLAGS.contains(&first));
    if !answered_by_clap {
        argv.push(OsString::from("--"));
    }

    argv.extend(rest);
    argv
}

fn print_usage() {
    for line in USAGE {
        eprintln!("{line}");
    }
}

/// Operation name for logs; the invocation itself carries passwords
fn kind(invocation: &Invocation) -> &'static str {
    match invocation {
        Invocation::Protect { .. } => "protect",
        Invocation::Check { .. } => "check",
    }
}

/// Diagnostics go to stderr so stdout carries only the result lines
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    fn parsed_args(values: &[&str]) -> Vec<String> {
        Cli::try_parse_from(positional_argv(argv(values)))
            .expect("arguments should parse")
            .args
    }

    #[test]
    fn test_no_arguments() {
        assert!(parsed_args(&["pdf-protector"]).is_empty());
    }

    #[test]
    fn test_leading_double_dash_kept_as_input() {
        assert_eq!(
            parsed_args(&["pdf-protector", "--", "a.pdf", "b.pdf"]),
            vec!["--", "a.pdf", "b.pdf"]
        );
    }

    #[test]
    fn test_hyphen_values_kept_verbatim() {
        assert_eq!(
            parsed_args(&["pdf-protector", "a.pdf", "b.pdf", "-secret", "--help"]),
            vec!["a.pdf", "b.pdf", "-secret", "--help"]
        );
        assert_eq!(
            parsed_args(&["pdf-protector", "--check", "a.pdf"]),
            vec!["--check", "a.pdf"]
        );
    }

    #[test]
    fn test_help_and_version_reach_clap() {
        for flag in CLAP_FLAGS {
            let err = Cli::try_parse_from(positional_argv(argv(&["pdf-protector", flag])))
                .err()
                .expect("help and version are reported as clap errors");
            assert!(matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ));
        }
    }
}
