use std::ffi::OsString;
use std::fmt::Display;
use std::io::Write;
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command, value_parser};
use logging::{DEFAULT_CALLER_DEPTH, FATAL_EXIT_CODE, Logger, LoggerConfig, Severity};

pub(crate) const PROGRAM_NAME: &str = "figo-log";

/// Exit status for command-line usage errors.
const USAGE_EXIT_CODE: u8 = 2;

/// A parsed command line: the switches to apply and the line to log.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Invocation {
    pub(crate) config: LoggerConfig,
    pub(crate) severity: Severity,
    pub(crate) template: String,
    pub(crate) args: Vec<String>,
}

impl Invocation {
    /// Applies the switches to `logger` and logs the line.
    ///
    /// With [`logging::ProcessExit`] a fatal line never returns; other
    /// terminators fall through to the fatal exit status.
    pub(crate) fn execute(&self, logger: &Logger) -> ExitCode {
        logger.apply(self.config);

        let args: Vec<&dyn Display> = self.args.iter().map(|arg| arg as &dyn Display).collect();
        logger.logf(self.severity, &self.template, &args);

        if self.severity.is_fatal() {
            ExitCode::from(u8::try_from(FATAL_EXIT_CODE).unwrap_or(1))
        } else {
            ExitCode::SUCCESS
        }
    }
}

fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .about("Write one Figo log line to standard output.")
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Suppress debug and info lines.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Render without ANSI colors.")
                .overrides_with("color")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .help("Render with ANSI colors.")
                .overrides_with("no-color")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("show-caller")
                .long("show-caller")
                .help("Prefix the message with [file:line function()].")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("caller-depth")
                .long("caller-depth")
                .value_name("N")
                .help("Frames above the logging call used for the call site.")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("level")
                .value_name("LEVEL")
                .help("One of debug, info, warn, error, fatal.")
                .required(true)
                .value_parser(value_parser!(Severity)),
        )
        .arg(
            Arg::new("template")
                .value_name("TEMPLATE")
                .help("printf-style template (%s, %d, %v, %q, %%).")
                .required(true)
                .allow_hyphen_values(true)
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("args")
                .value_name("ARGS")
                .action(ArgAction::Append)
                .num_args(0..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true)
                .value_parser(value_parser!(String)),
        )
}

pub(crate) fn parse_args<I, S>(arguments: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let mut matches = clap_command().try_get_matches_from(arguments)?;

    let mut config = LoggerConfig::default().with_verbose(!matches.get_flag("quiet"));
    if matches.get_flag("no-color") {
        config = config.with_color_disabled(true);
    } else if matches.get_flag("color") {
        config = config.with_color_disabled(false);
    }
    config = config
        .with_call_site(matches.get_flag("show-caller"))
        .with_caller_depth(
            matches
                .remove_one::<usize>("caller-depth")
                .unwrap_or(DEFAULT_CALLER_DEPTH),
        );

    let severity = matches
        .remove_one::<Severity>("level")
        .unwrap_or(Severity::Info);
    let template = matches.remove_one::<String>("template").unwrap_or_default();
    let args = matches
        .remove_many::<String>("args")
        .map(|values| values.collect())
        .unwrap_or_default();

    Ok(Invocation {
        config,
        severity,
        template,
        args,
    })
}

/// Parses `arguments` and logs through the shared logger.
///
/// Help goes to `stdout`; usage errors go to `stderr` with exit status 2.
pub(crate) fn run_with<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(invocation) => invocation.execute(logging::logger()),
        Err(error) => {
            let rendered = error.render();
            let _ = if error.use_stderr() {
                write!(stderr, "{rendered}")
            } else {
                write!(stdout, "{rendered}")
            };
            ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(USAGE_EXIT_CODE))
        }
    }
}
