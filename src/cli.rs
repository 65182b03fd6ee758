//! CLI argument capture and outcome emission

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use astramig::config::Settings;
use astramig::dispatch::{dispatch, Action, Outcome};
use astramig::git::SystemGit;
use astramig::output::{error_line, OutputConfig};

/// Environment variable holding the log filter (env_logger syntax).
const LOG_ENV: &str = "ASTRAMIG_LOG";

/// AstraMig CLI - clone the AstraMig project into a local directory
///
/// Clap only captures the first two positionals. The built-in help and
/// version flags are disabled so `-h`, `-v` and friends reach the dispatch
/// table as ordinary command tokens.
#[derive(Parser, Debug)]
#[command(name = "astramig")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Command to run: init, help, --version
    #[arg(value_name = "COMMAND", allow_hyphen_values = true)]
    command: Option<String>,

    /// Target directory for init
    #[arg(value_name = "DIR", allow_hyphen_values = true)]
    argument: Option<String>,

    /// Extra arguments, ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,

    /// Set when clap rejected the command line
    #[arg(skip)]
    rejected: bool,
}

impl Cli {
    /// Capture the process arguments.
    pub fn parse_args() -> Self {
        Self::capture(std::env::args_os())
    }

    /// Capture an argument vector (including the program name).
    ///
    /// clap treats `--` as an escape and drops it. In the first two positions
    /// it is an ordinary token here, so such command lines are captured
    /// verbatim instead. Anything clap refuses, e.g. non-UTF-8 input, is kept
    /// as a rejected command line so it is never reported with clap's own
    /// usage error.
    pub fn capture<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        if args.iter().skip(1).take(2).any(|a| a == "--") {
            return Self::verbatim(&args);
        }

        match Self::try_parse_from(&args) {
            Ok(cli) => cli,
            Err(_) => Self::rejected(&args),
        }
    }

    /// Take the first two tokens as they are, without clap.
    fn verbatim(args: &[OsString]) -> Self {
        let command = args.get(1).and_then(|a| a.to_str());
        let argument = args.get(2).map(|a| a.to_str());

        match (command, argument) {
            (Some(command), None | Some(Some(_))) => Self {
                command: Some(command.to_string()),
                argument: argument.flatten().map(str::to_string),
                rest: args.iter().skip(3).map(lossy).collect(),
                rejected: false,
            },
            _ => Self::rejected(args),
        }
    }

    fn rejected(args: &[OsString]) -> Self {
        Self {
            command: args.get(1).map(lossy),
            argument: args.get(2).map(lossy),
            rest: Vec::new(),
            rejected: true,
        }
    }

    /// The action selected by the captured arguments.
    ///
    /// A rejected command line can still ask for help or the version, but
    /// never runs `init`: its directory argument could not be read.
    pub fn action(&self) -> Action {
        let action = Action::from_args(self.command.as_deref(), self.argument.as_deref());
        match action {
            Action::Init { .. } if self.rejected => {
                Action::UnreadableDir(self.argument.clone().unwrap_or_default())
            }
            action => action,
        }
    }

    /// Execute the selected action and return the process exit code.
    pub fn execute(self) -> Result<ExitCode> {
        init_logging();

        if !self.rest.is_empty() {
            log::debug!("Ignoring extra arguments: {:?}", self.rest);
        }

        let action = self.action();
        let settings = Settings::from_env();
        let git = SystemGit::new(settings.git_program.clone());

        // Only init resolves paths against the working directory
        let cwd = match action {
            Action::Init { .. } => {
                std::env::current_dir().context("Failed to determine the current directory")?
            }
            _ => PathBuf::new(),
        };

        let outcome = dispatch(&action, &settings, &git, &cwd);
        emit(&outcome, &OutputConfig::from_env());

        Ok(exit_code(outcome.exit_code))
    }
}

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .try_init();
}

/// Print an outcome: stderr first, then stdout.
fn emit(outcome: &Outcome, output: &OutputConfig) {
    if let Some(message) = &outcome.stderr {
        eprintln!("{}", error_line(output, message));
    }
    if let Some(text) = &outcome.stdout {
        println!("{}", text);
    }
}

fn lossy(arg: &OsString) -> String {
    arg.to_string_lossy().into_owned()
}

/// Convert an outcome's exit code for the OS. Codes that do not fit in a
/// byte become a generic failure.
fn exit_code(code: i32) -> ExitCode {
    match u8::try_from(code) {
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    }
}
