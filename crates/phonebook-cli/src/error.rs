use anyhow::Error;
use phonebook_config::ConfigError;
use phonebook_core::CoreError;
use phonebook_store::error::StoreError;
use std::process::ExitCode;
use thiserror::Error as ThisError;
use tracing::debug;

use crate::commands::Reply;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

pub const MSG_MISSING_ARGUMENT: &str = "Give me name, old phone and new phone";
pub const MSG_UNKNOWN_NAME: &str = "Enter correct username";
pub const MSG_INVALID_VALUE: &str = "Enter username";
pub const MSG_NO_ARGUMENTS: &str = "Not enough params for command";

/// Failure of a single command handler. Never escapes the session: see
/// [`recover`].
#[derive(Debug, ThisError)]
pub enum CommandError {
    #[error("{command}: missing argument {param}")]
    MissingArgument {
        command: &'static str,
        param: &'static str,
    },
    #[error("{command}: no arguments supplied")]
    NoArguments { command: &'static str },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CommandError {
    pub fn user_message(&self) -> String {
        match self {
            CommandError::MissingArgument { .. } => MSG_MISSING_ARGUMENT.to_string(),
            CommandError::NoArguments { .. } => MSG_NO_ARGUMENTS.to_string(),
            CommandError::Core(_) | CommandError::Store(StoreError::Core(_)) => {
                MSG_INVALID_VALUE.to_string()
            }
            CommandError::Store(StoreError::NotFound(_)) => MSG_UNKNOWN_NAME.to_string(),
            CommandError::Store(StoreError::PhoneNotFound { phone, .. }) => {
                format!("Phone {} not found in the Record", phone)
            }
            CommandError::Store(StoreError::DuplicatePhone { name, phone }) => {
                format!("Phone {} already saved for {}", phone, name)
            }
        }
    }
}

/// Turns a handler outcome into something printable.
pub fn recover(result: Result<Reply, CommandError>) -> Reply {
    match result {
        Ok(reply) => reply,
        Err(err) => {
            debug!(error = %err, "command failed");
            Reply::Text(err.user_message())
        }
    }
}

pub fn report_error(err: &Error, verbose: bool) {
    eprintln!("error: {}", error_summary(err, verbose));
}

/// Verbose shows the whole chain; otherwise the outer context and the root
/// cause only.
fn error_summary(err: &Error, verbose: bool) -> String {
    if verbose {
        return format!("{:#}", err);
    }
    let root = err.root_cause();
    if err.chain().count() > 1 {
        format!("{}: {}", err, root)
    } else {
        err.to_string()
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::EmptyPrompt
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
