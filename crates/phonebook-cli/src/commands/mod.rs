use phonebook_store::AddressBook;
use std::fmt;
use tracing::debug;

use crate::error::CommandError;

pub mod contacts;
pub mod general;

pub const EXIT_SENTINEL: &str = "Bye";

pub struct Context<'a> {
    pub book: &'a mut AddressBook,
}

/// What a handler hands back to the session loop. `Exit` ends the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Exit,
}

impl Reply {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Text(text) => f.write_str(text),
            Reply::Exit => f.write_str(EXIT_SENTINEL),
        }
    }
}

pub type Handler = fn(&mut Context<'_>, &CommandArgs) -> Result<Reply, CommandError>;

pub struct CommandSpec {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub params: &'static [&'static str],
    pub handler: Handler,
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("keywords", &self.keywords)
            .field("params", &self.params)
            .finish()
    }
}

/// Registration order is matching order: the first keyword that prefixes
/// the input wins, not the longest one.
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "hello",
        keywords: &["hello", "hi"],
        params: &[],
        handler: general::hello,
    },
    CommandSpec {
        name: "show all",
        keywords: &["show all"],
        params: &[],
        handler: contacts::show_all,
    },
    CommandSpec {
        name: "phone",
        keywords: &["phone"],
        params: &["name"],
        handler: contacts::phone,
    },
    CommandSpec {
        name: "add",
        keywords: &["add"],
        params: &["name", "phone"],
        handler: contacts::add,
    },
    CommandSpec {
        name: "change",
        keywords: &["change"],
        params: &["name", "old_phone", "new_phone"],
        handler: contacts::change,
    },
    CommandSpec {
        name: "delete",
        keywords: &["delete"],
        params: &["name"],
        handler: contacts::delete,
    },
    CommandSpec {
        name: "help",
        keywords: &["help"],
        params: &[],
        handler: general::help,
    },
    CommandSpec {
        name: "exit",
        keywords: &[".", "bye", "good bye", "close", "exit"],
        params: &[],
        handler: general::bye,
    },
];

/// Positional tokens bound to a command's declared parameter names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArgs {
    command: &'static str,
    values: Vec<(&'static str, String)>,
}

impl CommandArgs {
    pub fn bind(spec: &CommandSpec, tokens: &[&str]) -> Result<Self, CommandError> {
        if tokens.is_empty() && !spec.params.is_empty() {
            return Err(CommandError::NoArguments { command: spec.name });
        }
        if let Some(&param) = spec.params.get(tokens.len()) {
            return Err(CommandError::MissingArgument {
                command: spec.name,
                param,
            });
        }
        if tokens.len() > spec.params.len() {
            debug!(
                command = spec.name,
                ignored = ?&tokens[spec.params.len()..],
                "extra arguments ignored"
            );
        }

        let values = spec
            .params
            .iter()
            .zip(tokens)
            .map(|(param, token)| (*param, (*token).to_string()))
            .collect();
        Ok(Self {
            command: spec.name,
            values,
        })
    }

    pub fn get(&self, param: &'static str) -> Result<&str, CommandError> {
        self.values
            .iter()
            .find(|(name, _)| *name == param)
            .map(|(_, value)| value.as_str())
            .ok_or(CommandError::MissingArgument {
                command: self.command,
                param,
            })
    }
}
