use tracing::debug;

use crate::commands::{CommandArgs, CommandSpec, Context, Reply, COMMANDS};
use crate::error::recover;

pub const INCORRECT_INPUT: &str = "Incorrect input. Try again";

#[derive(Debug)]
pub struct ParsedCommand<'a> {
    pub spec: &'static CommandSpec,
    pub keyword: &'static str,
    pub tokens: Vec<&'a str>,
}

/// Finds the first registered keyword that starts `input` as a whole word
/// and splits the rest into whitespace-separated tokens. `input` is
/// expected to have gone through [`normalize_line`].
pub fn parse_command(input: &str) -> Option<ParsedCommand<'_>> {
    let input = input.trim();
    for spec in COMMANDS {
        for &keyword in spec.keywords {
            if let Some(rest) = strip_keyword(input, keyword) {
                return Some(ParsedCommand {
                    spec,
                    keyword,
                    tokens: rest.split_whitespace().collect(),
                });
            }
        }
    }
    None
}

fn strip_keyword<'a>(input: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = input.strip_prefix(keyword)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest)
    } else {
        None
    }
}

/// Lower-cases the line and collapses whitespace runs to single spaces so
/// multi-word keywords match the same way arguments are split.
pub fn normalize_line(line: &str) -> String {
    line.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Routes one raw line to its handler. Always produces a reply.
pub fn dispatch(ctx: &mut Context<'_>, line: &str) -> Reply {
    let normalized = normalize_line(line);
    let Some(parsed) = parse_command(&normalized) else {
        debug!(input = line, "no command matched");
        return Reply::text(INCORRECT_INPUT);
    };
    debug!(
        command = parsed.spec.name,
        keyword = parsed.keyword,
        args = parsed.tokens.len(),
        "command routed"
    );

    recover(
        CommandArgs::bind(parsed.spec, &parsed.tokens)
            .and_then(|args| (parsed.spec.handler)(ctx, &args)),
    )
}

#[cfg(test)]
mod tests {
    use super::{dispatch, normalize_line, parse_command, INCORRECT_INPUT};
    use crate::commands::general::{GREETING, HELP_TEXT};
    use crate::commands::{Context, Reply};
    use crate::error::{MSG_MISSING_ARGUMENT, MSG_NO_ARGUMENTS, MSG_UNKNOWN_NAME};
    use phonebook_store::AddressBook;

    fn run(book: &mut AddressBook, line: &str) -> String {
        let mut ctx = Context { book };
        dispatch(&mut ctx, line).to_string()
    }

    #[test]
    fn parse_splits_remainder_on_whitespace() {
        let parsed = parse_command("add   bill  123-456-7890 ").expect("parsed");
        assert_eq!(parsed.spec.name, "add");
        assert_eq!(parsed.tokens, vec!["bill", "123-456-7890"]);
    }

    #[test]
    fn parse_matches_multi_word_keywords() {
        assert_eq!(parse_command("show all").expect("parsed").spec.name, "show all");
        let parsed = parse_command("good bye").expect("parsed");
        assert_eq!(parsed.spec.name, "exit");
        assert_eq!(parsed.keyword, "good bye");
        assert!(parsed.tokens.is_empty());
    }

    #[test]
    fn parse_requires_keyword_word_boundary() {
        assert!(parse_command("hint").is_none());
        assert!(parse_command("address book").is_none());
        assert!(parse_command(".hidden").is_none());
        assert!(parse_command("show").is_none());
        assert_eq!(parse_command(".").expect("parsed").spec.name, "exit");
    }

    #[test]
    fn parse_uses_registration_order() {
        let parsed = parse_command("hi there").expect("parsed");
        assert_eq!(parsed.keyword, "hi");
        assert_eq!(parsed.tokens, vec!["there"]);
    }

    #[test]
    fn dispatch_is_case_insensitive() {
        let mut book = AddressBook::new();
        assert_eq!(run(&mut book, "HELLO"), GREETING);
        assert_eq!(run(&mut book, "Help"), HELP_TEXT);
        assert_eq!(run(&mut book, "ADD bill 123"), "Contact Bill 123 added");
        assert_eq!(run(&mut book, "Show All"), "Bill: 123");
    }

    #[test]
    fn normalize_line_collapses_whitespace() {
        assert_eq!(normalize_line("  Good \t  BYE \n"), "good bye");
        assert_eq!(normalize_line("add  Ann   1"), "add ann 1");
    }

    #[test]
    fn dispatch_matches_multi_word_keywords_with_extra_spaces() {
        let mut book = AddressBook::new();
        run(&mut book, "add ann 1");
        assert_eq!(run(&mut book, "show   all"), "Ann: 1");
        let mut ctx = Context { book: &mut book };
        assert_eq!(dispatch(&mut ctx, "good  bye"), Reply::Exit);
        assert_eq!(dispatch(&mut ctx, "GOOD\tBYE"), Reply::Exit);
    }

    #[test]
    fn dispatch_exit_keywords_return_sentinel() {
        let mut book = AddressBook::new();
        for line in [".", "bye", "good bye", "close", "exit", "EXIT"] {
            let mut ctx = Context { book: &mut book };
            assert_eq!(dispatch(&mut ctx, line), Reply::Exit, "line {line:?}");
        }
    }

    #[test]
    fn dispatch_unmatched_leaves_store_untouched() {
        let mut book = AddressBook::new();
        run(&mut book, "add ann 1");
        assert_eq!(run(&mut book, "xyz"), INCORRECT_INPUT);
        assert_eq!(book.render_all(), vec!["Ann: 1"]);
    }

    #[test]
    fn dispatch_recovers_from_bad_arguments() {
        let mut book = AddressBook::new();
        assert_eq!(run(&mut book, "add"), MSG_NO_ARGUMENTS);
        assert_eq!(run(&mut book, "add bill"), MSG_MISSING_ARGUMENT);
        assert_eq!(run(&mut book, "change bill 1"), MSG_MISSING_ARGUMENT);
        assert_eq!(run(&mut book, "phone bill"), MSG_UNKNOWN_NAME);
        assert!(book.is_empty());
    }
}
