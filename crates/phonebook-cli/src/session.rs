use std::io::{self, BufRead, Write};

use phonebook_config::AppConfig;
use phonebook_store::AddressBook;
use tracing::info;

use crate::commands::{Context, Reply};
use crate::router;

/// One interactive run. Owns the address book for its whole lifetime.
pub struct Session {
    book: AddressBook,
    config: AppConfig,
}

impl Session {
    pub fn new(config: AppConfig) -> Self {
        Self {
            book: AddressBook::with_policy(config.phones.policy()),
            config,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn handle_line(&mut self, line: &str) -> Reply {
        let mut ctx = Context {
            book: &mut self.book,
        };
        router::dispatch(&mut ctx, line)
    }

    /// Reads lines until an exit keyword or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        info!(policy = ?self.book.policy(), "session started");
        let mut line = String::new();
        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                info!(contacts = self.book().len(), "input closed");
                return Ok(());
            }
            if line.trim().is_empty() {
                continue;
            }

            match self.handle_line(&line) {
                Reply::Exit => {
                    writeln!(output, "{}", self.config.farewell)?;
                    info!(contacts = self.book().len(), "session ended");
                    return Ok(());
                }
                Reply::Text(text) => writeln!(output, "{}", text)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::commands::Reply;
    use crate::error::{MSG_MISSING_ARGUMENT, MSG_UNKNOWN_NAME};
    use crate::router::INCORRECT_INPUT;
    use phonebook_config::AppConfig;
    use std::io::Cursor;

    fn session() -> Session {
        Session::new(AppConfig::default())
    }

    fn reply(session: &mut Session, line: &str) -> String {
        session.handle_line(line).to_string()
    }

    #[test]
    fn add_then_phone_shows_sanitized_number() {
        let mut session = session();
        reply(&mut session, "add Bill 123-456-7890");
        let out = reply(&mut session, "phone Bill");
        assert!(out.contains("Bill"));
        assert!(out.contains("1234567890"));
    }

    #[test]
    fn repeated_add_collects_both_phones() {
        let mut session = session();
        reply(&mut session, "add Ann 1111111111");
        reply(&mut session, "add Ann 2222222222");
        assert_eq!(
            reply(&mut session, "phone Ann"),
            "Ann: 1111111111, 2222222222"
        );
    }

    #[test]
    fn change_replaces_phone() {
        let mut session = session();
        reply(&mut session, "add Ann 1111111111");
        assert_eq!(
            reply(&mut session, "change Ann 1111111111 3333333333"),
            "Contact Ann 1111111111 to 3333333333 changed"
        );
        let out = reply(&mut session, "phone Ann");
        assert!(out.contains("3333333333"));
        assert!(!out.contains("1111111111"));
    }

    #[test]
    fn change_unknown_phone_reports_and_keeps_list() {
        let mut session = session();
        reply(&mut session, "add Ann 1111111111");
        assert_eq!(
            reply(&mut session, "change Ann 5555 3333"),
            "Phone 5555 not found in the Record"
        );
        assert_eq!(reply(&mut session, "phone ann"), "Ann: 1111111111");
    }

    #[test]
    fn delete_then_phone_is_unknown_user() {
        let mut session = session();
        reply(&mut session, "add Ann 1111111111");
        assert_eq!(reply(&mut session, "delete Ann"), "Contact Ann deleted");
        assert_eq!(reply(&mut session, "phone Ann"), MSG_UNKNOWN_NAME);
        assert_eq!(reply(&mut session, "delete Ann"), "Contact Ann not found");
    }

    #[test]
    fn unmatched_keyword_is_incorrect_input() {
        let mut session = session();
        assert_eq!(reply(&mut session, "xyz"), INCORRECT_INPUT);
        assert!(session.book().is_empty());
    }

    #[test]
    fn show_all_lists_contacts_in_insertion_order() {
        let mut session = session();
        assert_eq!(reply(&mut session, "show all"), "Address book is empty");
        reply(&mut session, "add zoe +1 (1)");
        reply(&mut session, "add adam 2");
        assert_eq!(reply(&mut session, "show all"), "Zoe: 1\nAdam: 2");
    }

    #[test]
    fn change_with_two_args_asks_for_all_params() {
        let mut session = session();
        reply(&mut session, "add Ann 1");
        assert_eq!(reply(&mut session, "change Ann 1"), MSG_MISSING_ARGUMENT);
    }

    #[test]
    fn duplicate_phone_rejected_when_configured() {
        let mut config = AppConfig::default();
        config.phones.allow_duplicates = false;
        let mut session = Session::new(config);
        reply(&mut session, "add Ann 111");
        assert_eq!(
            reply(&mut session, "add Ann 1-1-1"),
            "Phone 111 already saved for Ann"
        );
    }

    #[test]
    fn run_stops_at_exit_keyword() {
        let mut session = session();
        let input = Cursor::new("add ann 1\n\nphone ann\ngood bye\nadd bob 2\n");
        let mut output = Vec::new();
        session.run(input, &mut output).expect("run");
        let text = String::from_utf8(output).expect("utf8");
        assert!(text.contains("Contact Ann 1 added"));
        assert!(text.contains("Ann: 1"));
        assert!(text.ends_with("Goodbye!\n"));
        assert_eq!(session.book().len(), 1);
        assert_eq!(session.handle_line("bye"), Reply::Exit);
    }

    #[test]
    fn run_returns_at_end_of_input() {
        let mut session = session();
        let mut output = Vec::new();
        session
            .run(Cursor::new("hello"), &mut output)
            .expect("run");
        let text = String::from_utf8(output).expect("utf8");
        assert!(text.contains("How can I help you?"));
        assert!(!text.contains("Goodbye!"));
    }
}
