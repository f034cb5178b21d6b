//! Line-oriented session on top of the dispatcher.
//!
//! The session understands a handful of reserved words (`hello`, `close`,
//! `exit`, and the empty line) and hands everything else to the
//! [`Dispatcher`].

use super::dispatcher::Dispatcher;
use crate::error::StorageResult;
use crate::repositories::Storage;
use crate::services::Clock;
use tracing::info;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const EMPTY_INPUT: &str = "Please enter a command.";
pub const GREETING: &str = "How can I help you?";
pub const GOODBYE: &str = "Good bye!";

/// What the caller should do after a line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show the text and read the next line.
    Continue(String),
    /// Show the text and end the session; the book is already saved.
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Exit(text) => text,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit(_))
    }
}

/// Split a raw line into a command word and its arguments.
///
/// The whole line is lower-cased, so names are matched case-insensitively.
/// A blank line gives an empty command.
///
/// ```
/// use contact_book::commands::parse_input;
///
/// let (command, args) = parse_input("  ADD John 1234567890 ");
/// assert_eq!(command, "add");
/// assert_eq!(args, vec!["john", "1234567890"]);
/// ```
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let line = line.to_lowercase();
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return (String::new(), Vec::new());
    };

    (command.to_string(), words.map(str::to_string).collect())
}

/// An interactive session over one address book.
pub struct Session<S, C> {
    dispatcher: Dispatcher<S, C>,
}

impl<S: Storage, C: Clock> Session<S, C> {
    pub fn new(dispatcher: Dispatcher<S, C>) -> Self {
        Self { dispatcher }
    }

    /// Handle one line of user input.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if saving the book fails.
    pub fn handle_line(&mut self, line: &str) -> StorageResult<Reply> {
        let (command, args) = parse_input(line);

        match command.as_str() {
            "" => Ok(Reply::Continue(EMPTY_INPUT.to_string())),
            "hello" => Ok(Reply::Continue(GREETING.to_string())),
            "close" | "exit" => {
                self.close()?;
                Ok(Reply::Exit(GOODBYE.to_string()))
            }
            _ => self.dispatcher.dispatch(&command, &args).map(Reply::Continue),
        }
    }

    /// Save the book one last time.
    pub fn close(&mut self) -> StorageResult<()> {
        self.dispatcher.save()?;
        info!("Session closed with {} contacts", self.dispatcher.book().len());
        Ok(())
    }

    pub fn dispatcher(&self) -> &Dispatcher<S, C> {
        &self.dispatcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_blank() {
        assert_eq!(parse_input(""), (String::new(), Vec::new()));
        assert_eq!(parse_input("   \t "), (String::new(), Vec::new()));
    }

    #[test]
    fn test_parse_input_lowercases_whole_line() {
        let (command, args) = parse_input("Add-Birthday Ann 01.02.1990");
        assert_eq!(command, "add-birthday");
        assert_eq!(args, vec!["ann".to_string(), "01.02.1990".to_string()]);
    }

    #[test]
    fn test_parse_input_collapses_whitespace() {
        let (command, args) = parse_input("change   bob\t1111111111    2222222222");
        assert_eq!(command, "change");
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn test_reply_accessors() {
        let reply = Reply::Exit("Good bye!".to_string());
        assert!(reply.is_exit());
        assert_eq!(reply.text(), "Good bye!");
        assert!(!Reply::Continue(String::new()).is_exit());
    }
}
