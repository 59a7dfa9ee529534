//! The interactive session: read a command, run it, print the reply.

use crate::commands::{execute, parse_input, BirthdayWindow, CommandError, Reply};
use crate::directory::{AddressBook, DEFAULT_LOOKAHEAD_DAYS};
use crate::error::StorageResult;
use crate::storage::BookStore;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

const WELCOME: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";

/// Source of "today" for the birthday report.
pub type Clock = Box<dyn Fn() -> NaiveDate>;

/// One assistant session over a loaded address book.
pub struct Assistant<S: BookStore> {
    book: AddressBook,
    store: S,
    lookahead_days: u32,
    clock: Clock,
}

impl<S: BookStore> Assistant<S> {
    /// Load the book from `store` and start a session.
    pub fn open(store: S) -> StorageResult<Self> {
        let book = store.load()?;
        Ok(Self {
            book,
            store,
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
            clock: Box::new(|| chrono::Local::now().date_naive()),
        })
    }

    pub fn with_lookahead_days(mut self, days: u32) -> Self {
        self.lookahead_days = days;
        self
    }

    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDate + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Execute one input line. Blank lines yield `None`.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let input = parse_input(line)?;
        let window = BirthdayWindow {
            today: (self.clock)(),
            days: self.lookahead_days,
        };
        Some(execute(&input, &mut self.book, window))
    }

    /// Write the book back to the store.
    pub fn save(&self) -> StorageResult<()> {
        self.store.save(&self.book)
    }

    /// Run the read-eval loop until `close`/`exit` or end of input, then save.
    ///
    /// Only failures to read or write the terminal are returned; a failed
    /// save is reported to the user.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", WELCOME)?;

        let mut line = String::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::info!("End of input, closing session");
                writeln!(output)?;
                break;
            }

            let Some(reply) = self.handle_line(&line) else {
                continue;
            };
            writeln!(output, "{}", reply)?;
            if reply.is_exit() {
                break;
            }
        }

        if let Err(e) = self.save() {
            tracing::error!("Failed to save address book: {}", e);
            let reply = Reply::Failure(CommandError::Internal(format!(
                "failed to save address book: {}",
                e
            )));
            writeln!(output, "{}", reply)?;
        }
        Ok(())
    }
}
