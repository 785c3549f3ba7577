//! Interactive read-print loop.
//!
//! A [`Session`] owns the address book for the lifetime of the process. It
//! reads one command per line, runs it to completion, writes the reply and
//! only then reads the next line. The book is loaded once when the session
//! starts and saved on `exit`/`close`, on `save`, and at end of input.

pub mod clock;
pub mod handlers;
pub mod parser;

pub use clock::{Clock, FixedClock, SystemClock};
pub use parser::{parse_input, Command};

use crate::error::{ContactResult, StorageResult};
use crate::models::ContactDirectory;
use crate::repositories::DirectoryRepository;
use handlers::respond;
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next command.
    Continue(String),
    /// Print the text and stop.
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Exit(text) => text,
        }
    }
}

/// One interactive session over an address book.
pub struct Session {
    book: ContactDirectory,
    repository: Arc<dyn DirectoryRepository>,
    clock: Arc<dyn Clock>,
}

impl Session {
    /// Start a session with the book currently stored in `repository`.
    ///
    /// An unreadable store starts an empty book rather than failing.
    pub async fn start(repository: Arc<dyn DirectoryRepository>, clock: Arc<dyn Clock>) -> Self {
        let book = repository.load_or_empty().await;
        info!("Session started with {} contacts", book.len());
        Self {
            book,
            repository,
            clock,
        }
    }

    pub fn book(&self) -> &ContactDirectory {
        &self.book
    }

    /// Write the whole book to the repository.
    pub async fn save(&self) -> StorageResult<()> {
        self.repository.save(&self.book).await
    }

    /// Run a single command line.
    ///
    /// Command failures are part of the reply text. `exit` is the one command
    /// whose reply does not depend on the save: the caller gets the save error
    /// through [`Session::finish`].
    pub async fn execute(&mut self, line: &str) -> Reply {
        let (command, args) = parse_input(line);
        debug!(?command, args = args.len(), "dispatching command");

        let text = match command {
            Command::Hello => handlers::GREETING.to_string(),
            Command::Add => respond(handlers::add_contact(&args, &mut self.book)),
            Command::Change => respond(handlers::change_contact(&args, &mut self.book)),
            Command::Phone => respond(handlers::show_phone(&args, &self.book)),
            Command::All => handlers::show_all(&self.book),
            Command::AddBirthday => respond(handlers::add_birthday(&args, &mut self.book)),
            Command::ShowBirthday => respond(handlers::show_birthday(&args, &self.book)),
            Command::Birthdays => handlers::birthdays(&self.book, self.clock.today()),
            Command::RemovePhone => respond(handlers::remove_phone(&args, &mut self.book)),
            Command::Delete => respond(handlers::delete_contact(&args, &mut self.book)),
            Command::Save => respond(self.save_command().await),
            Command::Exit => return Reply::Exit(handlers::FAREWELL.to_string()),
            Command::Unknown => handlers::INVALID_COMMAND.to_string(),
        };
        Reply::Continue(text)
    }

    async fn save_command(&self) -> ContactResult<String> {
        self.save().await?;
        Ok("Contacts saved.".to_string())
    }

    /// Persist the book at the end of the session.
    pub async fn finish(&self) -> StorageResult<()> {
        self.save().await.map_err(|e| {
            error!("Failed to save address book: {}", e);
            e
        })
    }

    /// Drive the session until `exit`/`close` or end of input.
    ///
    /// End of input is treated like `exit`. The farewell is written even when
    /// the final save fails; the save error is then returned. Input that is not
    /// valid UTF-8 is decoded lossily and handled like any other line. If the
    /// input or output stream itself fails, the book is saved before the I/O
    /// error is returned.
    pub async fn run<R, W>(&mut self, mut input: R, mut output: W) -> StorageResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let farewell = match self.converse(&mut input, &mut output).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Session stream failed: {}", e);
                // The stream error is what the caller sees; finish() logs its own.
                let _ = self.finish().await;
                return Err(e);
            }
        };

        let saved = self.finish().await;
        write_line(&mut output, &farewell).await?;
        saved
    }

    /// Prompt, read and reply until the session should end, returning the
    /// farewell text.
    async fn converse<R, W>(&mut self, input: &mut R, output: &mut W) -> StorageResult<String>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();
        write_line(output, WELCOME).await?;

        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            let reply = match read_line(input, &mut buf).await? {
                Some(line) => self.execute(&line).await,
                None => {
                    debug!("End of input, closing session");
                    Reply::Exit(handlers::FAREWELL.to_string())
                }
            };

            match reply {
                Reply::Continue(text) => write_line(output, &text).await?,
                Reply::Exit(text) => return Ok(text),
            }
        }
    }
}

/// Next input line without its line ending, or `None` at end of input.
async fn read_line<R: AsyncBufRead + Unpin>(
    input: &mut R,
    buf: &mut Vec<u8>,
) -> io::Result<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf).await? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> StorageResult<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
