//! Interactive read loop.

use std::io;

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use tracing::warn;

use crate::error::Result;
use crate::repl::command::Command;
use crate::repl::session::{ControlFlow, Session};

const PROMPT: &str = "Pokedex > ";

/// Line editor wrapped around a [`Session`].
pub struct Repl {
    session: Session,
    editor: Editor<(), DefaultHistory>,
}

impl Repl {
    pub fn new(session: Session) -> Result<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .auto_add_history(true)
            .build();

        let editor = Editor::with_config(config)?;

        Ok(Self { session, editor })
    }

    /// Reads and executes commands until `exit` or end of input.
    ///
    /// Command failures are reported and the loop keeps going.
    pub async fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();

        loop {
            let line = match self.editor.readline(PROMPT) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    println!("(Interrupted - type exit to quit)");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(e) => return Err(e.into()),
            };

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    eprintln!("{}", e);
                    continue;
                }
            };

            match self.session.execute(command, &mut stdout).await {
                Ok(ControlFlow::Continue) => {}
                Ok(ControlFlow::Exit) => break,
                Err(e) => {
                    warn!("Command failed: {}", e);
                    eprintln!("Error: {}", e);
                }
            }
        }

        Ok(())
    }
}
