use std::path::PathBuf;

use log::{error, warn};
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::Editor;

use crate::command::Command;
use crate::config::Config;
use crate::session::Session;

pub struct Repl {
    history_path: Option<PathBuf>,
    readline: Editor<(), FileHistory>,
    session: Session,
}

impl Repl {
    pub fn new(config: &Config) -> anyhow::Result<Repl> {
        let history_path = config.history_path();
        let mut readline = Editor::<(), FileHistory>::new()?;
        // Attempt to load history from a previous session if it exists
        if let Some(path) = &history_path {
            let _ = readline.load_history(path);
        }

        Ok(Repl {
            history_path,
            readline,
            session: Session::new(config.structure),
        })
    }

    pub fn run(&mut self) {
        loop {
            match self.get_next_command() {
                Command::Quit => return,
                command => match self.session.execute(command) {
                    Ok(output) => {
                        if !output.is_empty() {
                            println!("{}", output);
                        }
                    }
                    Err(err) => println!("Error: {}", err),
                },
            }
        }
    }

    /// Prompts until the user enters a command that parses. Ctrl-C re-prompts
    /// and Ctrl-D quits.
    fn get_next_command(&mut self) -> Command {
        loop {
            let prompt = format!("(llist {}) ", self.session.active());
            match self.readline.readline(&prompt) {
                Err(ReadlineError::Interrupted) => {
                    println!("Type \"quit\" to exit");
                }
                Err(ReadlineError::Eof) => {
                    return Command::Quit;
                }
                Err(err) => {
                    error!("unexpected I/O error reading input: {}", err);
                    return Command::Quit;
                }
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let _ = self.readline.add_history_entry(line.as_str());
                    if let Some(path) = &self.history_path {
                        if let Err(err) = self.readline.save_history(path) {
                            warn!("failed to save history file at {}: {}", path.display(), err);
                        }
                    }
                    let tokens: Vec<&str> = line.split_whitespace().collect();
                    if let Some(cmd) = Command::from_tokens(&tokens) {
                        return cmd;
                    } else {
                        println!("Unrecognized command. Type \"help\" for a list.");
                    }
                }
            }
        }
    }
}
