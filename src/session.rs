use std::fmt::Display;

use linked_list::{DoublyLinkedList, LinkedList, ListError, Sequence, Stack, StackOps};
use log::info;
use thiserror::Error;

use crate::command::{Command, Structure, HELP};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    List(#[from] ListError),

    #[error("`{command}` is not available for a {structure}")]
    Unsupported {
        command: &'static str,
        structure: Structure,
    },
}

/// The three structures a REPL user can play with, and which one is active.
pub struct Session {
    active: Structure,
    list: LinkedList<i64>,
    dlist: DoublyLinkedList<i64>,
    stack: Stack<i64>,
}

impl Session {
    pub fn new(active: Structure) -> Session {
        Session {
            active,
            list: LinkedList::new(),
            dlist: DoublyLinkedList::new(),
            stack: Stack::new(),
        }
    }

    pub fn active(&self) -> Structure {
        self.active
    }

    /// Runs one command and returns the text to show. Mutations answer with
    /// the resulting contents.
    pub fn execute(&mut self, command: Command) -> Result<String, SessionError> {
        match command {
            Command::Help => return Ok(HELP.to_string()),
            Command::Use(structure) => {
                info!("switching from {} to {}", self.active, structure);
                self.active = structure;
                return Ok(format!("using {}", structure));
            }
            _ => {}
        }

        let structure = self.active;
        match structure {
            Structure::List => match command {
                Command::ReverseByStack => {
                    self.list.reverse_by_stack();
                    Ok(self.list.to_string())
                }
                _ => run_sequence(&mut self.list, command, structure),
            },
            Structure::Dlist => match command {
                Command::Tail(value) => {
                    self.dlist.insert_tail(value);
                    Ok(self.dlist.to_string())
                }
                _ => run_sequence(&mut self.dlist, command, structure),
            },
            Structure::Stack => run_stack(&mut self.stack, command),
        }
    }
}

/// Commands shared by both list variants.
fn run_sequence<S>(seq: &mut S, command: Command, structure: Structure) -> Result<String, SessionError>
where
    S: Sequence<i64> + Display,
{
    match command {
        Command::Head(value) => seq.insert_head(value),
        Command::Insert(pos, value) => seq.insert(pos, value)?,
        Command::Delete(pos) => return Ok(format!("removed {}", seq.delete(pos)?)),
        Command::Get(pos) => return Ok(seq.get(pos)?.to_string()),
        Command::Reverse => seq.reverse(),
        Command::ReverseRecursive => seq.reverse_recursive()?,
        Command::ReversePrint => return Ok(seq.reverse_print()),
        Command::Print => {}
        Command::Len => return Ok(seq.len().to_string()),
        Command::Empty => return Ok(seq.is_empty().to_string()),
        _ => {
            return Err(SessionError::Unsupported {
                command: command.name(),
                structure,
            })
        }
    }
    Ok(seq.to_string())
}

fn run_stack(stack: &mut Stack<i64>, command: Command) -> Result<String, SessionError> {
    match command {
        Command::Push(value) => {
            stack.push(value);
            Ok(stack.to_string())
        }
        Command::Pop => Ok(format!("popped {}", stack.pop()?)),
        Command::Top => Ok(stack.top()?.to_string()),
        Command::Print => Ok(stack.to_string()),
        Command::Len => Ok(stack.len().to_string()),
        Command::Empty => Ok(stack.is_empty().to_string()),
        _ => Err(SessionError::Unsupported {
            command: command.name(),
            structure: Structure::Stack,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, commands: &[Command]) -> Vec<Result<String, SessionError>> {
        commands.iter().map(|c| session.execute(*c)).collect()
    }

    #[test]
    fn list_walkthrough() {
        let mut session = Session::new(Structure::List);
        let out = run(
            &mut session,
            &[
                Command::Insert(1, 4),
                Command::Insert(2, 5),
                Command::Insert(1, 3),
                Command::Insert(2, 9),
                Command::Delete(2),
                Command::Reverse,
                Command::ReversePrint,
            ],
        );
        assert_eq!(out[3], Ok("3 9 4 5".to_string()));
        assert_eq!(out[4], Ok("removed 9".to_string()));
        assert_eq!(out[5], Ok("5 4 3".to_string()));
        assert_eq!(out[6], Ok("3 4 5".to_string()));
    }

    #[test]
    fn list_errors_are_reported() {
        let mut session = Session::new(Structure::List);
        assert_eq!(
            session.execute(Command::Get(0)),
            Err(SessionError::List(ListError::InvalidArgument { pos: 0 }))
        );
        assert_eq!(
            session.execute(Command::Insert(2, 1)),
            Err(SessionError::List(ListError::OutOfRange { pos: 2, len: 0 }))
        );
        assert_eq!(
            session.execute(Command::Tail(1)),
            Err(SessionError::Unsupported {
                command: "tail",
                structure: Structure::List,
            })
        );
    }

    #[test]
    fn dlist_tail_and_reverse() {
        let mut session = Session::new(Structure::Dlist);
        for value in 1..=5 {
            session.execute(Command::Head(value)).unwrap();
        }
        assert_eq!(
            session.execute(Command::Tail(6)),
            Ok("5 4 3 2 1 6".to_string())
        );
        assert_eq!(
            session.execute(Command::ReverseRecursive),
            Ok("6 1 2 3 4 5".to_string())
        );
        assert_eq!(
            session.execute(Command::ReverseByStack),
            Err(SessionError::Unsupported {
                command: "sreverse",
                structure: Structure::Dlist,
            })
        );
    }

    #[test]
    fn stack_commands() {
        let mut session = Session::new(Structure::Stack);
        assert_eq!(
            session.execute(Command::Pop),
            Err(SessionError::List(ListError::EmptyStack))
        );
        session.execute(Command::Push(1)).unwrap();
        session.execute(Command::Push(2)).unwrap();
        assert_eq!(session.execute(Command::Pop), Ok("popped 2".to_string()));
        assert_eq!(session.execute(Command::Top), Ok("1".to_string()));
        assert_eq!(session.execute(Command::Empty), Ok("false".to_string()));
    }

    #[test]
    fn structures_are_independent() {
        let mut session = Session::new(Structure::List);
        session.execute(Command::Head(1)).unwrap();
        assert_eq!(
            session.execute(Command::Use(Structure::Dlist)),
            Ok("using dlist".to_string())
        );
        assert_eq!(session.active(), Structure::Dlist);
        assert_eq!(session.execute(Command::Len), Ok("0".to_string()));
        session.execute(Command::Use(Structure::List)).unwrap();
        assert_eq!(session.execute(Command::Print), Ok("1".to_string()));
    }
}
