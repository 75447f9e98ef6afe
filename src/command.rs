use std::fmt;

use clap::ValueEnum;

/// The structure a session's commands are applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Structure {
    /// Singly-linked list
    List,
    /// Doubly-linked list
    Dlist,
    /// Stack over a singly-linked list
    Stack,
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Structure::List => "list",
            Structure::Dlist => "dlist",
            Structure::Stack => "stack",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Use(Structure),
    Head(i64),
    Tail(i64),
    Insert(usize, i64),
    Delete(usize),
    Get(usize),
    Reverse,
    ReverseRecursive,
    ReverseByStack,
    ReversePrint,
    Print,
    Len,
    Empty,
    Push(i64),
    Pop,
    Top,
}

impl Command {
    /// Parses a whitespace-split input line. Returns `None` for unknown
    /// commands, wrong arity, and arguments that are not numbers.
    pub fn from_tokens(tokens: &[&str]) -> Option<Command> {
        let command = match tokens {
            ["q" | "quit"] => Command::Quit,
            ["h" | "help"] => Command::Help,
            ["use", name] => Command::Use(Structure::from_str(name, true).ok()?),
            ["head", value] => Command::Head(value.parse().ok()?),
            ["tail", value] => Command::Tail(value.parse().ok()?),
            ["i" | "insert", pos, value] => Command::Insert(pos.parse().ok()?, value.parse().ok()?),
            ["d" | "delete", pos] => Command::Delete(pos.parse().ok()?),
            ["get", pos] => Command::Get(pos.parse().ok()?),
            ["reverse"] => Command::Reverse,
            ["rreverse"] => Command::ReverseRecursive,
            ["sreverse"] => Command::ReverseByStack,
            ["rprint"] => Command::ReversePrint,
            ["p" | "print"] => Command::Print,
            ["len"] => Command::Len,
            ["empty"] => Command::Empty,
            ["push", value] => Command::Push(value.parse().ok()?),
            ["pop"] => Command::Pop,
            ["top"] => Command::Top,
            _ => return None,
        };
        Some(command)
    }

    /// Short name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::Help => "help",
            Command::Use(_) => "use",
            Command::Head(_) => "head",
            Command::Tail(_) => "tail",
            Command::Insert(..) => "insert",
            Command::Delete(_) => "delete",
            Command::Get(_) => "get",
            Command::Reverse => "reverse",
            Command::ReverseRecursive => "rreverse",
            Command::ReverseByStack => "sreverse",
            Command::ReversePrint => "rprint",
            Command::Print => "print",
            Command::Len => "len",
            Command::Empty => "empty",
            Command::Push(_) => "push",
            Command::Pop => "pop",
            Command::Top => "top",
        }
    }
}

pub const HELP: &str = "\
use <list|dlist|stack>   switch the structure commands apply to
head <v>                 insert v at the front (list, dlist)
tail <v>                 insert v at the back (dlist)
insert <pos> <v>         insert v so it lands at 1-based pos (list, dlist)
delete <pos>             remove the element at pos (list, dlist)
get <pos>                show the element at pos (list, dlist)
reverse                  reverse in place, iteratively (list, dlist)
rreverse                 reverse in place, recursively (list, dlist)
sreverse                 reverse in place through a stack (list)
rprint                   show the elements last to first (list, dlist)
push <v> | pop | top     stack operations (stack)
print | len | empty      inspect the current structure
quit                     leave";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Option<Command> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        Command::from_tokens(&tokens)
    }

    #[test]
    fn parses_positional_commands() {
        assert_eq!(parse("insert 2 9"), Some(Command::Insert(2, 9)));
        assert_eq!(parse("i 1 -4"), Some(Command::Insert(1, -4)));
        assert_eq!(parse("delete 3"), Some(Command::Delete(3)));
        assert_eq!(parse("get 0"), Some(Command::Get(0)));
    }

    #[test]
    fn parses_structure_names() {
        assert_eq!(parse("use dlist"), Some(Command::Use(Structure::Dlist)));
        assert_eq!(parse("use STACK"), Some(Command::Use(Structure::Stack)));
        assert_eq!(parse("use tree"), None);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(parse("insert 1"), None);
        assert_eq!(parse("insert -1 3"), None);
        assert_eq!(parse("push x"), None);
        assert_eq!(parse("pop 1"), None);
        assert_eq!(parse("frobnicate"), None);
    }

    #[test]
    fn structure_names_round_trip_through_display() {
        for structure in [Structure::List, Structure::Dlist, Structure::Stack] {
            assert_eq!(
                Structure::from_str(&structure.to_string(), false),
                Ok(structure)
            );
        }
    }
}
