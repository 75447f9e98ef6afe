use std::env;
use std::path::PathBuf;

use clap::Parser;

use crate::command::Structure;

/// Start-up options for the `llist` playground. Every flag can also come from
/// the environment or a `.env` file in the working directory.
#[derive(Debug, Parser)]
#[command(name = "llist", version, about = "Interactive playground for linked lists and stacks")]
pub struct Config {
    /// File used to keep command history between sessions
    #[arg(long, env = "LLIST_HISTORY")]
    pub history_file: Option<PathBuf>,

    /// One of trace, debug, info, warn, error, off
    #[arg(long, env = "LLIST_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Also append log records to this file
    #[arg(long, env = "LLIST_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Structure that commands operate on at start-up
    #[arg(long, value_enum, default_value_t = Structure::List)]
    pub structure: Structure,
}

impl Config {
    pub fn load() -> Config {
        dotenvy::dotenv().ok();
        Config::parse()
    }

    /// Explicit history file, else `~/.llist_history`, else no history.
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".llist_history")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "llist",
            "--structure",
            "dlist",
            "--log-level",
            "debug",
            "--history-file",
            "/tmp/llist_history",
        ])
        .unwrap();
        assert_eq!(config.structure, Structure::Dlist);
        assert_eq!(config.log_level, "debug");
        assert_eq!(
            config.history_path(),
            Some(PathBuf::from("/tmp/llist_history"))
        );
    }

    #[test]
    fn unknown_structure_is_rejected() {
        assert!(Config::try_parse_from(["llist", "--structure", "tree"]).is_err());
    }
}
