mod command;
mod config;
mod logger;
mod repl;
mod session;

use config::Config;
use log::info;
use repl::Repl;

fn main() -> anyhow::Result<()> {
    let config = Config::load();
    logger::init_logger(&config.log_level, config.log_file.as_deref())?;
    info!("starting with the {} selected", config.structure);

    let mut repl = Repl::new(&config)?;
    repl.run();

    Ok(())
}
