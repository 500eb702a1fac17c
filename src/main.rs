#[macro_use] mod core;

mod audit;
mod backuping;
mod cli;
mod config;
mod copier;
mod retention;
mod storage;
mod util;

use std::process;

use log::error;

use crate::config::Config;
use crate::copier::ScriptCopier;

fn main() {
    let mut parser = cli::Parser::new();

    let global = parser.parse_global().unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
    });

    if let Err(err) = easy_logging::init(module_path!().split("::").next().unwrap(), global.log_level) {
        eprintln!("Failed to initialize the logging: {}.", err);
        process::exit(1);
    }

    let command = parser.parse().unwrap_or_else(|err| {
        error!("{}.", err);
        process::exit(1);
    });

    let config = Config::new(command);
    let copier = ScriptCopier::new(&config.copy_script);

    // The backup process reports its errors itself - to the operator and to the operational log.
    if backuping::backup(&config, &copier).is_err() {
        process::exit(1);
    }
}
