use std::path::PathBuf;
use std::process;

use clap::{Arg, ArgAction, ArgMatches, value_parser};
use clap::error::ErrorKind;
use const_format::formatcp;
use indoc::indoc;

use crate::config;
use crate::core::GenericResult;

use super::Command;

pub struct Parser {
    matches: Option<ArgMatches>,
}

pub struct GlobalOptions {
    pub log_level: log::Level,
}

impl Parser {
    pub fn new() -> Parser {
        Parser {matches: None}
    }

    pub fn parse_global(&mut self) -> GenericResult<GlobalOptions> {
        let command = new_command("bkr", "Very simple backup rotation tool")
            .version(env!("CARGO_PKG_VERSION"))
            .help_expected(true)

            .arg(Arg::new("cron")
                .long("cron")
                .action(ArgAction::SetTrue)
                .help("Show only warning and error messages (intended to be used from cron)"))

            .arg(Arg::new("verbose")
                .short('v').long("verbose")
                .conflicts_with("cron")
                .action(ArgAction::Count)
                .help("Set verbosity level"))

            .arg(Arg::new("max_backups")
                .short('m').long("max-backups")
                .value_name("COUNT")
                .value_parser(value_parser!(usize))
                .help(formatcp!("Maximum number of backups to retain [default: {}]",
                                config::DEFAULT_MAX_BACKUPS)))

            .arg(Arg::new("SOURCE_DIR")
                .help("Directory to back up")
                .required(true))

            .arg(Arg::new("BACKUP_DIR")
                .help("Directory to store the backups in")
                .required(true))

            .arg(Arg::new("COPY_SCRIPT")
                .help("Script that copies files from SOURCE_DIR to the new backup folder")
                .required(true));

        let matches = match command.try_get_matches() {
            Ok(matches) => matches,
            Err(err) => {
                let _ = err.print();
                process::exit(match err.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                    _ => 1,
                });
            },
        };

        let log_level = match matches.get_count("verbose") {
            0 => if matches.get_flag("cron") {
                log::Level::Warn
            } else {
                log::Level::Info
            },
            1 => log::Level::Debug,
            2 => log::Level::Trace,
            _ => return Err!("Invalid verbosity level"),
        };

        self.matches.replace(matches);

        Ok(GlobalOptions {log_level})
    }

    pub fn parse(self) -> GenericResult<Command> {
        let matches = self.matches.unwrap();

        Ok(Command {
            source_path: expand_path(matches.get_one::<String>("SOURCE_DIR").unwrap()),
            backup_root: expand_path(matches.get_one::<String>("BACKUP_DIR").unwrap()),
            copy_script: expand_path(matches.get_one::<String>("COPY_SCRIPT").unwrap()),
            max_backups: matches.get_one::<usize>("max_backups").copied()
                .unwrap_or(config::DEFAULT_MAX_BACKUPS),
        })
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

fn new_command(name: &'static str, about: &'static str) -> clap::Command {
    clap::Command::new(name)
        // Default template contains `{bin} {version}` for some reason
        .help_template(indoc!("
            {before-help}{about}

            {usage-heading}
                {usage}

            {all-args}{after-help}\
        "))
        .about(about)
}
