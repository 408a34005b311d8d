// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A small REPL on top of [`r3bl_liner::Liner`].
//!
//! ```text
//! cargo run --example liner_repl -- --multi-line --log-file /tmp/liner_log.txt
//! ```
//!
//! Type `help` for the commands. `Tab` completes them, `Ctrl+R` searches what was
//! typed before, and `Ctrl+D` on an empty line quits.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive demo of the r3bl_liner line editor")]
struct Cli {
    #[arg(long = "multi-line", short = 'm', help = "Wrap long lines instead of scrolling")]
    multi_line: bool,
    #[arg(long = "ctrl-c-aborts", short = 'c', help = "Ctrl+C quits instead of clearing")]
    ctrl_c_aborts: bool,
    #[arg(long = "no-beep", help = "Never ring the bell")]
    no_beep: bool,
    #[arg(long = "log-file", short = 'l', help = "Write debug logs to this file")]
    log_file: Option<String>,
    #[arg(long = "password", short = 'p', help = "Ask for a password before starting")]
    password: bool,
}

#[cfg(unix)]
fn main() -> miette::Result<()> { repl::run(&Cli::parse()) }

#[cfg(not(unix))]
fn main() {
    let _cli = Cli::parse();
    eprintln!("liner_repl needs a Unix terminal.");
}

#[cfg(unix)]
mod repl {
    use std::{io::stdout, str::FromStr};

    use r3bl_liner::{AnsiOutput, CrosstermGeometry, History, Liner, LinerConfig,
                     LinerError, RawModeGuard, TerminalDevices, TracingConfig, TtyInput,
                     WordCompleter, try_initialize_logging_global};
    use strum::IntoEnumIterator;
    use strum_macros::{Display, EnumIter, EnumString};

    use super::Cli;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, Display)]
    #[strum(serialize_all = "lowercase")]
    enum Command {
        #[strum(ascii_case_insensitive)]
        Help,
        #[strum(ascii_case_insensitive)]
        History,
        #[strum(ascii_case_insensitive)]
        Clear,
        #[strum(ascii_case_insensitive)]
        Exit,
    }

    enum Prompted {
        Line(String),
        Quit,
    }

    pub fn run(cli: &Cli) -> miette::Result<()> {
        if let Some(log_file) = &cli.log_file {
            try_initialize_logging_global(TracingConfig::new_file(Some(log_file.clone())))?;
        }

        let config = LinerConfig::default()
            .with_multi_line(cli.multi_line)
            .with_ctrl_c_aborts(cli.ctrl_c_aborts)
            .with_beep_enabled(!cli.no_beep);
        let mut liner = Liner::new(config);
        liner.set_completer(WordCompleter::new(Command::iter().map(|it| it.to_string())));

        if cli.password {
            match read_password(&mut liner)? {
                Prompted::Line(secret) => {
                    println!("Read {} characters.", secret.chars().count());
                }
                Prompted::Quit => return Ok(()),
            }
        }

        let mut history = History::default();
        println!("Commands: {}", command_list());

        loop {
            let line = match read_line(&mut liner, &history)? {
                Prompted::Line(line) => line,
                Prompted::Quit => break,
            };
            tracing::debug!(message = "liner_repl: line", ?line);

            match Command::from_str(line.trim()) {
                Ok(Command::Help) => println!("Commands: {}", command_list()),
                Ok(Command::History) => {
                    for (index, entry) in history.entries().iter().enumerate() {
                        println!("{index:>4}  {entry}");
                    }
                }
                Ok(Command::Clear) => history.clear(),
                Ok(Command::Exit) => break,
                Err(_) if line.trim().is_empty() => {}
                Err(_) => println!("You typed: {line}"),
            }
            history.append(line);
        }

        println!("Goodbye.");
        Ok(())
    }

    fn command_list() -> String {
        Command::iter()
            .map(|it| it.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn read_line(liner: &mut Liner, history: &History) -> miette::Result<Prompted> {
        let result = {
            let _raw_mode = RawModeGuard::try_new()?;
            let mut input = TtyInput::try_new()?;
            let mut output = AnsiOutput::new(stdout());
            let mut devices = TerminalDevices {
                input: &mut input,
                output: &mut output,
                geometry: &CrosstermGeometry,
            };
            liner.prompt(&mut devices, "liner> ", history.entries())
        };
        into_prompted(result)
    }

    fn read_password(liner: &mut Liner) -> miette::Result<Prompted> {
        let result = {
            let _raw_mode = RawModeGuard::try_new()?;
            let mut input = TtyInput::try_new()?;
            let mut output = AnsiOutput::new(stdout());
            let mut devices = TerminalDevices {
                input: &mut input,
                output: &mut output,
                geometry: &CrosstermGeometry,
            };
            liner.prompt_password(&mut devices, "password: ")
        };
        into_prompted(result)
    }

    fn into_prompted(result: Result<String, LinerError>) -> miette::Result<Prompted> {
        match result {
            Ok(line) => Ok(Prompted::Line(line)),
            Err(LinerError::Eof | LinerError::Aborted) => Ok(Prompted::Quit),
            Err(error) => Err(error.into()),
        }
    }
}
