// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drive [`Liner`] through its public API only, with the byte stream adapters a real
//! caller would use for piped input.

use std::io::Cursor;

use pretty_assertions::assert_eq;
use r3bl_liner::{AnsiOutput, ColumnPositioning, FixedGeometry, History, Liner,
                 LinerConfig, LinerError, ReaderInput, TerminalDevices, TerminalSupport,
                 WordCompleter,
                 test_fixtures::{OutputMock, ScriptedInput}};
use test_case::test_case;

const COLUMNS: usize = 40;

fn interactive_liner() -> Liner {
    Liner::with_support(LinerConfig::default(), TerminalSupport::interactive())
}

fn prompt_once(liner: &mut Liner, script: &str, history: &History) -> Result<String, LinerError> {
    let mut input = ScriptedInput::from_text(script);
    let mut output = OutputMock::new(COLUMNS);
    let geometry = FixedGeometry(COLUMNS);
    let mut devices = TerminalDevices {
        input: &mut input,
        output: &mut output,
        geometry: &geometry,
    };
    liner.prompt(&mut devices, "$ ", history.entries())
}

#[test]
fn test_bytes_in_escape_sequences_out() {
    let mut liner = interactive_liner();
    let mut input = ReaderInput::new(Cursor::new("hi\x1b[D!\r".as_bytes()));
    let mut output = AnsiOutput::with_positioning(vec![], ColumnPositioning::Absolute);
    let geometry = FixedGeometry(COLUMNS);

    let result = {
        let mut devices = TerminalDevices {
            input: &mut input,
            output: &mut output,
            geometry: &geometry,
        };
        liner.prompt(&mut devices, "> ", &[])
    };

    assert_eq!(result.unwrap(), "h!i");
    let written = String::from_utf8(output.into_inner()).unwrap();
    assert!(written.starts_with("\x1b[1G> \x1b[K\x1b[3Ghi"));
    assert!(written.ends_with("\x1b[1G> h!i\x1b[K\x1b[5G\r\n"));
}

#[test]
fn test_repl_session_with_history_and_kill_ring() {
    let mut liner = interactive_liner();
    let mut history = History::default();

    for script in ["cargo build\r", "cargo test --all\r", "git status\r"] {
        let line = prompt_once(&mut liner, script, &history).unwrap();
        history.append(line);
    }
    assert_eq!(history.len(), 3);

    // Up arrow with "cargo" typed only visits the cargo entries.
    let line = prompt_once(&mut liner, "cargo\x1b[A\x1b[A\r", &history).unwrap();
    assert_eq!(line, "cargo build");

    // Ctrl+R finds the newest entry containing "test", then Ctrl+U kills it all.
    let line = prompt_once(&mut liner, "\x12test\x05\x15\r", &history).unwrap();
    assert_eq!(line, "");

    // The kill survives into the next prompt.
    let line = prompt_once(&mut liner, "\x19\r", &history).unwrap();
    assert_eq!(line, "cargo test --all");
}

#[test]
fn test_completer_is_shared_across_prompts() {
    let mut liner = interactive_liner();
    liner.set_completer(WordCompleter::new(["checkout", "cherry-pick", "commit"]));
    let history = History::default();

    assert_eq!(prompt_once(&mut liner, "git co\t\r", &history).unwrap(), "git commit");
    assert_eq!(
        prompt_once(&mut liner, "git ch\t\t\r", &history).unwrap(),
        "git cherry-pick"
    );

    liner.clear_completer();
    assert_eq!(prompt_once(&mut liner, "git co\t\r", &history).unwrap(), "git co");
}

#[test_case(false, "Ok" ; "ctrl c clears the line")]
#[test_case(true, "Aborted" ; "ctrl c aborts")]
fn test_ctrl_c(ctrl_c_aborts: bool, expected: &str) {
    let mut liner = Liner::with_support(
        LinerConfig::default().with_ctrl_c_aborts(ctrl_c_aborts),
        TerminalSupport::interactive(),
    );
    let outcome = match prompt_once(&mut liner, "oops\x03fine\r", &History::default()) {
        Ok(line) => {
            assert_eq!(line, "fine");
            "Ok"
        }
        Err(LinerError::Aborted) => "Aborted",
        Err(error) => panic!("unexpected error: {error}"),
    };
    assert_eq!(outcome, expected);
}

#[test]
fn test_piped_input_reads_plain_lines() {
    let liner = interactive_liner();
    let mut input = ReaderInput::new(Cursor::new("first\r\nsecond\n".as_bytes()));
    let mut output = OutputMock::new(COLUMNS);
    let geometry = FixedGeometry(COLUMNS);
    let mut devices = TerminalDevices {
        input: &mut input,
        output: &mut output,
        geometry: &geometry,
    };

    assert_eq!(liner.prompt_unsupported(&mut devices, "? ").unwrap(), "first");
    assert_eq!(liner.prompt_unsupported(&mut devices, "? ").unwrap(), "second");
    assert!(matches!(
        liner.prompt_unsupported(&mut devices, "? "),
        Err(LinerError::Eof)
    ));
}

#[test]
fn test_narrow_terminal_is_reported_not_drawn() {
    let mut liner = interactive_liner();
    let mut input = ScriptedInput::from_text("x\r");
    let mut output = OutputMock::new(8);
    let geometry = FixedGeometry(8);
    let result = {
        let mut devices = TerminalDevices {
            input: &mut input,
            output: &mut output,
            geometry: &geometry,
        };
        liner.prompt(&mut devices, "$ ", &[])
    };

    assert!(matches!(
        result,
        Err(LinerError::TerminalTooNarrow {
            columns: 8,
            required: 12
        })
    ));
    assert!(output.ops().is_empty());
    assert_eq!(input.remaining(), 2);
}
