// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Whole prompt sessions driven through the public API, with mocked stdin, stdout and
//! terminal.

use pretty_assertions::assert_eq;
use r3bl_line_editor::{History, PromptEnvironment, PromptOptions, PromptOutcome, StdoutMock,
                       TerminalMock, gen_input_stream_from_str, prompt};

fn env_with_input(text: &str, columns: u16) -> PromptEnvironment<StdoutMock, TerminalMock> {
    PromptEnvironment::new(
        gen_input_stream_from_str(text),
        StdoutMock::new(),
        TerminalMock::new(columns),
    )
}

async fn run(text: &str) -> (PromptOutcome, String) {
    let mut env = env_with_input(text, 80);
    let outcome = prompt(&mut env, PromptOptions::default()).await.unwrap();
    (outcome, env.output.get_copy_of_buffer_as_string())
}

#[tokio::test]
async fn test_commit_restores_terminal() {
    let mut env = env_with_input("hello\r", 80);
    let outcome = prompt(&mut env, PromptOptions::default()).await.unwrap();

    assert_eq!(outcome, PromptOutcome::Commit("hello".into()));
    assert!(!env.terminal.is_raw_mode());
    assert_eq!(env.terminal.raw_mode_toggle_count(), 2);

    let output = env.output.get_copy_of_buffer_as_string();
    assert!(output.starts_with("\x1b[?2004h"));
    assert!(output.ends_with("\x1b[?2004l"));
}

#[tokio::test]
async fn test_outcomes() {
    assert_eq!(run("hi\x03").await.0, PromptOutcome::Abort("hi".into()));
    assert_eq!(run("hi").await.0, PromptOutcome::Cancel);
    assert_eq!(run("\x04").await.0, PromptOutcome::Cancel);
    // ^D with text deletes forward instead.
    assert_eq!(run("ab\x01\x04\r").await.0, PromptOutcome::Commit("b".into()));
    assert_eq!(run("\n").await.0, PromptOutcome::Commit(String::new()));
}

#[tokio::test]
async fn test_editing_keys() {
    // Left arrow, backspace, then Delete key at the end is a no-op.
    assert_eq!(run("abc\x1b[D\x7f\x1b[F\x1b[3~\r").await.0, PromptOutcome::Commit("ac".into()));
    // C-Left, then cut to the end.
    assert_eq!(run("foo bar\x1b[1;5D\x0b\r").await.0, PromptOutcome::Commit("foo ".into()));
    // ^W twice, then undo once.
    assert_eq!(run("a b c\x17\x17\x1f\r").await.0, PromptOutcome::Commit("a b ".into()));
    // Shift-Tab isn't bound, nothing of it is typed.
    assert_eq!(run("x\x1b[Zy\r").await.0, PromptOutcome::Commit("xy".into()));
}

#[tokio::test]
async fn test_grapheme_clusters_are_deleted_whole() {
    assert_eq!(
        run("ok👍🏽e\u{301}\x7f\x7f\r").await.0,
        PromptOutcome::Commit("ok".into())
    );
}

#[tokio::test]
async fn test_sessions_share_the_input_stream() {
    let mut env = env_with_input("one\rtwo\r", 80);
    let mut history = History::new();

    for expected in ["one", "two"] {
        let options = PromptOptions {
            history: history.to_vec(),
            ..PromptOptions::default()
        };
        let outcome = prompt(&mut env, options).await.unwrap();
        assert_eq!(outcome, PromptOutcome::Commit(expected.into()));
        history.add_entry(expected);
    }

    let outcome = prompt(&mut env, PromptOptions::default()).await.unwrap();
    assert_eq!(outcome, PromptOutcome::Cancel);
    assert_eq!(env.terminal.raw_mode_toggle_count(), 6);
    assert_eq!(history.to_vec(), vec!["one".to_string(), "two".to_string()]);
}

#[tokio::test]
async fn test_history_keeps_draft() {
    let mut env = env_with_input("dra\x10\x10\x0e\x0eft\r", 80);
    let options = PromptOptions {
        history: vec!["first".into(), "second".into()],
        ..PromptOptions::default()
    };
    let outcome = prompt(&mut env, options).await.unwrap();
    assert_eq!(outcome, PromptOutcome::Commit("draft".into()));

    let shown = env.output.get_copy_of_buffer_as_string_strip_ansi();
    assert!(shown.contains("> second"));
    assert!(shown.contains("> first"));
}

#[tokio::test]
async fn test_bracketed_paste() {
    let (outcome, output) = run("[\x1b[200~a\tb\x1b[201~]\r").await;
    assert_eq!(outcome, PromptOutcome::Commit("[a\tb]".into()));
    // The tab is shown escaped, never sent raw.
    assert!(output.contains("\x1b[G> [a\x1b[7m^I\x1b[mb]\x1b[J"));
}

#[tokio::test]
async fn test_wrapped_line_final_frame() {
    let mut env = env_with_input("abcdefghijkl\r", 10);
    let outcome = prompt(&mut env, PromptOptions::default()).await.unwrap();
    assert_eq!(outcome, PromptOutcome::Commit("abcdefghijkl".into()));
    assert!(
        env.output
            .get_copy_of_buffer_as_string()
            .ends_with("\x1b[F> abcdefghijkl\x1b[J\r\n\x1b[?2004l")
    );
}

#[tokio::test]
async fn test_invalid_utf8_becomes_replacement_char() {
    let mut env = PromptEnvironment::new(
        r3bl_line_editor::gen_input_stream(vec![Ok(b'a'), Ok(0xff), Ok(b'b'), Ok(b'\r')]),
        StdoutMock::new(),
        TerminalMock::new(80),
    );
    let outcome = prompt(&mut env, PromptOptions::default()).await.unwrap();
    assert_eq!(outcome, PromptOutcome::Commit("a\u{fffd}b".into()));
}
