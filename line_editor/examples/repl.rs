// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use crossterm::style::Stylize;
use r3bl_line_editor::{History, PromptEnvironment, PromptOptions, PromptOutcome,
                       TracingConfig, ok, prompt, try_initialize_logging_global};

/// A tiny REPL that echoes each line back, to try out the line editor.
///
/// # Run the binary
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │ > cargo run --example repl -- --log-file edit.log │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// Type `history` to list what was entered so far, `exit` (or `Ctrl+D` on an empty line)
/// to quit. `Ctrl+C` throws the current line away. Run `tail -f edit.log` in another
/// terminal to watch the editor's tracing output.
#[derive(Debug, Parser)]
#[command(bin_name = "repl", about, long_about = None)]
struct CliArgs {
    /// Text shown before the input. ANSI styling is fine.
    #[arg(long, short = 'p', default_value = "repl")]
    prompt: String,

    /// Log to this file.
    #[arg(long, short = 'l')]
    log_file: Option<String>,

    /// Maximum number of history entries to keep.
    #[arg(long, default_value_t = 100)]
    history_size: usize,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli_args = CliArgs::parse();

    if let Some(log_file) = cli_args.log_file {
        try_initialize_logging_global(TracingConfig::new_file(Some(log_file)))?;
    }

    let mut env = PromptEnvironment::stdio();
    let mut history = History::with_max_size(cli_args.history_size);
    let prompt_text = format!("{} ", format!("{}>", cli_args.prompt).green().bold());

    loop {
        let options = PromptOptions {
            prompt: prompt_text.clone(),
            history: history.to_vec(),
            ..PromptOptions::default()
        };

        match prompt(&mut env, options).await? {
            PromptOutcome::Commit(line) => match line.trim() {
                "exit" => break,
                "history" => {
                    for (index, entry) in history.entries().iter().enumerate() {
                        println!("{index:>4}  {entry}");
                    }
                    history.add_entry(line);
                }
                _ => {
                    println!("{}", line.as_str().dark_grey());
                    history.add_entry(line);
                }
            },
            PromptOutcome::Abort(_) => {}
            PromptOutcome::Cancel => break,
        }
    }

    ok!()
}
