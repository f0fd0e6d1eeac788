use std::borrow::Cow;
use std::path::PathBuf;

use clap::Parser;
use logos::Logos;
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::{Context, EditMode, Editor};
use rustyline::{Completer, Helper, Highlighter, Hinter, Validator};
use tracing::{debug, info};

use pagebar::parser::COMMAND_WORDS;
use pagebar::session::DEFAULT_MAX_VISIBLE;
use pagebar::{Command, Session, Strategy, TokenKind, logging, parse_str};

/// Interactive pagination bar explorer.
#[derive(clap::Parser, Debug)]
#[command(name = "repl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Default maximum number of page numbers to show
    #[arg(short, long, default_value_t = DEFAULT_MAX_VISIBLE, allow_negative_numbers = true)]
    max: i64,

    /// Initial layout strategy: shift or balanced
    #[arg(short, long, default_value_t = Strategy::Shift)]
    strategy: Strategy,

    /// History file
    #[arg(long, default_value = "pagebar_history.txt")]
    history: PathBuf,

    /// Use vi key bindings instead of emacs
    #[arg(long)]
    vi: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

struct PagebarCompleter;

impl rustyline::completion::Completer for PagebarCompleter {
    type Candidate = String;
    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let head = &line[..pos];
        let start = head
            .char_indices()
            .rev()
            .find(|&(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        let prefix = head[start..].to_ascii_lowercase();

        // Strategy names after `strategy`, command words at the start of a line
        let previous: Vec<&str> = head[..start].split_whitespace().collect();
        let candidates: Vec<&str> = match previous.as_slice() {
            [] => COMMAND_WORDS.to_vec(),
            [word] if word.eq_ignore_ascii_case("strategy") => {
                Strategy::ALL.iter().map(Strategy::name).collect()
            }
            _ => vec![],
        };
        Ok((
            start,
            candidates
                .into_iter()
                .filter(|candidate| candidate.starts_with(&prefix))
                .map(str::to_string)
                .collect(),
        ))
    }
}

#[derive(Completer, Helper, Highlighter, Hinter, Validator)]
struct PagebarHelper {
    #[rustyline(Highlighter)]
    highlighter: PagebarHighlighter,
    #[rustyline(Completer)]
    completer: PagebarCompleter,
}

struct PagebarHighlighter;

impl Highlighter for PagebarHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let mut highlighted = String::with_capacity(line.len());
        let mut last = 0;
        for (result, range) in TokenKind::lexer(line).spanned() {
            highlighted.push_str(&line[last..range.start]);
            let text = &line[range.clone()];
            match result {
                Ok(TokenKind::Integer(_)) => {
                    highlighted.push_str(&format!("\x1b[36m{}\x1b[0m", text)); // Cyan for numbers
                }
                Ok(TokenKind::Word(word)) => {
                    let known = COMMAND_WORDS
                        .iter()
                        .copied()
                        .chain(Strategy::ALL.iter().map(Strategy::name))
                        .any(|known| known.eq_ignore_ascii_case(&word));
                    if known {
                        highlighted.push_str(&format!("\x1b[1;34m{}\x1b[0m", text)); // Bold blue for keywords
                    } else {
                        highlighted.push_str(text);
                    }
                }
                Err(_) => {
                    highlighted.push_str(&format!("\x1b[31m{}\x1b[0m", text)); // Red for invalid input
                }
            }
            last = range.end;
        }
        highlighted.push_str(&line[last..]);
        Cow::Owned(highlighted)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref())?;

    println!("pagebar REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for commands, 'exit' or Ctrl-D to quit.");

    let mut session = Session::new(cli.max, cli.strategy);
    let config = rustyline::config::Config::builder()
        .edit_mode(if cli.vi { EditMode::Vi } else { EditMode::Emacs })
        .build();
    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(PagebarHelper {
        highlighter: PagebarHighlighter,
        completer: PagebarCompleter,
    }));
    if rl.load_history(&cli.history).is_err() {
        info!(path = %cli.history.display(), "no previous history");
    }

    loop {
        match rl.readline("pagebar> ") {
            Ok(line) => {
                let trimmed_input = line.trim();
                if trimmed_input.is_empty() {
                    continue;
                }
                rl.add_history_entry(trimmed_input)?;

                match parse_str(trimmed_input) {
                    Ok(command) => {
                        let exit = command == Command::Exit;
                        println!("{}", session.execute(command));
                        if exit {
                            break;
                        }
                    }
                    Err(parse_err) => {
                        debug!(error = %parse_err, "rejected input");
                        parse_err.pretty_print(trimmed_input)?;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                println!("Interrupted. Type 'exit' or Ctrl-D to quit.");
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                println!("\nExiting.");
                break;
            }
            Err(err) => {
                eprintln!("Readline Error: {:?}", err);
                break;
            }
        }
    }
    rl.save_history(&cli.history)?;
    Ok(())
}
