use crate::ParseError;
use crate::lexer::LexerErrorKind;
use ariadne::{Config, Label, Report, ReportKind, Source};
use std::io;
use std::ops::Range;

const SOURCE_ID: &str = "REPL";

type ReplSpan = (&'static str, Range<usize>);

impl ParseError {
    /// Builds an ariadne report pointing at the offending part of the line.
    pub fn report(&self, config: Config) -> Report<'_, ReplSpan> {
        let range = self.span().to_range();
        let builder =
            Report::build(ReportKind::Error, (SOURCE_ID, range.clone())).with_config(config);
        let builder = match self {
            ParseError::UnexpectedToken { found, expected } => builder
                .with_message(format!("Unexpected token: {}", found.kind))
                .with_label(
                    Label::new((SOURCE_ID, range)).with_message(format!("Expected {expected}")),
                ),
            ParseError::UnexpectedEof { expected, .. } => builder
                .with_message("Unexpected end of input")
                .with_label(
                    Label::new((SOURCE_ID, range)).with_message(format!("Expected {expected}")),
                ),
            ParseError::UnknownCommand(word, _) => builder
                .with_message(format!("Unknown command `{}`", word))
                .with_label(
                    Label::new((SOURCE_ID, range))
                        .with_message("Not a command; type `help` for the list"),
                ),
            ParseError::UnknownStrategy { source, .. } => builder
                .with_message(format!("Unknown strategy `{}`", source.0))
                .with_label(
                    Label::new((SOURCE_ID, range)).with_message("Expected `shift` or `balanced`"),
                ),
            ParseError::LexerError(lex_err) => {
                let note = match &lex_err.error {
                    LexerErrorKind::IntegerOutOfRange(_) => "Does not fit in a 64-bit integer",
                    LexerErrorKind::InvalidToken => "Only integers and words are allowed here",
                };
                builder
                    .with_message(format!("Lexer Error: {}", lex_err.error))
                    .with_label(Label::new((SOURCE_ID, range)).with_message(note))
            }
        };
        builder.finish()
    }

    /// Prints the report for this error to stderr.
    pub fn pretty_print(&self, input: &str) -> io::Result<()> {
        self.report(Config::default())
            .eprint((SOURCE_ID, Source::from(input)))
    }
}
