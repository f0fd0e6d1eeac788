use crate::Span;
use crate::formatter::{ParseStrategyError, Strategy};
use crate::lexer::{LexerError, Lexeme, TokenKind, tokenize};
use std::iter::Peekable;
use std::vec::IntoIter;
use thiserror::Error;

/// Words the REPL understands as the first token of a line.
pub const COMMAND_WORDS: &[&str] = &[
    "tokens", "compare", "max", "strategy", "show", "help", "exit", "quit",
];

/// The three layout inputs; a missing `max_visible` falls back to the
/// session default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageArgs {
    pub current: i64,
    pub total: i64,
    pub max_visible: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Render(PageArgs),  // `7 30 11`
    Tokens(PageArgs),  // `tokens 7 30 11`
    Compare(PageArgs), // `compare 7 30 10`
    SetMax(i64),       // `max 9`
    SetStrategy(Strategy),
    Show,
    Help,
    Exit, // `exit` or `quit`
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Unexpected token '{}' [at {}], expected {}", .found.kind, .found.span, .expected)]
    UnexpectedToken { found: Lexeme, expected: String },
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String, span: Span },
    #[error("Unknown command '{0}'")]
    UnknownCommand(String, Span),
    #[error("{source}")]
    UnknownStrategy {
        #[source]
        source: ParseStrategyError,
        span: Span,
    },
    #[error("Lexer error: {0}")]
    LexerError(#[from] LexerError),
}

impl ParseError {
    /// Location of the offending input.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { found, .. } => found.span,
            ParseError::UnexpectedEof { span, .. } => *span,
            ParseError::UnknownCommand(_, span) => *span,
            ParseError::UnknownStrategy { span, .. } => *span,
            ParseError::LexerError(lex_err) => lex_err.span,
        }
    }
}

type ParseResult<T> = Result<T, ParseError>;

pub struct Parser {
    tokens: Peekable<IntoIter<Lexeme>>,
    input_len: usize, // Where end-of-input errors point
}

impl Parser {
    pub fn new(tokens: Vec<Lexeme>, input_len: usize) -> Self {
        Parser {
            tokens: tokens.into_iter().peekable(),
            input_len,
        }
    }

    /// Parses exactly one command; trailing tokens are an error.
    pub fn parse(mut self) -> ParseResult<Command> {
        let command = self.parse_command()?;
        match self.tokens.next() {
            Some(mut found) => {
                // Cover every leftover token, not just the first
                if let Some(last) = self.tokens.by_ref().last() {
                    found.span = found.span.merge(last.span);
                }
                Err(ParseError::UnexpectedToken {
                    found,
                    expected: "end of input".to_string(),
                })
            }
            None => Ok(command),
        }
    }

    fn parse_command(&mut self) -> ParseResult<Command> {
        let Some(token) = self.tokens.next() else {
            return Err(self.eof("a command"));
        };
        match token.kind {
            TokenKind::Integer(current) => {
                Ok(Command::Render(self.parse_page_args(Some(current))?))
            }
            TokenKind::Word(word) => match word.to_ascii_lowercase().as_str() {
                "tokens" => Ok(Command::Tokens(self.parse_page_args(None)?)),
                "compare" => Ok(Command::Compare(self.parse_page_args(None)?)),
                "max" => Ok(Command::SetMax(
                    self.expect_integer("the maximum visible pages")?,
                )),
                "strategy" => self.parse_strategy(),
                "show" => Ok(Command::Show),
                "help" => Ok(Command::Help),
                "exit" | "quit" => Ok(Command::Exit),
                _ => Err(ParseError::UnknownCommand(word, token.span)),
            },
        }
    }

    fn parse_page_args(&mut self, current: Option<i64>) -> ParseResult<PageArgs> {
        let current = match current {
            Some(current) => current,
            None => self.expect_integer("the current page")?,
        };
        let total = self.expect_integer("the total page count")?;
        let max_visible = match self.tokens.peek() {
            Some(Lexeme {
                kind: TokenKind::Integer(n),
                ..
            }) => {
                let n = *n;
                self.tokens.next();
                Some(n)
            }
            _ => None,
        };
        Ok(PageArgs {
            current,
            total,
            max_visible,
        })
    }

    fn parse_strategy(&mut self) -> ParseResult<Command> {
        match self.tokens.next() {
            Some(Lexeme {
                kind: TokenKind::Word(name),
                span,
            }) => name
                .parse::<Strategy>()
                .map(Command::SetStrategy)
                .map_err(|source| ParseError::UnknownStrategy { source, span }),
            Some(found) => Err(ParseError::UnexpectedToken {
                found,
                expected: "a strategy name".to_string(),
            }),
            None => Err(self.eof("a strategy name")),
        }
    }

    fn expect_integer(&mut self, what: &str) -> ParseResult<i64> {
        match self.tokens.next() {
            Some(Lexeme {
                kind: TokenKind::Integer(n),
                ..
            }) => Ok(n),
            Some(found) => Err(ParseError::UnexpectedToken {
                found,
                expected: what.to_string(),
            }),
            None => Err(self.eof(what)),
        }
    }

    fn eof(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedEof {
            expected: expected.to_string(),
            span: Span::point(self.input_len),
        }
    }
}

/// Lexes and parses one line of command input.
pub fn parse_str(input: &str) -> ParseResult<Command> {
    let tokens = tokenize(input)?;
    Parser::new(tokens, input.len()).parse()
}
