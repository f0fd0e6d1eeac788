//! Pagination bars: `1 ... 3 4 5 6 [7] 8 9 10 11 ... 30`.
//!
//! [`format`] and [`paginate`] are pure functions of `(current, total,
//! max_visible)`. The remaining modules back the `pagebar` and `repl`
//! binaries.

pub mod formatter;
pub mod lexer;
pub mod logging;
pub mod parser;
pub mod pretty_print;
pub mod session;
pub mod source;
pub mod types;

pub use formatter::{
    ParseStrategyError, Strategy, format, format_with, paginate, paginate_with,
};
pub use lexer::{LexerError, Lexeme, TokenKind, tokenize};
pub use parser::{Command, ParseError, Parser, parse_str};
pub use session::Session;
pub use source::Span;
pub use types::{NormalizedRequest, Pagination, PaginationRequest, Token};
