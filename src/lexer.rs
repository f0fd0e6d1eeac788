use logos::Logos;
use std::fmt;
use thiserror::Error;

use crate::source::Span;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")] // Skip whitespace
#[logos(skip r"#[^\n\r]*")] // Skip comments
#[logos(error = LexerErrorKind)]
pub enum TokenKind {
    #[regex(r"[-+]?[0-9]+", |lex| {
        let slice = lex.slice();
        slice
            .parse::<i64>()
            .map_err(|_| LexerErrorKind::IntegerOutOfRange(slice.to_string()))
    })]
    Integer(i64),
    #[regex(r"[a-zA-Z][a-zA-Z0-9_-]*", |lex| lex.slice().to_string())]
    Word(String), // Command names and strategy names
}

/// A token together with the bytes of input it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub kind: TokenKind,
    pub span: Span,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Integer(n) => write!(f, "{}", n),
            TokenKind::Word(w) => write!(f, "{}", w),
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Error)]
pub enum LexerErrorKind {
    #[error("Integer out of range: '{0}'")]
    IntegerOutOfRange(String),
    #[default]
    #[error("Invalid token")]
    InvalidToken,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{error}")]
pub struct LexerError {
    pub error: LexerErrorKind,
    pub span: Span,
}

type LexerRangedResult<T> = Result<T, LexerError>;

/// Lexes a whole command line, stopping at the first invalid token.
pub fn tokenize(input: &str) -> LexerRangedResult<Vec<Lexeme>> {
    TokenKind::lexer(input)
        .spanned()
        .map(|(result, range)| match result {
            Ok(kind) => Ok(Lexeme {
                kind,
                span: range.into(),
            }),
            Err(error) => Err(LexerError {
                error,
                span: range.into(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to simplify testing token sequences
    fn assert_tokens(input: &str, expected: Vec<TokenKind>) {
        match tokenize(input) {
            Ok(tokens) => {
                let kinds: Vec<TokenKind> = tokens.into_iter().map(|t| t.kind).collect();
                assert_eq!(kinds, expected, "Input: '{}'", input);
            }
            Err(e) => panic!("Lexing failed for input '{}': {}", input, e.error),
        }
    }

    fn assert_lexer_error(input: &str, expected: LexerErrorKind, span: Span) {
        match tokenize(input) {
            Ok(tokens) => panic!(
                "Expected lexing to fail for input '{}', but got tokens: {:?}",
                input, tokens
            ),
            Err(e) => {
                assert_eq!(e.error, expected, "Input: '{}'", input);
                assert_eq!(e.span, span, "Input: '{}'", input);
            }
        }
    }

    fn word(s: &str) -> TokenKind {
        TokenKind::Word(s.to_string())
    }

    #[test]
    fn test_empty_input() {
        assert_tokens("", vec![]);
        assert_tokens("   \t ", vec![]);
    }

    #[test]
    fn test_integers() {
        assert_tokens("7", vec![TokenKind::Integer(7)]);
        assert_tokens("-3", vec![TokenKind::Integer(-3)]);
        assert_tokens("+12", vec![TokenKind::Integer(12)]);
        assert_tokens(
            "7 30 11",
            vec![
                TokenKind::Integer(7),
                TokenKind::Integer(30),
                TokenKind::Integer(11),
            ],
        );
        assert_tokens(
            "-9223372036854775808",
            vec![TokenKind::Integer(i64::MIN)],
        );
    }

    #[test]
    fn test_words() {
        assert_tokens("help", vec![word("help")]);
        assert_tokens("strategy Balanced", vec![word("strategy"), word("Balanced")]);
        assert_tokens(
            "tokens 1 30",
            vec![word("tokens"), TokenKind::Integer(1), TokenKind::Integer(30)],
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_tokens("max 9 # fewer slots", vec![word("max"), TokenKind::Integer(9)]);
        assert_tokens("# only a comment", vec![]);
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize("max  12").unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 3));
        assert_eq!(tokens[1].span, Span::new(5, 7));
    }

    #[test]
    fn test_integer_out_of_range() {
        assert_lexer_error(
            "1 99999999999999999999",
            LexerErrorKind::IntegerOutOfRange("99999999999999999999".to_string()),
            Span::new(2, 22),
        );
    }

    #[test]
    fn test_invalid_token() {
        assert_lexer_error("7 / 30", LexerErrorKind::InvalidToken, Span::new(2, 3));
        assert_lexer_error("-", LexerErrorKind::InvalidToken, Span::new(0, 1));
    }

    #[test]
    fn test_token_display() {
        assert_eq!(TokenKind::Integer(-4).to_string(), "-4");
        assert_eq!(word("compare").to_string(), "compare");
    }
}
