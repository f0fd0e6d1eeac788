use std::fmt; // For custom display formatting

/// A single entry of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Page(u64),        // A selectable page, e.g. `7`
    CurrentPage(u64), // The active page, rendered as `[7]`
    Ellipsis,         // One or more omitted pages, rendered as `...`
}

impl Token {
    /// Builds the numeric token for `page`, marking it when it is `current`.
    pub fn numeric(page: u64, current: u64) -> Self {
        if page == current {
            Token::CurrentPage(page)
        } else {
            Token::Page(page)
        }
    }

    /// The page number carried by the token, `None` for an ellipsis.
    pub fn page_number(&self) -> Option<u64> {
        match self {
            Token::Page(n) | Token::CurrentPage(n) => Some(*n),
            Token::Ellipsis => None,
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, Token::CurrentPage(_))
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Token::Ellipsis)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Page(n) => write!(f, "{}", n),
            Token::CurrentPage(n) => write!(f, "[{}]", n),
            Token::Ellipsis => write!(f, "..."),
        }
    }
}

/// The caller-supplied inputs, before any clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationRequest {
    pub current_page: i64,
    pub total_pages: i64,
    pub max_visible: i64,
}

impl PaginationRequest {
    pub fn new(current_page: i64, total_pages: i64, max_visible: i64) -> Self {
        PaginationRequest {
            current_page,
            total_pages,
            max_visible,
        }
    }

    /// Clamps every field into the range the layout code works with.
    ///
    /// The total is raised to at least one page first, so a stale current
    /// page is always pulled back inside the real page range. Anything
    /// below three visible slots is treated as exactly three.
    pub fn normalized(self) -> NormalizedRequest {
        let total_pages = self.total_pages.max(1);
        let current_page = self.current_page.clamp(1, total_pages);
        let max_visible = self.max_visible.max(3);
        NormalizedRequest {
            current_page: current_page.unsigned_abs(),
            total_pages: total_pages.unsigned_abs(),
            max_visible: max_visible.unsigned_abs(),
        }
    }
}

/// A request whose fields satisfy `1 <= current_page <= total_pages`
/// and `max_visible >= 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedRequest {
    pub current_page: u64,
    pub total_pages: u64,
    pub max_visible: u64,
}

impl NormalizedRequest {
    /// Whether every page fits, so nothing has to be elided.
    pub fn fits_entirely(&self) -> bool {
        self.total_pages <= 3 || self.max_visible >= self.total_pages
    }
}

/// The ordered tokens of one pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pagination {
    tokens: Vec<Token>,
}

impl Pagination {
    pub fn new(tokens: Vec<Token>) -> Self {
        Pagination { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The page marked as current, if any.
    pub fn current_page(&self) -> Option<u64> {
        self.tokens
            .iter()
            .find(|token| token.is_current())
            .and_then(Token::page_number)
    }

    /// Page numbers in display order, ellipses skipped.
    pub fn page_numbers(&self) -> impl Iterator<Item = u64> + '_ {
        self.tokens.iter().filter_map(Token::page_number)
    }

    /// Count of numeric tokens (pages and the current page).
    pub fn numeric_len(&self) -> usize {
        self.page_numbers().count()
    }
}

impl<'a> IntoIterator for &'a Pagination {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for Pagination {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

// Reference rendering: tokens joined by single spaces
impl fmt::Display for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in &self.tokens {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
            first = false;
        }
        Ok(())
    }
}
