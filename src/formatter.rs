//! Pagination layout: maps `(current, total, max_visible)` to display tokens.
//!
//! Every input is accepted. Out-of-range values are clamped by
//! [`PaginationRequest::normalized`] before any layout happens, so these
//! functions never fail and always produce the same output for the same
//! inputs.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::types::{NormalizedRequest, Pagination, PaginationRequest, Token};

/// How the middle run of pages is positioned around the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Start the run `max / 2` (plus the odd remainder) pages before the
    /// current page, then shift it left if it runs past the last page.
    #[default]
    Shift,
    /// Decide up front which sides need an ellipsis and spread the
    /// remaining slots evenly around the current page.
    Balanced,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Shift, Strategy::Balanced];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Shift => "shift",
            Strategy::Balanced => "balanced",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{0}' (expected 'shift' or 'balanced')")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStrategyError(s.to_string()))
    }
}

/// Middle run of pages strictly between the first and last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    start: u64, // First page of the run, always >= 2
    end: u64,   // Exclusive, always <= total_pages
}

/// Lays out the tokens for `current` of `total` pages with the default
/// [`Strategy::Shift`].
pub fn paginate(current: i64, total: i64, max_visible: i64) -> Pagination {
    paginate_with(
        PaginationRequest::new(current, total, max_visible),
        Strategy::default(),
    )
}

/// Renders the default layout as a display string, e.g.
/// `"1 ... 3 4 5 6 [7] 8 9 10 11 ... 30"`.
pub fn format(current: i64, total: i64, max_visible: i64) -> String {
    paginate(current, total, max_visible).to_string()
}

pub fn format_with(request: PaginationRequest, strategy: Strategy) -> String {
    paginate_with(request, strategy).to_string()
}

/// Lays out `request` using `strategy`.
pub fn paginate_with(request: PaginationRequest, strategy: Strategy) -> Pagination {
    let request = request.normalized();
    if request.fits_entirely() {
        return all_pages(request);
    }

    let window = match strategy {
        Strategy::Shift => shift_window(request),
        Strategy::Balanced => balanced_window(request),
    };
    emit_window(request, window)
}

fn all_pages(request: NormalizedRequest) -> Pagination {
    Pagination::new(
        (1..=request.total_pages)
            .map(|page| Token::numeric(page, request.current_page))
            .collect(),
    )
}

fn shift_window(request: NormalizedRequest) -> Window {
    let NormalizedRequest {
        current_page,
        total_pages,
        max_visible,
    } = request;

    let mid = max_visible / 2;
    let extra = max_visible % 2; // the odd slot goes to the left of current
    let mut start = current_page.saturating_sub(mid + extra) + 2;
    // Two slots are reserved for the first and last page
    let mut end = start + (max_visible - 2);

    if end > total_pages {
        let overflow = end - total_pages;
        end -= overflow;
        start -= overflow;
    }
    Window { start, end }
}

fn balanced_window(request: NormalizedRequest) -> Window {
    let NormalizedRequest {
        current_page,
        total_pages,
        max_visible,
    } = request;

    let remaining = max_visible - 2;
    let half = remaining / 2;
    let need_left = current_page > half + 2;
    let need_right = current_page + half + 1 < total_pages;

    let (start, last) = match (need_left, need_right) {
        (true, true) => {
            let side = (remaining - 1) / 2;
            let mut start = current_page.saturating_sub(side).max(2);
            let mut last = (current_page + side).min(total_pages - 1);
            if remaining % 2 == 0 {
                if current_page - start < last - current_page {
                    last += 1;
                } else {
                    start -= 1;
                }
            }
            (start, last)
        }
        (true, false) => (total_pages - remaining, total_pages - 1),
        // Neither side only happens when total_pages == max_visible + 1 and
        // remaining is even; eliding the tail keeps the count at max_visible.
        (false, _) => (2, remaining + 1),
    };
    Window {
        start,
        end: last + 1,
    }
}

fn emit_window(request: NormalizedRequest, window: Window) -> Pagination {
    let NormalizedRequest {
        current_page,
        total_pages,
        ..
    } = request;

    let run = usize::try_from(window.end - window.start).unwrap_or(0);
    let mut tokens = Vec::with_capacity(run + 4);
    tokens.push(Token::numeric(1, current_page));
    if window.start > 2 {
        tokens.push(Token::Ellipsis);
    }
    tokens.extend((window.start..window.end).map(|page| Token::numeric(page, current_page)));
    if window.end < total_pages {
        tokens.push(Token::Ellipsis);
    }
    tokens.push(Token::numeric(total_pages, current_page));
    Pagination::new(tokens)
}
