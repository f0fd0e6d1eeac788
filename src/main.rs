use clap::Parser;
use pagebar::session::DEFAULT_MAX_VISIBLE;
use pagebar::{PaginationRequest, Strategy, logging, paginate_with};
use tracing::debug;

/// Print a pagination bar for one page of a paged listing.
///
/// Out-of-range arguments are clamped, never rejected.
#[derive(Parser, Debug)]
#[command(name = "pagebar")]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Cli {
    /// Current page (clamped into 1..=TOTAL)
    current: i64,

    /// Total number of pages (values below 1 mean a single page)
    total: i64,

    /// Maximum number of page numbers to show (at least 3)
    #[arg(short, long, default_value_t = DEFAULT_MAX_VISIBLE)]
    max: i64,

    /// Layout strategy: shift or balanced
    #[arg(short, long, default_value_t = Strategy::Shift)]
    strategy: Strategy,

    /// Print the token sequence instead of the rendered bar
    #[arg(long)]
    tokens: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref())?;

    let request = PaginationRequest::new(cli.current, cli.total, cli.max);
    debug!(?request, normalized = ?request.normalized(), strategy = %cli.strategy, "laying out");

    let pagination = paginate_with(request, cli.strategy);
    if cli.tokens {
        for token in &pagination {
            println!("{:?}", token);
        }
    } else {
        println!("{}", pagination);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_accepts_negative_numbers() {
        let cli = Cli::try_parse_from(["pagebar", "-3", "-10", "--max", "-1"]).unwrap();
        assert_eq!((cli.current, cli.total, cli.max), (-3, -10, -1));
        assert_eq!(cli.strategy, Strategy::Shift);
    }

    #[test]
    fn test_cli_strategy_flag() {
        let cli =
            Cli::try_parse_from(["pagebar", "7", "30", "-s", "balanced", "--tokens"]).unwrap();
        assert_eq!(cli.strategy, Strategy::Balanced);
        assert!(cli.tokens);
        assert!(Cli::try_parse_from(["pagebar", "7", "30", "-s", "zigzag"]).is_err());
    }
}
