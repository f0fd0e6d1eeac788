use tracing::{debug, info};

use crate::formatter::{Strategy, paginate_with};
use crate::parser::{Command, PageArgs, ParseError, parse_str};
use crate::types::{Pagination, PaginationRequest};

/// Max visible pages used when a command leaves it out.
pub const DEFAULT_MAX_VISIBLE: i64 = 11;

const HELP: &str = "\
Commands:
  <current> <total> [max]          render a pagination bar
  tokens <current> <total> [max]   show the token sequence
  compare <current> <total> [max]  render with every strategy
  max <n>                          set the default max visible pages
  strategy <shift|balanced>        set the layout strategy
  show                             print the current settings
  help                             print this message
  exit | quit                      leave the REPL";

/// Settings that carry over between REPL lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    max_visible: i64,
    strategy: Strategy,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(DEFAULT_MAX_VISIBLE, Strategy::default())
    }
}

impl Session {
    pub fn new(max_visible: i64, strategy: Strategy) -> Self {
        Session {
            max_visible,
            strategy,
        }
    }

    pub fn max_visible(&self) -> i64 {
        self.max_visible
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Parses and executes one line, returning the text to print.
    pub fn eval_line(&mut self, input: &str) -> Result<String, ParseError> {
        let command = parse_str(input)?;
        Ok(self.execute(command))
    }

    pub fn execute(&mut self, command: Command) -> String {
        debug!(?command, "executing command");
        match command {
            Command::Render(args) => self.layout(args, self.strategy).to_string(),
            Command::Tokens(args) => format!("{:?}", self.layout(args, self.strategy).tokens()),
            Command::Compare(args) => Strategy::ALL
                .iter()
                .map(|&strategy| {
                    format!("{:<9} {}", strategy.name(), self.layout(args, strategy))
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Command::SetMax(max_visible) => {
                self.max_visible = max_visible;
                info!(max_visible, "default max visible pages changed");
                if max_visible < 3 {
                    format!("max = {} (layouts use at least 3)", max_visible)
                } else {
                    format!("max = {}", max_visible)
                }
            }
            Command::SetStrategy(strategy) => {
                self.strategy = strategy;
                info!(%strategy, "layout strategy changed");
                format!("strategy = {}", strategy)
            }
            Command::Show => format!("max = {}, strategy = {}", self.max_visible, self.strategy),
            Command::Help => HELP.to_string(),
            Command::Exit => "Exiting.".to_string(),
        }
    }

    fn layout(&self, args: PageArgs, strategy: Strategy) -> Pagination {
        let request = PaginationRequest::new(
            args.current,
            args.total,
            args.max_visible.unwrap_or(self.max_visible),
        );
        paginate_with(request, strategy)
    }
}
