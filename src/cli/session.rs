//! Interactive session
//!
//! One ledger per session, driven line by line from any reader. Each line is
//! split with shell quoting rules and parsed by clap, so multi-word item
//! names can be quoted: `add "Cooking oil" 450`.

use std::io::{BufRead, Write};

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::config::Settings;
use crate::display::{format_dashboard, format_item_list};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, Ledger};

/// Options for starting a session
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Amount received to start with
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Destination for shared reports (defaults to the configured one)
    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Parser, Debug)]
#[command(name = "session", no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// Commands accepted inside a session
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Set the amount received
    Amount {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Add an expense item
    Add {
        /// Item name (quote names with spaces)
        name: String,
        #[arg(allow_hyphen_values = true)]
        price: String,
    },

    /// Delete the item at a listed position (1-based)
    #[command(alias = "rm")]
    Delete { position: usize },

    /// Show recorded items
    #[command(alias = "ls")]
    List,

    /// Show totals and spend level
    Totals,

    /// Generate the shareable report and its link
    Report {
        /// Destination for this report only
        #[arg(long)]
        to: Option<String>,
    },

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// What the loop should do after a line
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Continue(String),
    Quit,
}

/// A running session over one ledger
pub struct Session<'a> {
    ledger: Ledger,
    settings: &'a Settings,
    destination: Option<String>,
    color: bool,
}

impl<'a> Session<'a> {
    pub fn new(settings: &'a Settings, args: &SessionArgs) -> Self {
        let mut ledger = Ledger::new();
        if let Some(amount) = &args.amount {
            ledger.set_amount_received(Amount::from_input(amount));
        }

        Self {
            ledger,
            settings,
            destination: args.to.clone(),
            color: false,
        }
    }

    /// Colour the spend bar in dashboard output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Parse and run one input line
    pub fn handle_line(&mut self, line: &str) -> BudgetResult<Step> {
        let words = shell_words::split(line)
            .map_err(|e| BudgetError::Command(format!("Could not read input: {}", e)))?;
        if words.is_empty() {
            return Ok(Step::Continue(String::new()));
        }

        match SessionLine::try_parse_from(words) {
            Ok(parsed) => self.execute(parsed.command),
            // Help output and usage errors are shown to the user as-is
            Err(e) => Ok(Step::Continue(e.to_string())),
        }
    }

    /// Run a parsed command against the ledger
    pub fn execute(&mut self, command: SessionCommand) -> BudgetResult<Step> {
        debug!(?command, "session command");
        let settings = self.settings;
        let format = &settings.format;

        let output = match command {
            SessionCommand::Amount { value } => {
                self.ledger.set_amount_received(Amount::from_input(&value));
                self.dashboard()
            }
            SessionCommand::Add { name, price } => {
                let item = self.ledger.add_item_from_input(&name, &price)?;
                format!(
                    "Added {}. {} - {}\n",
                    self.ledger.len(),
                    item.name,
                    format.format_money(item.price)
                )
            }
            SessionCommand::Delete { position } => {
                let index = position.checked_sub(1).ok_or_else(|| {
                    BudgetError::Command("Item positions start at 1".into())
                })?;
                let item = self.ledger.delete_item(index).map_err(|e| match e {
                    BudgetError::IndexOutOfRange { len, .. } => BudgetError::Command(format!(
                        "No item numbered {} (the list has {} items)",
                        position, len
                    )),
                    other => other,
                })?;
                format!("Deleted {} - {}\n", item.name, format.format_money(item.price))
            }
            SessionCommand::List => format_item_list(self.ledger.items(), format),
            SessionCommand::Totals => self.dashboard(),
            SessionCommand::Report { to } => {
                let at = settings.local_now()?;
                let text = self.ledger.current_report(at)?.render(format);
                let destination = to.as_deref().or(self.destination.as_deref());
                let link = settings.share.link(&text, destination);
                format!("{}\nShare: {}\n", text, link)
            }
            SessionCommand::Quit => return Ok(Step::Quit),
        };

        Ok(Step::Continue(output))
    }

    fn dashboard(&self) -> String {
        format_dashboard(
            self.ledger.amount_received(),
            &self.ledger.compute_totals(),
            &self.settings.format,
            self.color,
        )
    }

    /// Read commands until `quit` or end of input. Command errors are
    /// printed and the session carries on.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> BudgetResult<()> {
        writeln!(output, "Budget tracker. Type 'help' for commands, 'quit' to leave.")?;

        let mut lines = input.lines();
        loop {
            write!(output, "> ")?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };

            match self.handle_line(&line?) {
                Ok(Step::Continue(text)) => write!(output, "{}", text)?,
                Ok(Step::Quit) => break,
                Err(e) => writeln!(output, "Error: {}", e)?,
            }
        }

        Ok(())
    }
}
