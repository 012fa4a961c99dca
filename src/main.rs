use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{handle_report_command, ReportArgs, Session, SessionArgs};
use budget_tracker::config::{BudgetPaths, Settings};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Track expenses against an amount received and share a report",
    long_about = "Enter the amount you received, add what you spent it on, and see \
                  your balance and how much of the money is gone. Generate a text \
                  report with a messaging link to send it on."
)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    Session(SessionArgs),

    /// Generate a report in one go from arguments
    Report(ReportArgs),

    /// Show the settings file location and current settings
    Config,

    /// Write a settings file with default values
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    budget_tracker::logging::init(cli.verbose);

    let paths = BudgetPaths::new()?;
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Session(SessionArgs::default()));

    match command {
        Commands::Session(args) => {
            let settings = load_settings(&paths)?;
            let color = settings.color && io::stdout().is_terminal();
            let mut session = Session::new(&settings, &args).with_color(color);
            session.run(io::stdin().lock(), &mut io::stdout().lock())?;
        }
        Commands::Report(args) => {
            let settings = load_settings(&paths)?;
            handle_report_command(&settings, &args, &mut io::stdout().lock())?;
        }
        Commands::Config => {
            let settings = load_settings(&paths)?;
            println!("Budget tracker configuration");
            println!("============================");
            println!("Settings file: {}", paths.settings_file().display());
            if !paths.is_initialized() {
                println!("(not written yet, showing defaults; run 'budget init')");
            }
            println!();
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        // Never reads the existing file, so `init --force` can replace a broken one
        Commands::Init { force } => init_settings(&paths, force)?,
    }

    Ok(())
}

fn load_settings(paths: &BudgetPaths) -> Result<Settings> {
    let settings = Settings::load_or_create(paths)?;
    tracing::debug!(settings_file = %paths.settings_file().display(), "settings loaded");
    Ok(settings)
}

fn init_settings(paths: &BudgetPaths, force: bool) -> Result<()> {
    if paths.is_initialized() && !force {
        println!(
            "Settings already exist at {} (use --force to overwrite)",
            paths.settings_file().display()
        );
    } else {
        Settings::default().save(paths)?;
        println!("Wrote default settings to {}", paths.settings_file().display());
    }
    Ok(())
}
