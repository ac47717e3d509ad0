//! Command-line interface for the search.

use clap::{Parser, Subcommand};
use console::style;

use crate::client::CnpjaClient;
use crate::config::SearchConfig;
use crate::controller::SearchController;
use crate::error::Result;
use crate::terminal::TerminalView;

/// Search the CNPJá registry for MEI companies founded in a date range.
#[derive(Parser)]
#[command(name = "cnpj-search")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search companies by founding date.
    Search {
        /// First founding date, YYYY-MM-DD (default: 180 days ago)
        #[arg(short, long)]
        start: Option<String>,

        /// Last founding date, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        end: Option<String>,

        /// Print the request URL and response preview even on success
        #[arg(long)]
        show_debug: bool,
    },
}

/// Run the CLI.
///
/// Returns `Ok(false)` when the search itself failed; the failure has then
/// already been printed with the rest of the report. `Err` is reserved for
/// failures before a search could start.
pub async fn run() -> Result<bool> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            start,
            end,
            show_debug,
        } => search_command(start.as_deref(), end.as_deref(), show_debug).await,
    }
}

/// Execute the search command.
async fn search_command(start: Option<&str>, end: Option<&str>, show_debug: bool) -> Result<bool> {
    let config = SearchConfig::from_env()?;
    let client = CnpjaClient::new(&config)?;
    let mut controller = SearchController::new(client, TerminalView::new(show_debug), config);

    let defaults = controller.populate_defaults(chrono::Local::now().date_naive());
    let start = start
        .map(String::from)
        .unwrap_or_else(|| defaults.start_iso());
    let end = end.map(String::from).unwrap_or_else(|| defaults.end_iso());

    println!(
        "{} founded {} to {}",
        style("Searching").bold(),
        style(&start).green(),
        style(&end).green()
    );
    println!();

    let result = controller.search(&start, &end).await;
    print!("{}", controller.view().report());

    Ok(result.is_ok())
}
