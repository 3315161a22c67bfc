//! kl_watch - K&L search and price watcher
//!
//! Runs one watch step and prints a JSON result on stdout for the calling
//! automation. Logs go to stderr.

use clap::{Parser, Subcommand};
use kl_watch::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use kl_watch::output::{render_failure, render_success};
use kl_watch::{run_price_check, run_search, ClientConfig, Result, SearchClient};
use std::path::PathBuf;
use std::time::Duration;

/// Watch K&L search results and prices for changes between runs
#[derive(Parser, Debug)]
#[command(name = "kl_watch")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Storefront root the search path is appended to
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// HTTP timeout per search request, in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// User-Agent header sent with every request
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for a term and report whether the result list changed
    Search {
        /// Search term (e.g. Laphroaig)
        #[arg(long)]
        term: String,

        /// File keeping the SKUs from the previous search
        #[arg(long)]
        output_file: Option<PathBuf>,
    },

    /// Look up SKUs and report price changes
    Prices {
        /// Product SKU to check (repeatable or comma separated)
        #[arg(long = "sku", required = true, value_delimiter = ',')]
        skus: Vec<String>,

        /// File keeping the prices from the previous check
        #[arg(long)]
        output_file: Option<PathBuf>,
    },
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match run(&args).await {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("{}", e);
            println!("{}", render_failure(&e));
            std::process::exit(1);
        }
    }
}

async fn run(args: &Args) -> Result<String> {
    let client = SearchClient::new(&args.client_config())?;

    match &args.command {
        Command::Search { term, output_file } => {
            let outcome = run_search(&client, term, output_file.as_deref()).await?;
            render_success(&outcome)
        }
        Command::Prices { skus, output_file } => {
            let outcome = run_price_check(&client, skus, output_file.as_deref()).await?;
            render_success(&outcome)
        }
    }
}
