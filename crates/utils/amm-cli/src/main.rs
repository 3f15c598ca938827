//! # AMM Command Line
//!
//! Request quotes and submit swaps against an AMM service from the shell.
//!
//! ## Usage
//!
//! ```bash
//! export AMM_BASE_URL=http://localhost:8080
//! amm quote MINA cUSD 10
//! amm --json swap MINA cUSD 10 --wallet B62q...
//! ```
//!
//! A swap asks for confirmation unless `--yes` is given. Ctrl-C cancels the
//! call in flight.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use lib_amm::{AmmClient, CancellationToken, ClientConfig, ErrorKind, QuoteRequest, SwapRequest};
use lib_utils::{validate_not_empty, validate_positive_amount};
use shared::{truncate_address, QuoteResponse, SwapResponse};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "amm", version, about = "Quote and swap against an AMM service")]
struct Cli {
    /// AMM service base URL
    #[arg(long, env = "AMM_BASE_URL")]
    base_url: String,

    /// Connect timeout in seconds
    #[arg(long, env = "AMM_CONNECT_TIMEOUT_SECS", default_value_t = 10)]
    connect_timeout_secs: u64,

    /// Deadline for a whole request in seconds
    #[arg(long, env = "AMM_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: Option<u64>,

    /// Print responses as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Get a price quote
    Quote {
        from_asset: String,
        to_asset: String,
        amount: f64,
    },
    /// Submit a swap
    Swap {
        from_asset: String,
        to_asset: String,
        amount: f64,

        /// Wallet address submitting the swap
        #[arg(long)]
        wallet: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let mut config = ClientConfig::builder(&cli.base_url)
        .connect_timeout(Duration::from_secs(cli.connect_timeout_secs));
    if let Some(secs) = cli.request_timeout_secs {
        config = config.request_timeout(Duration::from_secs(secs));
    }
    let client = AmmClient::with_config(config.build()?)?;

    // Validate and confirm before anything goes out.
    let action = match cli.command {
        Command::Quote {
            from_asset,
            to_asset,
            amount,
        } => {
            let request = QuoteRequest::new(from_asset, to_asset, amount);
            check_assets(&request.from_asset, &request.to_asset, request.amount)?;
            Action::Quote(request)
        }
        Command::Swap {
            from_asset,
            to_asset,
            amount,
            wallet,
            yes,
        } => {
            let request = SwapRequest::new(from_asset, to_asset, amount, wallet);
            check_assets(&request.from_asset, &request.to_asset, request.amount)?;
            validate_not_empty(&request.wallet_address, "wallet").map_err(anyhow::Error::msg)?;

            if !yes && !confirm_swap(&request, &mut io::stdin().lock())? {
                println!("Swap cancelled.");
                return Ok(());
            }
            Action::Swap(request)
        }
    };

    // Installed after the prompt: until here Ctrl-C keeps its default and ends the process.
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupt received, cancelling request");
            on_interrupt.cancel();
        }
    });

    match action {
        Action::Quote(request) => {
            let quote = client
                .fetch_quote_cancellable(&request, &cancel)
                .await
                .map_err(explain)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                print_quote(&quote);
            }
        }
        Action::Swap(request) => {
            let swap = client
                .submit_swap_cancellable(&request, &cancel)
                .await
                .map_err(explain)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&swap)?);
            } else {
                print_swap(&swap);
            }
        }
    }

    Ok(())
}

/// Validated request ready to send.
enum Action {
    Quote(QuoteRequest),
    Swap(SwapRequest),
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn check_assets(from_asset: &str, to_asset: &str, amount: f64) -> anyhow::Result<()> {
    validate_not_empty(from_asset, "from asset").map_err(anyhow::Error::msg)?;
    validate_not_empty(to_asset, "to asset").map_err(anyhow::Error::msg)?;
    validate_positive_amount(amount, "amount").map_err(anyhow::Error::msg)?;
    Ok(())
}

/// Attach a hint that depends on the error category.
fn explain(err: lib_amm::AmmError) -> anyhow::Error {
    let hint = match err.kind() {
        ErrorKind::Protocol => "the AMM service rejected the request",
        ErrorKind::Decoding => "the AMM service sent an unexpected response",
        ErrorKind::Transport if err.is_cancelled() => "the request was cancelled",
        ErrorKind::Transport if err.is_timeout() => "the AMM service did not answer in time",
        ErrorKind::Transport => "could not reach the AMM service",
        ErrorKind::Config | ErrorKind::Encoding => "invalid request",
    };
    anyhow::Error::new(err).context(hint)
}

/// Ask on stdout and read the answer from `input`.
///
/// Runs before the Ctrl-C handler is installed, so an interrupt during the
/// blocking read terminates the process instead of waiting on the prompt.
fn confirm_swap(request: &SwapRequest, input: &mut impl BufRead) -> anyhow::Result<bool> {
    println!(
        "About to swap {} {} -> {} for wallet {}",
        request.amount,
        request.from_asset,
        request.to_asset,
        truncate_address(&request.wallet_address)
    );
    print!("Submit this swap? (yes/no): ");
    io::stdout().flush()?;

    let mut confirmation = String::new();
    let read = input
        .read_line(&mut confirmation)
        .context("Failed to read confirmation")?;
    if read == 0 {
        bail!("No confirmation on stdin; pass --yes to submit without prompting");
    }

    let confirmation = confirmation.trim().to_lowercase();
    Ok(confirmation == "yes" || confirmation == "y")
}

fn print_quote(quote: &QuoteResponse) {
    println!("Quote");
    println!("  In:   {} {}", quote.amount_in, quote.from_asset);
    println!("  Out:  {} {}", quote.amount_out, quote.to_asset);
    println!("  Fee:  {} {}", quote.fee, quote.from_asset);
}

fn print_swap(swap: &SwapResponse) {
    println!("Swap");
    println!("  Transaction: {}", swap.transaction_id);
    println!("  Status:      {}", swap.status);
    if let Some(submitted_at) = &swap.submitted_at {
        println!("  Submitted:   {}", submitted_at);
    }
    if let Some(message) = &swap.message {
        println!("  Message:     {}", message);
    }
}
