use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use guard_core::COMMON_ALLERGIES;
use guard_core::matching::ALLERGEN_SYNONYMS;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

pub mod console;
pub mod controller;
pub mod events;
pub mod profile;
pub mod report;
pub mod scan;
pub mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::scan::ScanArgs;
use self::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "allergyguard", about = "Check a restaurant menu against your allergies")]
struct Cli {
    /// JSON config file, environment variables are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze one menu and print a report
    Scan(ScanArgs),
    /// Manage allergies and analyze menus from a prompt
    Interactive,
    /// List the quick-pick allergies and allergen synonyms
    Allergens,
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(cli));

    // The stdin reader may still be parked on a blocking read
    runtime.shutdown_timeout(Duration::from_millis(100));
    result
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = profile::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Scan(args) => {
            let cancel = CancellationToken::new();
            let on_ctrl_c = cancel.clone();
            tokio::spawn(async move {
                if signal::ctrl_c().await.is_ok() {
                    tracing::info!("Ctrl+C received, cancelling analysis");
                    on_ctrl_c.cancel();
                }
            });

            scan::run(args, config, cancel).await
        }
        Command::Interactive => run_interactive(config).await,
        Command::Allergens => {
            print_allergens();
            Ok(())
        }
    }
}

async fn run_interactive(config: guard_config::Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                tracing::info!("Shutdown requested");
                controller.shutdown();
            }
            joined = tasks.join_next() => match joined {
                None => break,
                Some(Ok(Ok(()))) => {}
                Some(Ok(Err(e))) => {
                    tracing::error!("task exited with error: {e}");
                    controller.shutdown();
                }
                Some(Err(e)) => {
                    tracing::error!("task panicked: {e}");
                    controller.shutdown();
                }
            }
        }
    }

    Ok(())
}

fn print_allergens() {
    println!("Common allergies: {}", COMMON_ALLERGIES.join(", "));
    println!("Allergen synonyms:");
    for (category, synonyms) in ALLERGEN_SYNONYMS {
        println!("  {category}: {}", synonyms.join(", "));
    }
}
