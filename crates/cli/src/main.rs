//! faqdesk CLI
//!
//! Main entry point for the faqdesk command-line tool.
//! Answers questions from a curated FAQ corpus and moderates submissions.

mod commands;

use clap::{Parser, Subcommand};
use commands::{
    AskCommand, AuditCommand, FaqCommand, PendingCommand, SubmitCommand, UserCommand,
};
use faqdesk_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// faqdesk - FAQ answering with a moderated knowledge base
#[derive(Parser, Debug)]
#[command(name = "faqdesk")]
#[command(about = "FAQ answering with a moderated knowledge base", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the data directory (default: current directory)
    #[arg(short, long, global = true, env = "FAQDESK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "FAQDESK_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a question against the curated FAQ
    Ask(AskCommand),

    /// Submit a candidate question/answer for moderation
    Submit(SubmitCommand),

    /// Moderate the pending queue (operator)
    Pending(PendingCommand),

    /// Manage the curated FAQ set
    Faq(FaqCommand),

    /// Manage accounts (operator)
    User(UserCommand),

    /// Show the audit log (operator)
    Audit(AuditCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from environment
    let config = AppConfig::load()?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.data_dir,
        cli.config,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("faqdesk CLI starting");
    tracing::debug!("Data directory: {:?}", config.data_dir);

    // Ensure the .faqdesk directory exists
    config.ensure_faqdesk_dir()?;

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Submit(_) => "submit",
        Commands::Pending(_) => "pending",
        Commands::Faq(_) => "faq",
        Commands::User(_) => "user",
        Commands::Audit(_) => "audit",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Submit(cmd) => cmd.execute(&config).await,
        Commands::Pending(cmd) => cmd.execute(&config).await,
        Commands::Faq(cmd) => cmd.execute(&config).await,
        Commands::User(cmd) => cmd.execute(&config).await,
        Commands::Audit(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
