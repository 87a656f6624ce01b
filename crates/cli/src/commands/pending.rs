//! Pending command handler.
//!
//! Operator moderation of the pending queue: list candidates, approve
//! them into the curated set, or reject them.

use clap::{Args, Subcommand};
use faqdesk_core::{config::AppConfig, AppResult};
use faqdesk_service::{ApproveOutcome, RejectOutcome};
use faqdesk_store::open_store;

use super::auth::Credentials;

/// Moderate the pending queue (operator)
#[derive(Args, Debug)]
pub struct PendingCommand {
    #[command(subcommand)]
    pub action: PendingAction,
}

#[derive(Subcommand, Debug)]
pub enum PendingAction {
    /// List questions awaiting review
    List(PendingListCommand),
    /// Approve a pending question into the curated set
    Approve(PendingApproveCommand),
    /// Reject (discard) a pending question
    Reject(PendingRejectCommand),
}

impl PendingCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        match &self.action {
            PendingAction::List(cmd) => cmd.execute(config).await,
            PendingAction::Approve(cmd) => cmd.execute(config).await,
            PendingAction::Reject(cmd) => cmd.execute(config).await,
        }
    }
}

/// List questions awaiting review
#[derive(Args, Debug)]
pub struct PendingListCommand {
    #[command(flatten)]
    pub credentials: Credentials,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl PendingListCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let conn = open_store(&config.db_path())?;
        let actor = self.credentials.login(&conn)?;

        let entries = faqdesk_service::list_pending(&conn, &actor)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else if entries.is_empty() {
            println!("No questions awaiting review.");
        } else {
            for entry in &entries {
                println!("Q: {}", entry.question);
                println!("A: {}", entry.answer);
                println!();
            }
        }

        Ok(())
    }
}

/// Approve a pending question into the curated set
#[derive(Args, Debug)]
pub struct PendingApproveCommand {
    /// Question text of the pending entry
    pub question: String,

    #[command(flatten)]
    pub credentials: Credentials,
}

impl PendingApproveCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let mut conn = open_store(&config.db_path())?;
        let actor = self.credentials.login(&conn)?;

        match faqdesk_service::approve(&mut conn, &actor, &self.question)? {
            ApproveOutcome::Approved => println!("Approved into the curated set."),
            ApproveOutcome::AlreadyCurated => {
                println!("Already curated; the pending entry was cleared.")
            }
            ApproveOutcome::NotPending => println!("No pending entry with that question."),
        }

        Ok(())
    }
}

/// Reject (discard) a pending question
#[derive(Args, Debug)]
pub struct PendingRejectCommand {
    /// Question text of the pending entry
    pub question: String,

    #[command(flatten)]
    pub credentials: Credentials,
}

impl PendingRejectCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let conn = open_store(&config.db_path())?;
        let actor = self.credentials.login(&conn)?;

        match faqdesk_service::reject(&conn, &actor, &self.question)? {
            RejectOutcome::Rejected => println!("Rejected."),
            RejectOutcome::NotPending => println!("No pending entry with that question."),
        }

        Ok(())
    }
}
