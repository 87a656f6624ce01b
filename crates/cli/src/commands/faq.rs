//! Faq command handler.
//!
//! Curated-set listing and direct operator edits. Listing is open to
//! everyone (the curated set is the queryable knowledge base); add and
//! remove require operator credentials.

use clap::{Args, Subcommand};
use faqdesk_core::{config::AppConfig, AppResult};
use faqdesk_store::{open_store, CorpusRepository, SqliteCorpusRepository};

use super::auth::Credentials;

/// Manage the curated FAQ set
#[derive(Args, Debug)]
pub struct FaqCommand {
    #[command(subcommand)]
    pub action: FaqAction,
}

#[derive(Subcommand, Debug)]
pub enum FaqAction {
    /// List all curated entries
    List(FaqListCommand),
    /// Add a curated entry directly (operator)
    Add(FaqAddCommand),
    /// Remove a curated entry (operator)
    Remove(FaqRemoveCommand),
}

impl FaqCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        match &self.action {
            FaqAction::List(cmd) => cmd.execute(config).await,
            FaqAction::Add(cmd) => cmd.execute(config).await,
            FaqAction::Remove(cmd) => cmd.execute(config).await,
        }
    }
}

/// List all curated entries
#[derive(Args, Debug)]
pub struct FaqListCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl FaqListCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let conn = open_store(&config.db_path())?;
        let entries = SqliteCorpusRepository::new(&conn).load_all()?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else if entries.is_empty() {
            println!("The curated set is empty.");
        } else {
            for entry in &entries {
                if let Some(ref tag) = entry.tag {
                    println!("[{}]", tag);
                }
                println!("Q: {}", entry.question);
                println!("A: {}", entry.answer);
                println!();
            }
        }

        Ok(())
    }
}

/// Add a curated entry directly (operator)
#[derive(Args, Debug)]
pub struct FaqAddCommand {
    /// Question text
    pub question: String,

    /// Answer text
    pub answer: String,

    /// Optional category tag
    #[arg(short, long)]
    pub tag: Option<String>,

    #[command(flatten)]
    pub credentials: Credentials,
}

impl FaqAddCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let conn = open_store(&config.db_path())?;
        let actor = self.credentials.login(&conn)?;

        let inserted = faqdesk_service::add_entry(
            &conn,
            &actor,
            self.tag.clone(),
            &self.question,
            &self.answer,
        )?;

        if inserted {
            println!("Added to the curated set.");
        } else {
            println!("This question is already curated.");
        }

        Ok(())
    }
}

/// Remove a curated entry (operator)
#[derive(Args, Debug)]
pub struct FaqRemoveCommand {
    /// Question text of the entry to remove
    pub question: String,

    #[command(flatten)]
    pub credentials: Credentials,
}

impl FaqRemoveCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let conn = open_store(&config.db_path())?;
        let actor = self.credentials.login(&conn)?;

        if faqdesk_service::remove_entry(&conn, &actor, &self.question)? {
            println!("Removed from the curated set.");
        } else {
            println!("No curated entry with that question.");
        }

        Ok(())
    }
}
