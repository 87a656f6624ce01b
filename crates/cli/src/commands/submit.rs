//! Submit command handler.
//!
//! Queues a candidate question/answer pair for moderation directly,
//! without running a query first.

use clap::Args;
use faqdesk_core::{config::AppConfig, AppResult};
use faqdesk_service::SubmitOutcome;
use faqdesk_store::{open_store, SqliteCorpusRepository, SqlitePendingRepository};

/// Submit a candidate question/answer for moderation
#[derive(Args, Debug)]
pub struct SubmitCommand {
    /// Question text
    pub question: String,

    /// Candidate answer text
    pub answer: String,
}

impl SubmitCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing submit command");

        let conn = open_store(&config.db_path())?;
        let corpus = SqliteCorpusRepository::new(&conn);
        let pending = SqlitePendingRepository::new(&conn);

        match faqdesk_service::submit(&corpus, &pending, &self.question, &self.answer)? {
            SubmitOutcome::Queued => println!("Queued for review."),
            SubmitOutcome::AlreadyPending => {
                println!("Already submitted and awaiting review.")
            }
            SubmitOutcome::AlreadyCurated => {
                println!("This question already has a curated answer.")
            }
        }

        Ok(())
    }
}
