//! Ask command handler.
//!
//! Runs one query against the curated FAQ and prints the answer or the
//! unknown/empty-knowledge-base notice. An unknown query can be queued
//! for moderation in the same call with `--submit-answer`.

use clap::Args;
use faqdesk_core::{config::AppConfig, AppResult};
use faqdesk_service::{AskOutcome, SubmitOutcome};
use faqdesk_store::{open_store, SqliteCorpusRepository, SqlitePendingRepository};

/// Ask a question against the curated FAQ
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: String,

    /// If the question is unknown, queue it with this candidate answer
    #[arg(long)]
    pub submit_answer: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");

        let conn = open_store(&config.db_path())?;
        let corpus = SqliteCorpusRepository::new(&conn);

        let outcome = faqdesk_service::ask(&corpus, &self.question)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            match &outcome {
                AskOutcome::Answered { entry, score } => {
                    println!("{}", entry.answer);
                    tracing::debug!("Matched '{}' with score {:.3}", entry.question, score);
                }
                AskOutcome::Unknown { score } => {
                    println!("I don't know the answer to that yet (best score {:.2}).", score);
                }
                AskOutcome::EmptyCorpus => {
                    println!("The knowledge base is empty. An operator needs to add entries.");
                }
            }
        }

        // Optionally queue the unanswered question.
        if let Some(ref answer) = self.submit_answer {
            if matches!(outcome, AskOutcome::Unknown { .. } | AskOutcome::EmptyCorpus) {
                let pending = SqlitePendingRepository::new(&conn);
                let submitted =
                    faqdesk_service::submit(&corpus, &pending, &self.question, answer)?;
                match submitted {
                    SubmitOutcome::Queued => {
                        println!("Your question has been queued for review. Thank you!")
                    }
                    SubmitOutcome::AlreadyPending => {
                        println!("This question has already been submitted and is awaiting review.")
                    }
                    SubmitOutcome::AlreadyCurated => {
                        println!("This question already has a curated answer.")
                    }
                }
            }
        }

        Ok(())
    }
}
