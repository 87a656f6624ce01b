//! Audit command handler.

use clap::Args;
use faqdesk_core::{config::AppConfig, AppResult};
use faqdesk_store::open_store;

use super::auth::Credentials;

/// Show the audit log (operator)
#[derive(Args, Debug)]
pub struct AuditCommand {
    #[command(flatten)]
    pub credentials: Credentials,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AuditCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let conn = open_store(&config.db_path())?;
        let actor = self.credentials.login(&conn)?;

        let records = faqdesk_service::list_audit(&conn, &actor)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&records)?);
        } else if records.is_empty() {
            println!("The audit log is empty.");
        } else {
            for record in &records {
                println!(
                    "{}  {}  {}  {}",
                    record.at.to_rfc3339(),
                    record.username,
                    record.action,
                    record.details
                );
            }
        }

        Ok(())
    }
}
