//! Shared credential handling for operator commands.

use clap::Args;
use faqdesk_core::{AppError, AppResult};
use faqdesk_service::Actor;
use rusqlite::Connection;

/// Operator credentials, shared by all moderation commands.
#[derive(Args, Debug)]
pub struct Credentials {
    /// Account name
    #[arg(short = 'u', long, env = "FAQDESK_USER")]
    pub username: String,

    /// Account password
    #[arg(short = 'p', long, env = "FAQDESK_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl Credentials {
    /// Authenticate against the users table.
    ///
    /// The error never reveals whether the account exists.
    pub fn login(&self, conn: &Connection) -> AppResult<Actor> {
        match faqdesk_store::authenticate(conn, &self.username, &self.password)? {
            Some(role) => Ok(Actor::new(&self.username, role)),
            None => Err(AppError::Auth),
        }
    }
}
