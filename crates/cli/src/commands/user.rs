//! User command handler.
//!
//! Account management. The very first account can be registered without
//! credentials (bootstrap); after that, registration and password resets
//! require an operator.

use clap::{Args, Subcommand};
use faqdesk_core::{config::AppConfig, AppError, AppResult, Role};
use faqdesk_store::open_store;

use super::auth::Credentials;

/// Manage accounts (operator)
#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    pub action: UserAction,
}

#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// Register a new account
    Register(UserRegisterCommand),
    /// Reset an account's password
    ResetPassword(UserResetPasswordCommand),
}

impl UserCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        match &self.action {
            UserAction::Register(cmd) => cmd.execute(config).await,
            UserAction::ResetPassword(cmd) => cmd.execute(config).await,
        }
    }
}

/// Register a new account
#[derive(Args, Debug)]
pub struct UserRegisterCommand {
    /// Account name for the new account
    pub name: String,

    /// Password for the new account
    pub new_password: String,

    /// Grant the admin role
    #[arg(long)]
    pub admin: bool,

    /// Operator account name (not required for the first account)
    #[arg(short = 'u', long, env = "FAQDESK_USER")]
    pub username: Option<String>,

    /// Operator password (not required for the first account)
    #[arg(short = 'p', long, env = "FAQDESK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl UserRegisterCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let conn = open_store(&config.db_path())?;

        // Bootstrap: the very first account needs no credentials and is
        // always an admin.
        let bootstrap = !faqdesk_store::has_accounts(&conn)?;
        let role = if bootstrap || self.admin {
            Role::Admin
        } else {
            Role::User
        };

        if !bootstrap {
            let credentials = match (&self.username, &self.password) {
                (Some(username), Some(password)) => Credentials {
                    username: username.clone(),
                    password: password.clone(),
                },
                _ => return Err(AppError::Auth),
            };
            let actor = credentials.login(&conn)?;
            if !actor.role.is_admin() {
                return Err(AppError::Forbidden(format!(
                    "'{}' is not an operator",
                    actor.username
                )));
            }
        }

        if faqdesk_store::register_user(&conn, &self.name, &self.new_password, role)? {
            println!("Registered account '{}' ({}).", self.name, role.as_str());
        } else {
            println!("An account named '{}' already exists.", self.name);
        }

        Ok(())
    }
}

/// Reset an account's password
#[derive(Args, Debug)]
pub struct UserResetPasswordCommand {
    /// Account to reset
    pub name: String,

    /// New password
    pub new_password: String,

    #[command(flatten)]
    pub credentials: Credentials,
}

impl UserResetPasswordCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let conn = open_store(&config.db_path())?;

        let actor = self.credentials.login(&conn)?;
        if !actor.role.is_admin() {
            return Err(AppError::Forbidden(format!(
                "'{}' is not an operator",
                actor.username
            )));
        }

        if faqdesk_store::reset_password(&conn, &self.name, &self.new_password)? {
            println!("Password updated for '{}'.", self.name);
        } else {
            println!("No account named '{}'.", self.name);
        }

        Ok(())
    }
}
