//! Command handlers for the faqdesk CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod ask;
pub mod audit;
pub mod auth;
pub mod faq;
pub mod pending;
pub mod submit;
pub mod user;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use audit::AuditCommand;
pub use faq::FaqCommand;
pub use pending::PendingCommand;
pub use submit::SubmitCommand;
pub use user::UserCommand;
