//! Faqdesk Core Library
//!
//! This crate provides the foundational utilities for the faqdesk CLI:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management
//! - Shared domain types (`FaqEntry`, `PendingEntry`, `MatchResult`, ...)

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::{AuditRecord, FaqEntry, MatchResult, ModerationDecision, PendingEntry, Role};
