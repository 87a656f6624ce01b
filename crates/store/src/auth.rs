//! Account storage and credential verification.
//!
//! Passwords are stored as bcrypt hashes. `authenticate` deliberately
//! reports a single undifferentiated failure for both unknown accounts and
//! wrong passwords, to avoid user enumeration.

use faqdesk_core::{AppError, AppResult, Role};
use rusqlite::{params, Connection, OptionalExtension};

/// Verify credentials and return the account role, or `None` on any
/// mismatch (unknown account and wrong password are indistinguishable).
pub fn authenticate(conn: &Connection, username: &str, password: &str) -> AppResult<Option<Role>> {
    let row: Option<(String, String)> = conn
        .query_row(
            "SELECT password_hash, role FROM users WHERE username = ?1",
            params![username],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()
        .map_err(|e| AppError::Store(format!("Failed to look up account: {}", e)))?;

    let Some((password_hash, role)) = row else {
        tracing::debug!("Authentication failed for '{}'", username);
        return Ok(None);
    };

    let verified = bcrypt::verify(password, &password_hash)
        .map_err(|e| AppError::Store(format!("Failed to verify password hash: {}", e)))?;

    if !verified {
        tracing::debug!("Authentication failed for '{}'", username);
        return Ok(None);
    }

    Ok(Some(Role::parse(&role)?))
}

/// Create an account with a freshly hashed password.
/// Returns false if the username is already taken.
pub fn register_user(
    conn: &Connection,
    username: &str,
    password: &str,
    role: Role,
) -> AppResult<bool> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(AppError::Invalid(
            "username and password must not be blank".to_string(),
        ));
    }

    let hash = hash_password(password)?;

    let inserted = conn
        .execute(
            "INSERT OR IGNORE INTO users (username, password_hash, role) VALUES (?1, ?2, ?3)",
            params![username, hash, role.as_str()],
        )
        .map_err(|e| AppError::Store(format!("Failed to register account: {}", e)))?;

    if inserted > 0 {
        tracing::info!("Registered account '{}' with role {}", username, role.as_str());
    }

    Ok(inserted > 0)
}

/// Replace an account's password with a freshly hashed one.
/// Returns false if the account does not exist.
pub fn reset_password(conn: &Connection, username: &str, new_password: &str) -> AppResult<bool> {
    if new_password.is_empty() {
        return Err(AppError::Invalid("password must not be blank".to_string()));
    }

    let hash = hash_password(new_password)?;

    let updated = conn
        .execute(
            "UPDATE users SET password_hash = ?1 WHERE username = ?2",
            params![hash, username],
        )
        .map_err(|e| AppError::Store(format!("Failed to reset password: {}", e)))?;

    Ok(updated > 0)
}

/// Whether any account exists yet. Used to allow bootstrapping the first
/// (admin) account without credentials.
pub fn has_accounts(conn: &Connection) -> AppResult<bool> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .map_err(|e| AppError::Store(format!("Failed to count accounts: {}", e)))?;
    Ok(count > 0)
}

fn hash_password(password: &str) -> AppResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Store(format!("Failed to hash password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_store_in_memory;

    #[test]
    fn test_register_and_authenticate() {
        let conn = open_store_in_memory().unwrap();

        assert!(register_user(&conn, "ops", "hunter2", Role::Admin).unwrap());
        let role = authenticate(&conn, "ops", "hunter2").unwrap();
        assert_eq!(role, Some(Role::Admin));
    }

    #[test]
    fn test_unknown_user_and_wrong_password_are_indistinguishable() {
        let conn = open_store_in_memory().unwrap();
        register_user(&conn, "ops", "hunter2", Role::Admin).unwrap();

        let unknown = authenticate(&conn, "nobody", "hunter2").unwrap();
        let wrong = authenticate(&conn, "ops", "wrong").unwrap();
        assert_eq!(unknown, wrong);
        assert_eq!(unknown, None);
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let conn = open_store_in_memory().unwrap();

        assert!(register_user(&conn, "ops", "hunter2", Role::Admin).unwrap());
        assert!(!register_user(&conn, "ops", "other", Role::User).unwrap());

        // Original password still works.
        assert_eq!(
            authenticate(&conn, "ops", "hunter2").unwrap(),
            Some(Role::Admin)
        );
    }

    #[test]
    fn test_reset_password() {
        let conn = open_store_in_memory().unwrap();
        register_user(&conn, "ops", "hunter2", Role::User).unwrap();

        assert!(reset_password(&conn, "ops", "correct horse").unwrap());
        assert_eq!(authenticate(&conn, "ops", "hunter2").unwrap(), None);
        assert_eq!(
            authenticate(&conn, "ops", "correct horse").unwrap(),
            Some(Role::User)
        );

        assert!(!reset_password(&conn, "nobody", "pw").unwrap());
    }

    #[test]
    fn test_blank_credentials_rejected() {
        let conn = open_store_in_memory().unwrap();
        assert!(register_user(&conn, "  ", "pw", Role::User).is_err());
        assert!(register_user(&conn, "ops", "", Role::User).is_err());
    }
}
