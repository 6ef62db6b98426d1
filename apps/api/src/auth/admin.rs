// The administrator account
// One configured username/password pair; the password is kept only as a
// bcrypt hash

use bcrypt::{hash, verify};
use chrono::{DateTime, Utc};
use std::sync::RwLock;

use super::{AuthError, AuthResult};

/// Text shown when nobody has logged in yet
pub const FIRST_ACCESS: &str = "first access";

/// The single account allowed to manage the roster
#[derive(Debug)]
pub struct AdminAccount {
    username: String,
    password_hash: String,
    last_access: RwLock<Option<DateTime<Utc>>>,
}

impl AdminAccount {
    /// Hashes the configured password with the given bcrypt cost
    pub fn new(username: impl Into<String>, password: &str, cost: u32) -> AuthResult<Self> {
        Ok(Self {
            username: username.into(),
            password_hash: hash(password, cost)?,
            last_access: RwLock::new(None),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Checks a login attempt and records the access time on success
    pub fn login(&self, username: &str, password: &str) -> AuthResult<DateTime<Utc>> {
        if username != self.username || !verify(password, &self.password_hash)? {
            tracing::warn!("Rejected login for {:?}", username);
            return Err(AuthError::InvalidCredentials);
        }

        let now = Utc::now();
        if let Ok(mut last) = self.last_access.write() {
            *last = Some(now);
        }
        tracing::info!("Administrator {} logged in", self.username);
        Ok(now)
    }

    pub fn last_access(&self) -> Option<DateTime<Utc>> {
        self.last_access.read().ok().and_then(|last| *last)
    }

    /// Last access as `dd/mm/YYYY HH:MM:SS`, or [`FIRST_ACCESS`]
    pub fn last_access_display(&self) -> String {
        self.last_access()
            .map(format_access)
            .unwrap_or_else(|| FIRST_ACCESS.to_string())
    }
}

pub fn format_access(at: DateTime<Utc>) -> String {
    at.format("%d/%m/%Y %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn account() -> AdminAccount {
        AdminAccount::new("admin", "admin", 4).expect("hash")
    }

    #[test]
    fn accepts_configured_pair() {
        let admin = account();
        assert!(admin.login("admin", "admin").is_ok());
    }

    #[test]
    fn rejects_wrong_password() {
        let admin = account();
        let result = admin.login("admin", "nope");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn rejects_wrong_username() {
        let admin = account();
        assert!(admin.login("root", "admin").is_err());
    }

    #[test]
    fn first_access_until_login() {
        let admin = account();
        assert_eq!(admin.last_access_display(), FIRST_ACCESS);

        let at = admin.login("admin", "admin").unwrap();
        assert_eq!(admin.last_access(), Some(at));
        assert_eq!(admin.last_access_display(), format_access(at));
    }

    #[test]
    fn failed_login_keeps_last_access() {
        let admin = account();
        admin.login("admin", "wrong").unwrap_err();
        assert_eq!(admin.last_access(), None);
    }

    #[test]
    fn access_format() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(format_access(at), "09/03/2024 14:05:07");
    }
}
