/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Mock admin authentication
//!
//! A single configured account. There is no user database; login is a plain
//! credential comparison and the result lives in the session.

use chrono::Utc;

use crate::models::AdminUser;

/// Checks admin credentials against the configured account
#[derive(Debug, Clone)]
pub struct MockAuth {
    email: String,
    password: String,
    display_name: String,
}

impl MockAuth {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        MockAuth {
            email: email.into(),
            password: password.into(),
            display_name: "Administrator".to_string(),
        }
    }

    /// Email is compared trimmed and case-insensitively, password exactly
    pub fn login(&self, email: &str, password: &str) -> bool {
        email.trim().eq_ignore_ascii_case(self.email.trim()) && password == self.password
    }

    /// Build the session record for a successful login
    pub fn admin_user(&self) -> AdminUser {
        AdminUser {
            email: self.email.clone(),
            name: self.display_name.clone(),
            logged_in_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_configured_credentials() {
        let auth = MockAuth::new("admin@example.com", "s3cret");
        assert!(auth.login("admin@example.com", "s3cret"));
        assert!(auth.login("  Admin@Example.com ", "s3cret"));
    }

    #[test]
    fn rejects_wrong_password_or_email() {
        let auth = MockAuth::new("admin@example.com", "s3cret");
        assert!(!auth.login("admin@example.com", "S3cret"));
        assert!(!auth.login("someone@example.com", "s3cret"));
        assert!(!auth.login("", ""));
    }

    #[test]
    fn admin_user_uses_configured_email() {
        let auth = MockAuth::new("admin@example.com", "s3cret");
        assert_eq!(auth.admin_user().email, "admin@example.com");
    }
}
