//! User registry domain model
//!
//! The producing side of the result types: registration reports field
//! problems as validation errors and expected business failures as coded
//! errors, reserving the application error channel for real faults.

use chrono::{DateTime, Local};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use verdict_core::{ErrorCode, ValidationError, ValueResult, VoidResult};

// Both cases are allowed here; uniqueness is what is case-insensitive.
static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]{3,32}$")
        .expect("Invalid username pattern - this is a compile-time constant")
});

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub created_at: DateTime<Local>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.first_name, self.last_name, self.username
        )
    }
}

/// Request payload for registering a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
}

/// Expected failures of [`UserDirectory::create_user`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CreateUserError {
    UsernameNotAvailable,
    WeakPassword,
}

impl ErrorCode for CreateUserError {
    fn description(&self) -> Option<&'static str> {
        match self {
            CreateUserError::UsernameNotAvailable => Some("This username is already taken"),
            CreateUserError::WeakPassword => {
                Some("Passwords need at least 8 characters mixing letters and digits")
            }
        }
    }
}

/// Expected failures of [`UserDirectory::remove_user`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RemoveUserError {
    UserNotFound,
}

impl ErrorCode for RemoveUserError {
    fn description(&self) -> Option<&'static str> {
        match self {
            RemoveUserError::UserNotFound => Some("No user with that username exists"),
        }
    }
}

/// In-memory user registry
///
/// Persistence is handled by the storage adapter.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UserDirectory {
    pub users: Vec<User>,
}

impl UserDirectory {
    /// Create a new empty directory
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Register a new user.
    ///
    /// Field problems come back as validation errors, a weak password or a
    /// taken username as coded failures; on success the stored user is
    /// returned.
    pub fn create_user(&mut self, new_user: NewUser) -> ValueResult<User, CreateUserError> {
        let mut problems = Vec::new();
        if new_user.first_name.trim().is_empty() {
            problems.push(ValidationError::for_field("first_name", "First name is required"));
        }
        if new_user.last_name.trim().is_empty() {
            problems.push(ValidationError::for_field("last_name", "Last name is required"));
        }
        if !USERNAME_REGEX.is_match(&new_user.username) {
            problems.push(ValidationError::for_field(
                "username",
                "Usernames are 3-32 letters, digits or underscores",
            ));
        }
        if !problems.is_empty() {
            return ValueResult::validation_failure(problems);
        }

        if !is_password_strong(&new_user.password) {
            return ValueResult::fail(CreateUserError::WeakPassword);
        }

        if self.find_user(&new_user.username).is_some() {
            return ValueResult::fail(CreateUserError::UsernameNotAvailable);
        }

        let user = User {
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            username: new_user.username,
            created_at: Local::now(),
        };
        self.users.push(user.clone());
        ValueResult::success(user)
    }

    /// Remove a user by username (case-insensitive).
    pub fn remove_user(&mut self, username: &str) -> VoidResult<RemoveUserError> {
        match self
            .users
            .iter()
            .position(|u| u.username.eq_ignore_ascii_case(username))
        {
            Some(index) => {
                self.users.remove(index);
                VoidResult::success()
            }
            None => VoidResult::fail(RemoveUserError::UserNotFound),
        }
    }

    /// Look up a user by username (case-insensitive)
    pub fn find_user(&self, username: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(username))
    }

    /// All users sorted by username
    pub fn list_all(&self) -> Vec<&User> {
        let mut list: Vec<&User> = self.users.iter().collect();
        list.sort_by_key(|u| u.username.to_lowercase());
        list
    }

    /// Count registered users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if the directory is empty
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// At least 8 characters mixing letters and digits
fn is_password_strong(password: &str) -> bool {
    password.len() >= 8
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_core::Fallible;

    fn rick(username: &str) -> NewUser {
        NewUser {
            first_name: "Rick".to_string(),
            last_name: "Drizin".to_string(),
            username: username.to_string(),
            password: "correct horse 1".to_string(),
        }
    }

    #[test]
    fn test_create_user_ok() {
        let mut directory = UserDirectory::new();

        let (user, error) = directory.create_user(rick("drizin")).into_parts();

        assert!(error.is_none());
        let user = user.unwrap();
        assert_eq!(user.username, "drizin");
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_create_user_username_not_available() {
        let mut directory = UserDirectory::new();
        let _ = directory.create_user(rick("drizin"));

        // Uniqueness is case-insensitive.
        let (user, error) = directory.create_user(rick("Drizin")).into_parts();

        assert!(user.is_none());
        let error = error.unwrap();
        assert!(error.matches_code(CreateUserError::UsernameNotAvailable));
        assert_eq!(error.message(), "This username is already taken");
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_create_user_weak_password() {
        let mut directory = UserDirectory::new();
        let mut new_user = rick("drizin");
        new_user.password = "short".to_string();

        let result = directory.create_user(new_user);

        assert!(!result.is_success());
        assert!(
            result
                .error()
                .unwrap()
                .matches_code(CreateUserError::WeakPassword)
        );
        assert!(directory.is_empty());
    }

    #[test]
    fn test_create_user_field_validation() {
        let mut directory = UserDirectory::new();
        let new_user = NewUser {
            first_name: "".to_string(),
            last_name: "Drizin".to_string(),
            username: "d!".to_string(),
            password: "correct horse 1".to_string(),
        };

        let (user, error) = directory.create_user(new_user).into_parts();

        assert!(user.is_none());
        let error = error.unwrap();
        // No code, only field-level problems, in the order they were found.
        assert_eq!(error.code(), None);
        let problems = error.validation_errors().unwrap();
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].field.as_deref(), Some("first_name"));
        assert_eq!(problems[1].field.as_deref(), Some("username"));
    }

    #[test]
    fn test_remove_user() {
        let mut directory = UserDirectory::new();
        let _ = directory.create_user(rick("drizin"));

        let result = directory.remove_user("DRIZIN");

        assert!(result.is_success());
        assert!(directory.is_empty());
    }

    #[test]
    fn test_remove_user_not_found() {
        let mut directory = UserDirectory::new();

        let result = directory.remove_user("nobody");

        assert_eq!(
            result.to_optional_error(),
            Some(RemoveUserError::UserNotFound)
        );
    }

    #[test]
    fn test_find_user_case_insensitive() {
        let mut directory = UserDirectory::new();
        let _ = directory.create_user(rick("drizin"));

        assert!(directory.find_user("Drizin").is_some());
        assert!(directory.find_user("other").is_none());
    }
}
