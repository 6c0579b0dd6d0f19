//! Result display formatting
//!
//! Colored terminal rendering for domain results and registered users.

use colored::*;

use verdict_core::{ErrorCode, ErrorResult};

use crate::user::User;

/// Check if terminal supports colors
pub fn supports_color() -> bool {
    atty::is(atty::Stream::Stdout)
}

/// Format a registered user for display
pub fn format_user(user: &User, use_color: bool) -> String {
    let registered = user.created_at.format("%Y-%m-%d");

    if use_color {
        format!("{} (registered {})", user.to_string().green(), registered)
    } else {
        format!("{} (registered {})", user, registered)
    }
}

/// Format an error payload, one line per validation error
pub fn format_error<E: ErrorCode>(error: &ErrorResult<E>, use_color: bool) -> String {
    let headline = error.to_string();
    let mut lines = vec![if use_color {
        headline.red().bold().to_string()
    } else {
        headline
    }];

    if let Some(validation_errors) = error.validation_errors() {
        for validation_error in validation_errors {
            let line = format!("  - {}", validation_error);
            lines.push(if use_color {
                line.yellow().to_string()
            } else {
                line
            });
        }
    }

    lines.join("\n")
}
