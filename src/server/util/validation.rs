//! Input normalization for student registration.
//!
//! Registration accepts free-form name and email fields from a public form. These helpers
//! trim and normalize them before they reach the student table so that the unique email
//! constraint compares addresses case-insensitively.

use crate::server::error::validation::ValidationError;

/// Trims a student name and rejects it if nothing is left.
///
/// # Arguments
/// - `name` - Name as submitted by the form
///
/// # Returns
/// - `Ok(String)` - The trimmed name
/// - `Err(ValidationError::EmptyName)` - Name is empty or only whitespace
pub fn normalize_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    Ok(name.to_string())
}

/// Trims and lower-cases an email address, then checks its shape.
///
/// The check is syntactic only: exactly one `@`, a non-empty local part, and a domain made of
/// at least two non-empty dot-separated labels. Whitespace anywhere inside the address is
/// rejected.
///
/// # Arguments
/// - `email` - Email address as submitted by the form
///
/// # Returns
/// - `Ok(String)` - The normalized address used for lookups and storage
/// - `Err(ValidationError::InvalidEmail)` - Address is not syntactically valid
///
/// # Example
/// ```ignore
/// assert_eq!(normalize_email(" Ada@Example.COM ")?, "ada@example.com");
/// ```
pub fn normalize_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim().to_lowercase();

    if is_valid_email(&email) {
        Ok(email)
    } else {
        Err(ValidationError::InvalidEmail(email))
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();

    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
