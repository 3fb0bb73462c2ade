//! Input validation functions
//!
//! Field-level checks shared by the backend (request validation) and the
//! CLI client (pre-flight checks before issuing a request).

use crate::types::ExerciseEntryInput;

/// Validate a username (3-50 chars, letters/digits/underscore)
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters".to_string());
    }
    if username.len() > 50 {
        return Err("Username too long".to_string());
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err("Username may only contain letters, digits and underscores".to_string());
    }
    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate a single exercise entry of a create-workout request
pub fn validate_exercise_entry(entry: &ExerciseEntryInput) -> Result<(), String> {
    if entry.exercise_name.trim().is_empty() {
        return Err("Exercise name cannot be empty".to_string());
    }
    if entry.exercise_name.len() > 255 {
        return Err("Exercise name too long".to_string());
    }
    if entry.weight.is_nan() || entry.weight.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if entry.weight < 0.0 {
        return Err("Weight cannot be negative".to_string());
    }
    if entry.reps < 0 {
        return Err("Reps cannot be negative".to_string());
    }
    if entry.sets < 0 {
        return Err("Sets cannot be negative".to_string());
    }
    Ok(())
}
