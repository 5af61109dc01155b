//! Input validation for the presentation layer
//!
//! The session store performs no validation of its own; screens call these
//! helpers before submitting. The rules mirror what the backend enforces,
//! so a passing form rarely bounces.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::{RegisterData, Role};

/// Grades the platform accepts for students
pub const GRADE_RANGE: std::ops::RangeInclusive<u8> = 5..=11;

/// Minimum password length accepted by the backend
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate a person name field
pub fn validate_name(name: &str, field: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err(format!("{} is required", field));
    }
    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email is required".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email.trim()) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LEN
        ));
    }

    Ok(())
}

/// Validate a complete registration form
///
/// Students must carry a grade in the accepted range, teachers a non-empty
/// subject. Admin accounts are not self-service.
pub fn validate_registration(data: &RegisterData) -> Result<(), String> {
    validate_name(&data.first_name, "First name")?;
    validate_name(&data.last_name, "Last name")?;
    validate_email(&data.email)?;
    validate_password(&data.password)?;

    match data.role {
        Role::Student => match data.grade {
            Some(grade) if GRADE_RANGE.contains(&grade) => Ok(()),
            Some(_) => Err("Grade must be between 5 and 11".to_string()),
            None => Err("Grade is required for students".to_string()),
        },
        Role::Teacher => match &data.subject {
            Some(subject) if !subject.trim().is_empty() => Ok(()),
            _ => Err("Subject is required for teachers".to_string()),
        },
        Role::Admin => Err("Admin accounts cannot be self-registered".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(grade: Option<u8>) -> RegisterData {
        RegisterData {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@x.com".to_string(),
            password: "secret1".to_string(),
            role: Role::Student,
            grade,
            subject: None,
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ann@x.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_validate_password_length() {
        assert!(validate_password("secret1").is_ok());
        assert!(validate_password("12345").is_err());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_validate_name_rejects_blank() {
        assert!(validate_name("Ann", "First name").is_ok());
        assert!(validate_name("   ", "First name").is_err());
    }

    #[test]
    fn test_student_requires_grade_in_range() {
        assert!(validate_registration(&student(Some(9))).is_ok());
        assert!(validate_registration(&student(None)).is_err());
        assert!(validate_registration(&student(Some(4))).is_err());
        assert!(validate_registration(&student(Some(12))).is_err());
    }

    #[test]
    fn test_teacher_requires_subject() {
        let mut data = student(None);
        data.role = Role::Teacher;
        assert!(validate_registration(&data).is_err());

        data.subject = Some("Math".to_string());
        assert!(validate_registration(&data).is_ok());
    }

    #[test]
    fn test_admin_cannot_self_register() {
        let mut data = student(Some(9));
        data.role = Role::Admin;
        assert!(validate_registration(&data).is_err());
    }
}
