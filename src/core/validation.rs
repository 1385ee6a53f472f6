//! Input validation, decoupled from the transport layer. Each function
//! collects every violation it finds instead of stopping at the first, so
//! a rejected request names all the offending fields at once.

use crate::core::errors::{DirectoryError, FieldError};
use crate::core::models::{NewUser, UserPatch};

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 50;
pub const PASSWORD_MIN_LENGTH: usize = 8;

fn check_name(name: &str, violations: &mut Vec<FieldError>) {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        violations.push(FieldError::new(
            "name",
            "Invalid name",
            "name cannot be empty".to_string(),
        ));
    } else if trimmed.chars().count() < NAME_MIN_LENGTH || trimmed.chars().count() > NAME_MAX_LENGTH {
        violations.push(FieldError::new(
            "name",
            "Invalid name length",
            format!(
                "name must be between {} and {} characters",
                NAME_MIN_LENGTH, NAME_MAX_LENGTH
            ),
        ));
    }
}

fn check_age(age: i64, violations: &mut Vec<FieldError>) {
    if age < 0 {
        violations.push(FieldError::new(
            "age",
            "Invalid age",
            "age must be greater than or equal to 0".to_string(),
        ));
    }
}

fn check_password(password: &str, violations: &mut Vec<FieldError>) {
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        violations.push(FieldError::new(
            "password",
            "Password too short",
            format!("password must be at least {} characters", PASSWORD_MIN_LENGTH),
        ));
    }
}

/// The teacher-of-record email check: shape only, no full RFC parsing.
pub fn validate_email(email: &str) -> Result<(), DirectoryError> {
    if email.is_empty() {
        return Err(DirectoryError::MissingEmail);
    }
    if !email.contains('@') || !email.contains('.') || email.len() < 5 {
        return Err(DirectoryError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

pub fn validate_new_user(input: &NewUser) -> Result<(), DirectoryError> {
    validate_email(&input.email)?;

    let mut violations = Vec::new();
    check_name(&input.name, &mut violations);
    if let Some(age) = input.age {
        check_age(age, &mut violations);
    }
    if let Some(ref password) = input.password {
        check_password(password, &mut violations);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(DirectoryError::InvalidInput(violations))
    }
}

/// Only fields actually supplied in the patch are checked; absent fields
/// cannot fail.
pub fn validate_user_patch(patch: &UserPatch) -> Result<(), DirectoryError> {
    if let Some(ref email) = patch.email {
        validate_email(email)?;
    }

    let mut violations = Vec::new();
    if let Some(ref name) = patch.name {
        check_name(name, &mut violations);
    }
    if let Some(age) = patch.age {
        check_age(age, &mut violations);
    }
    if let Some(ref password) = patch.password {
        check_password(password, &mut violations);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(DirectoryError::InvalidInput(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> NewUser {
        NewUser {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            age: Some(30),
            is_active: true,
            password: None,
        }
    }

    #[test]
    fn accepts_valid_input() {
        assert!(validate_new_user(&valid_input()).is_ok());
    }

    #[test]
    fn rejects_missing_email() {
        let mut input = valid_input();
        input.email = String::new();
        assert!(matches!(
            validate_new_user(&input),
            Err(DirectoryError::MissingEmail)
        ));
    }

    #[test]
    fn rejects_malformed_email() {
        let mut input = valid_input();
        input.email = "not-an-email".to_string();
        assert!(matches!(
            validate_new_user(&input),
            Err(DirectoryError::InvalidEmail(_))
        ));
    }

    #[test]
    fn collects_all_field_violations() {
        let mut input = valid_input();
        input.name = "J".to_string();
        input.age = Some(-1);
        input.password = Some("short".to_string());
        match validate_new_user(&input) {
            Err(DirectoryError::InvalidInput(violations)) => {
                let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
                assert_eq!(fields, vec!["name", "age", "password"]);
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn name_bounds_are_inclusive() {
        let mut input = valid_input();
        input.name = "Jo".to_string();
        assert!(validate_new_user(&input).is_ok());
        input.name = "x".repeat(50);
        assert!(validate_new_user(&input).is_ok());
        input.name = "x".repeat(51);
        assert!(validate_new_user(&input).is_err());
    }

    #[test]
    fn password_length_is_measured_in_characters() {
        let mut input = valid_input();
        // Seven characters but fourteen bytes; must still be too short.
        input.password = Some("ééééééé".to_string());
        assert!(matches!(
            validate_new_user(&input),
            Err(DirectoryError::InvalidInput(_))
        ));

        input.password = Some("éééééééé".to_string());
        assert!(validate_new_user(&input).is_ok());
    }

    #[test]
    fn patch_checks_only_supplied_fields() {
        let patch = UserPatch {
            age: Some(31),
            ..Default::default()
        };
        assert!(validate_user_patch(&patch).is_ok());

        let patch = UserPatch {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(
            validate_user_patch(&patch),
            Err(DirectoryError::InvalidInput(_))
        ));
    }
}
