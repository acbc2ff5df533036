use thiserror::Error;

/// A single structural rule violated by a candidate password.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("password must be between 8 and 100 characters long")]
    BadLength,

    #[error("password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("password must contain at least one symbol")]
    MissingSymbol,

    #[error("password must not contain whitespace")]
    ContainsWhitespace,
}

/// Structural password policy.
///
/// Checks every rule and reports all violations at once, so a caller can
/// surface the complete list in a single response.
pub struct PasswordPolicy;

impl PasswordPolicy {
    const MIN_LENGTH: usize = 8;
    const MAX_LENGTH: usize = 100;

    /// Validate a candidate password against the policy.
    ///
    /// # Arguments
    /// * `password` - Plaintext candidate password
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// Every violated rule, in declaration order
    pub fn validate(password: &str) -> Result<(), Vec<PolicyViolation>> {
        let mut violations = Vec::new();

        let length = password.chars().count();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            violations.push(PolicyViolation::BadLength);
        }

        if !password.chars().any(|c| c.is_uppercase()) {
            violations.push(PolicyViolation::MissingUppercase);
        }

        if !password.chars().any(|c| c.is_lowercase()) {
            violations.push(PolicyViolation::MissingLowercase);
        }

        // A symbol is anything that is neither alphanumeric nor whitespace.
        if !password
            .chars()
            .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
        {
            violations.push(PolicyViolation::MissingSymbol);
        }

        if password.chars().any(|c| c.is_whitespace()) {
            violations.push(PolicyViolation::ContainsWhitespace);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(PasswordPolicy::validate("Abc12345!").is_ok());
        assert!(PasswordPolicy::validate("Tr0ub4dor&3").is_ok());
    }

    #[test]
    fn test_too_short() {
        let violations = PasswordPolicy::validate("Ab1!").unwrap_err();
        assert!(violations.contains(&PolicyViolation::BadLength));
    }

    #[test]
    fn test_boundary_lengths() {
        // 8 characters is the minimum
        assert!(PasswordPolicy::validate("Abcde1!x").is_ok());
        // 7 characters is rejected
        assert_eq!(
            PasswordPolicy::validate("Abcde1!").unwrap_err(),
            vec![PolicyViolation::BadLength]
        );

        // 100 characters is the maximum
        let base = "Aa!".to_string() + &"x".repeat(97);
        assert_eq!(base.chars().count(), 100);
        assert!(PasswordPolicy::validate(&base).is_ok());

        // 101 characters is rejected
        let long = "Aa!".to_string() + &"x".repeat(98);
        assert_eq!(
            PasswordPolicy::validate(&long).unwrap_err(),
            vec![PolicyViolation::BadLength]
        );
    }

    #[test]
    fn test_missing_uppercase() {
        assert_eq!(
            PasswordPolicy::validate("abc12345!").unwrap_err(),
            vec![PolicyViolation::MissingUppercase]
        );
    }

    #[test]
    fn test_missing_lowercase() {
        assert_eq!(
            PasswordPolicy::validate("ABC12345!").unwrap_err(),
            vec![PolicyViolation::MissingLowercase]
        );
    }

    #[test]
    fn test_missing_symbol() {
        assert_eq!(
            PasswordPolicy::validate("Abc123456").unwrap_err(),
            vec![PolicyViolation::MissingSymbol]
        );
    }

    #[test]
    fn test_whitespace_rejected() {
        assert_eq!(
            PasswordPolicy::validate("Abc 12345!").unwrap_err(),
            vec![PolicyViolation::ContainsWhitespace]
        );
    }

    #[test]
    fn test_multiple_violations_reported_together() {
        let violations = PasswordPolicy::validate("abc").unwrap_err();
        assert!(violations.contains(&PolicyViolation::BadLength));
        assert!(violations.contains(&PolicyViolation::MissingUppercase));
        assert!(violations.contains(&PolicyViolation::MissingSymbol));
        assert!(!violations.contains(&PolicyViolation::MissingLowercase));
    }

    #[test]
    fn test_violation_messages_name_the_rule() {
        assert!(PolicyViolation::MissingUppercase
            .to_string()
            .contains("uppercase"));
        assert!(PolicyViolation::MissingLowercase
            .to_string()
            .contains("lowercase"));
        assert!(PolicyViolation::MissingSymbol.to_string().contains("symbol"));
    }
}
