//! # Email Validation
//!
//! Validation produces a verdict, never an error. An invalid email is a
//! normal outcome that the form displays next to the field.
//!
//! The reactor only depends on the `EmailValidator` trait, so the rules
//! below can be swapped out without touching `Action`, `Mutation` or `State`.

use std::fmt;

/// Why an email was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    Empty,
    ContainsWhitespace,
    MissingAt,
    MultipleAt,
    EmptyLocalPart,
    /// Domain has no dot, or a dot-separated label is empty.
    InvalidDomain,
}

impl InvalidReason {
    /// Returns a human-readable message for display
    pub fn label(self) -> &'static str {
        match self {
            InvalidReason::Empty => "Email is required",
            InvalidReason::ContainsWhitespace => "Email cannot contain spaces",
            InvalidReason::MissingAt => "Email must contain '@'",
            InvalidReason::MultipleAt => "Email must contain a single '@'",
            InvalidReason::EmptyLocalPart => "Missing name before '@'",
            InvalidReason::InvalidDomain => "Domain looks incomplete",
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Verdict for a single email string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(InvalidReason),
}

/// Pure, synchronous email checker.
pub trait EmailValidator: Send + Sync {
    fn validate(&self, email: &str) -> ValidationResult;
}

/// Structural checks only. No DNS, no allow-lists.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEmailValidator;

impl EmailValidator for BasicEmailValidator {
    fn validate(&self, email: &str) -> ValidationResult {
        match check(email) {
            Ok(()) => ValidationResult::Valid,
            Err(reason) => ValidationResult::Invalid(reason),
        }
    }
}

fn check(email: &str) -> Result<(), InvalidReason> {
    if email.is_empty() {
        return Err(InvalidReason::Empty);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(InvalidReason::ContainsWhitespace);
    }

    let (local, domain) = email.split_once('@').ok_or(InvalidReason::MissingAt)?;
    if domain.contains('@') {
        return Err(InvalidReason::MultipleAt);
    }
    if local.is_empty() {
        return Err(InvalidReason::EmptyLocalPart);
    }
    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(InvalidReason::InvalidDomain);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_email_rules {
        ( $($name:ident: $input:expr => $expected:expr,)+ ) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(BasicEmailValidator.validate($input), $expected);
                }
            )+
        };
    }

    test_email_rules! {
        test_valid_simple: "user@example.com" => ValidationResult::Valid,
        test_valid_subdomain: "a.b+tag@mail.example.co.uk" => ValidationResult::Valid,
        test_empty: "" => ValidationResult::Invalid(InvalidReason::Empty),
        test_whitespace: "user @example.com" => ValidationResult::Invalid(InvalidReason::ContainsWhitespace),
        test_missing_at: "user.example.com" => ValidationResult::Invalid(InvalidReason::MissingAt),
        test_multiple_at: "a@b@example.com" => ValidationResult::Invalid(InvalidReason::MultipleAt),
        test_empty_local: "@example.com" => ValidationResult::Invalid(InvalidReason::EmptyLocalPart),
        test_domain_without_dot: "user@localhost" => ValidationResult::Invalid(InvalidReason::InvalidDomain),
        test_domain_trailing_dot: "user@example." => ValidationResult::Invalid(InvalidReason::InvalidDomain),
        test_domain_leading_dot: "user@.com" => ValidationResult::Invalid(InvalidReason::InvalidDomain),
    }

    #[test]
    fn test_reason_labels_are_distinct() {
        let reasons = [
            InvalidReason::Empty,
            InvalidReason::ContainsWhitespace,
            InvalidReason::MissingAt,
            InvalidReason::MultipleAt,
            InvalidReason::EmptyLocalPart,
            InvalidReason::InvalidDomain,
        ];
        let mut labels: Vec<_> = reasons.iter().map(|r| r.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), reasons.len());
    }
}
