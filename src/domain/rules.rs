//! Ordered field rules.
//!
//! Each rule pairs a predicate over the trimmed field value with the error
//! reported when the predicate does not hold. Rules for a field are checked in
//! order and the first failure wins.

use super::errors::ValidationError;

pub(crate) struct Rule {
    passes: fn(&str) -> bool,
    error: ValidationError,
}

impl Rule {
    pub(crate) fn new(passes: fn(&str) -> bool, error: ValidationError) -> Self {
        Self { passes, error }
    }
}

/// Return the error of the first rule `value` fails, if any.
pub(crate) fn first_failure(value: &str, rules: &[Rule]) -> Option<ValidationError> {
    rules
        .iter()
        .find(|rule| !(rule.passes)(value))
        .map(|rule| rule.error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_failing_rule_wins() {
        let rules = [
            Rule::new(|v| !v.is_empty(), ValidationError::PhoneRequired),
            Rule::new(|v| v.len() > 100, ValidationError::InvalidPhone),
        ];

        assert_eq!(first_failure("", &rules), Some(ValidationError::PhoneRequired));
        assert_eq!(first_failure("abc", &rules), Some(ValidationError::InvalidPhone));
    }

    #[test]
    fn test_no_rules_fail() {
        let rules = [Rule::new(|v| !v.is_empty(), ValidationError::PhoneRequired)];
        assert_eq!(first_failure("x", &rules), None);
        assert_eq!(first_failure("anything", &[]), None);
    }
}
