//! Field validation rules for the post and contact forms.
//!
//! Forms are validated before any request is issued; a failing form never
//! reaches the API access layer.

use thiserror::Error;

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Constraints for one text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl FieldRules {
    pub const fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Check `value` and report the first violated rule.
    ///
    /// Lengths are counted in characters, not bytes.
    pub fn check(&self, field: &'static str, label: &str, value: &str) -> Result<(), ValidationError> {
        if self.required && value.trim().is_empty() {
            return Err(ValidationError::new(field, format!("{} is required", label)));
        }

        let len = value.chars().count();

        if let Some(min) = self.min_length {
            if len < min {
                return Err(ValidationError::new(
                    field,
                    format!("{} should be at least {} characters", label, min),
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(ValidationError::new(
                    field,
                    format!("{} should be less than {} characters", label, max),
                ));
            }
        }

        Ok(())
    }
}

/// Run every check and collect the failures; `Ok` when all pass.
pub fn collect_errors<I>(checks: I) -> Result<(), Vec<ValidationError>>
where
    I: IntoIterator<Item = Result<(), ValidationError>>,
{
    let errors: Vec<ValidationError> = checks.into_iter().filter_map(Result::err).collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Loose `local@domain.tld` check, enough to catch typos before submitting.
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rules = FieldRules::required();
        assert!(rules.check("title", "Title", "Hello").is_ok());
        let err = rules.check("title", "Title", "   ").unwrap_err();
        assert_eq!(err.field, "title");
        assert_eq!(err.to_string(), "Title is required");
    }

    #[test]
    fn test_length_counts_chars() {
        let rules = FieldRules::default().max_length(3);
        assert!(rules.check("x", "X", "äöü").is_ok());
        assert!(rules.check("x", "X", "äöüß").is_err());
        assert!(FieldRules::default().check("x", "X", "").is_ok());
    }

    #[test]
    fn test_collect_errors() {
        let result = collect_errors(vec![
            Ok(()),
            Err(ValidationError::new("a", "A is required")),
            Err(ValidationError::new("b", "B is required")),
        ]);
        let fields: Vec<&str> = result.unwrap_err().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["a", "b"]);
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("jane@example.com"));
        assert!(looks_like_email(" jane.doe@mail.example.org "));
        assert!(!looks_like_email("jane"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("jane@example"));
        assert!(!looks_like_email("jane@@example.com"));
        assert!(!looks_like_email("jane doe@example.com"));
    }
}
