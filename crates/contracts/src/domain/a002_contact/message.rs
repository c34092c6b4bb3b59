use crate::shared::validation::{collect_errors, looks_like_email, FieldRules, ValidationError};
use serde::{Deserialize, Serialize};

pub const MESSAGE_MIN_CHARS: usize = 10;

/// Body of `POST /contact/`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let required = FieldRules::required();
        collect_errors([
            required.check("name", "Name", &self.name),
            self.check_email(),
            required.check("subject", "Subject", &self.subject),
            required
                .min_length(MESSAGE_MIN_CHARS)
                .check("message", "Message", &self.message),
        ])
    }

    fn check_email(&self) -> Result<(), ValidationError> {
        FieldRules::required().check("email", "Email", &self.email)?;
        if !looks_like_email(&self.email) {
            return Err(ValidationError::new("email", "Please enter a valid email"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_message() {
        let msg = ContactMessage {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            subject: "Hello".into(),
            message: "I enjoyed the last post.".into(),
        };
        assert!(msg.validate().is_ok());
    }

    #[test]
    fn test_invalid_message() {
        let msg = ContactMessage {
            name: "Jane".into(),
            email: "jane-at-example".into(),
            subject: "".into(),
            message: "short".into(),
        };
        let errors = msg.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["email", "subject", "message"]);
        assert_eq!(errors[0].message, "Please enter a valid email");
        assert_eq!(errors[2].message, "Message should be at least 10 characters");
    }

    #[test]
    fn test_serializes_flat_json() {
        let msg = ContactMessage {
            name: "A".into(),
            email: "a@b.co".into(),
            subject: "S".into(),
            message: "M".into(),
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["email"], "a@b.co");
    }
}
