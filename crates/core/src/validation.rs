//! Payload validation.
//!
//! Input types derive [`validator::Validate`]; this module turns the derived
//! report into an [`AppError::Validation`] with one `field: reason` entry per
//! failing field, sorted by field name.

use repairdesk_shared::{AppError, AppResult};
use validator::{Validate, ValidationErrors};

/// Validates a payload.
pub fn validate<T: Validate>(input: &T) -> AppResult<()> {
    input.validate().map_err(|e| AppError::Validation(describe(&e)))
}

fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let reasons: Vec<String> = errs
                .iter()
                .map(|err| {
                    err.message
                        .as_ref()
                        .map_or_else(|| err.code.to_string(), ToString::to_string)
                })
                .collect();
            format!("{field}: {}", reasons.join(", "))
        })
        .collect();
    fields.sort();
    fields.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, max = 3))]
        code: String,
        #[validate(email(message = "must be an email address"))]
        email: String,
    }

    #[test]
    fn test_valid_payload() {
        let sample = Sample {
            code: "abc".to_string(),
            email: "a@b.io".to_string(),
        };
        assert!(validate(&sample).is_ok());
    }

    #[test]
    fn test_reports_every_field() {
        let sample = Sample {
            code: "abcd".to_string(),
            email: "nope".to_string(),
        };
        let Err(AppError::Validation(message)) = validate(&sample) else {
            panic!("expected a validation error");
        };
        assert_eq!(message, "code: length; email: must be an email address");
    }
}
