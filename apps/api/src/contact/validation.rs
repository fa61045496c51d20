use crate::contact::models::{ContactForm, ContactSubmission};
use crate::errors::AppError;

pub const MISSING_FIELDS: &str = "Missing fields";

/// Trims every field and rejects the form if any of them ends up empty.
pub fn validate_contact(form: ContactForm) -> Result<ContactSubmission, AppError> {
    let name = trimmed(form.name);
    let email = trimmed(form.email);
    let message = trimmed(form.message);

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    }

    Ok(ContactSubmission {
        name,
        email,
        message,
    })
}

fn trimmed(field: Option<String>) -> String {
    field.as_deref().map(str::trim).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> ContactForm {
        ContactForm {
            name: name.map(String::from),
            email: email.map(String::from),
            message: message.map(String::from),
        }
    }

    fn assert_missing(result: Result<ContactSubmission, AppError>) {
        match result {
            Err(AppError::Validation(msg)) => assert_eq!(msg, MISSING_FIELDS),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let ok = validate_contact(form(Some("  Jane "), Some("jane@x.com\n"), Some("\tHi")))
            .unwrap();
        assert_eq!(ok.name, "Jane");
        assert_eq!(ok.email, "jane@x.com");
        assert_eq!(ok.message, "Hi");
    }

    #[test]
    fn test_inner_whitespace_kept() {
        let ok = validate_contact(form(Some("Jane Doe"), Some("j@x.com"), Some("line one\nline two")))
            .unwrap();
        assert_eq!(ok.name, "Jane Doe");
        assert_eq!(ok.message, "line one\nline two");
    }

    #[test]
    fn test_missing_name() {
        assert_missing(validate_contact(form(None, Some("j@x.com"), Some("Hi"))));
    }

    #[test]
    fn test_missing_email() {
        assert_missing(validate_contact(form(Some("Jane"), None, Some("Hi"))));
    }

    #[test]
    fn test_whitespace_only_message() {
        assert_missing(validate_contact(form(Some("Jane"), Some("j@x.com"), Some("   \n"))));
    }

    #[test]
    fn test_empty_form() {
        assert_missing(validate_contact(ContactForm::default()));
    }
}
