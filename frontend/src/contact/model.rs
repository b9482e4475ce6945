use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_submitting(self) -> bool {
        self == SubmissionState::Submitting
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// The form control name, also the key sent to the form handler.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// What the visitor typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormInput {
    #[cfg(test)]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// Returns the first field that would not pass the browser's own
    /// `required` / `type="email"` checks.
    pub fn validate(&self) -> Result<(), Field> {
        if self.name.trim().is_empty() {
            return Err(Field::Name);
        }
        if !is_valid_email(&self.email) {
            return Err(Field::Email);
        }
        if self.message.trim().is_empty() {
            return Err(Field::Message);
        }
        Ok(())
    }
}

/// Basic `local@domain` shape, the same leniency as an `<input type="email">`.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .split('.')
        .all(|label| !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'))
}

/// Body posted to the form handler. Values go out exactly as typed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
    #[serde(rename = "_captcha")]
    pub captcha: String,
}

impl From<&ContactFormInput> for FormPayload {
    fn from(input: &ContactFormInput) -> Self {
        Self {
            name: input.name.clone(),
            email: input.email.clone(),
            message: input.message.clone(),
            subject: config::FORM_SUBJECT.to_string(),
            captcha: config::FORM_CAPTCHA.to_string(),
        }
    }
}

/// Acknowledgment returned by the form handler on success.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub next: Option<String>,
}

impl Ack {
    // The status code already decided success, so a body we can't read is
    // just an empty ack.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
        assert!(is_valid_email("  ada@example.com  "));
        assert!(is_valid_email("root@localhost"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "ada", "@example.com", "ada@", "ada@@example.com", "ada@exa mple.com", "ada@example..com", "ada@.com", "ada@example.com."] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn validate_reports_first_bad_field() {
        assert_eq!(ContactFormInput::new("", "nope", "").validate(), Err(Field::Name));
        assert_eq!(ContactFormInput::new("Ada", "nope", "").validate(), Err(Field::Email));
        assert_eq!(ContactFormInput::new("Ada", "ada@example.com", "   ").validate(), Err(Field::Message));
        assert_eq!(ContactFormInput::new("Ada", "ada@example.com", "Hi").validate(), Ok(()));
    }

    #[test]
    fn payload_carries_metadata_and_no_redirect() {
        let input = ContactFormInput::new("Ada", "ada@example.com", "Hi");
        let json = serde_json::to_value(FormPayload::from(&input)).unwrap();

        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["message"], "Hi");
        assert_eq!(json["_subject"], "New contact from portfolio website!");
        assert_eq!(json["_captcha"], "false");
        assert!(json.get("_next").is_none());
    }

    #[test]
    fn ack_tolerates_odd_bodies() {
        assert_eq!(Ack::from_body(r#"{"ok":true,"next":"/thanks"}"#).ok, Some(true));
        assert_eq!(Ack::from_body(r#"{"ok":true,"next":"/thanks"}"#).next.as_deref(), Some("/thanks"));
        assert_eq!(Ack::from_body(""), Ack::default());
        assert_eq!(Ack::from_body("<html>thanks</html>"), Ack::default());
    }

    #[test]
    fn payload_sends_every_field_as_typed() {
        let input = ContactFormInput::new(" Ada ", "ada@example.com", "  Hi\n");
        let payload = FormPayload::from(&input);

        assert_eq!(payload.name, " Ada ");
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.message, "  Hi\n");
    }

    #[test]
    fn set_and_clear() {
        let mut input = ContactFormInput::default();
        input.set(Field::Email, "ada@example.com".to_string());
        assert_eq!(input.email, "ada@example.com");
        input.clear();
        assert_eq!(input, ContactFormInput::default());
    }
}
