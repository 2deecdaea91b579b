use serde::{Deserialize, Serialize};

// ============================================================================
// Fields
// ============================================================================

/// A single field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn all() -> [ContactField; 4] {
        [
            ContactField::Name,
            ContactField::Email,
            ContactField::Subject,
            ContactField::Message,
        ]
    }
}

/// Current contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate a single field value.
///
/// The email field must look like `local@domain.tld` after trimming: both
/// sides of the `@` free of whitespace and further `@`s, and the domain
/// containing a dot with at least one character on each side. Every other
/// field is valid once its trimmed value is non-empty.
pub fn validate_field(field: ContactField, value: &str) -> bool {
    match field {
        ContactField::Email => is_valid_email(value),
        _ => !value.trim().is_empty(),
    }
}

fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Per-field validation flags. `true` marks a field that currently fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub name: bool,
    pub email: bool,
    pub subject: bool,
    pub message: bool,
}

impl FieldErrors {
    pub fn get(&self, field: ContactField) -> bool {
        match field {
            ContactField::Name => self.name,
            ContactField::Email => self.email,
            ContactField::Subject => self.subject,
            ContactField::Message => self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, failed: bool) {
        match field {
            ContactField::Name => self.name = failed,
            ContactField::Email => self.email = failed,
            ContactField::Subject => self.subject = failed,
            ContactField::Message => self.message = failed,
        }
    }

    pub fn any(&self) -> bool {
        self.name || self.email || self.subject || self.message
    }

    /// Flag every field that currently fails validation.
    pub fn validate_all(fields: &ContactFields) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in ContactField::all() {
            errors.set(field, !validate_field(field, fields.get(field)));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_fields_require_nonblank_content() {
        for field in [
            ContactField::Name,
            ContactField::Subject,
            ContactField::Message,
        ] {
            assert!(!validate_field(field, ""));
            assert!(!validate_field(field, "   \t "));
            assert!(validate_field(field, "Jane"));
            assert!(validate_field(field, "  padded  "));
        }
    }

    #[test]
    fn email_accepts_local_at_domain_dot_tld() {
        assert!(validate_field(ContactField::Email, "a@b.co"));
        assert!(validate_field(ContactField::Email, "jane@x.com"));
        assert!(validate_field(ContactField::Email, "  jane@x.com  "));
        assert!(validate_field(ContactField::Email, "a.b@c.d.et"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(!validate_field(ContactField::Email, ""));
        assert!(!validate_field(ContactField::Email, "a@b"));
        assert!(!validate_field(ContactField::Email, "ab.com"));
        assert!(!validate_field(ContactField::Email, "a@b@c.com"));
        assert!(!validate_field(ContactField::Email, "@b.co"));
        assert!(!validate_field(ContactField::Email, "a@.co"));
        assert!(!validate_field(ContactField::Email, "a@b."));
        assert!(!validate_field(ContactField::Email, "a b@c.co"));
    }

    #[test]
    fn validate_all_flags_only_failing_fields() {
        let mut fields = ContactFields {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        };
        assert!(!FieldErrors::validate_all(&fields).any());

        fields.email = "not-an-email".into();
        let errors = FieldErrors::validate_all(&fields);
        assert!(errors.email);
        assert!(!errors.name && !errors.subject && !errors.message);
    }

    #[test]
    fn empty_form_flags_every_field() {
        let errors = FieldErrors::validate_all(&ContactFields::default());
        for field in ContactField::all() {
            assert!(errors.get(field));
        }
    }

    #[test]
    fn field_accessors_roundtrip() {
        let mut fields = ContactFields::default();
        for field in ContactField::all() {
            fields.set(field, "value".into());
            assert_eq!(fields.get(field), "value");
        }
    }
}
