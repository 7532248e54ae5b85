use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::{Field, FormInput};

/// Deliberately loose: something, an `@`, something, a `.`, something.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::NameRequired => Field::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => Field::Email,
            FieldError::MessageRequired | FieldError::MessageTooShort => Field::Message,
        }
    }
}

impl Field {
    /// The single rule for this field. Both [`check`] and [`is_submittable`]
    /// go through here, so they can never disagree.
    pub fn check(self, value: &str) -> Option<FieldError> {
        let trimmed = value.trim();
        match self {
            Field::Name if trimmed.is_empty() => Some(FieldError::NameRequired),
            Field::Name => None,
            Field::Email if trimmed.is_empty() => Some(FieldError::EmailRequired),
            // shape is matched against the raw value, surrounding spaces fail it
            Field::Email if !EMAIL_SHAPE.is_match(value) => Some(FieldError::EmailInvalid),
            Field::Email => None,
            Field::Message if trimmed.is_empty() => Some(FieldError::MessageRequired),
            Field::Message if trimmed.chars().count() < MIN_MESSAGE_CHARS => {
                Some(FieldError::MessageTooShort)
            }
            Field::Message => None,
        }
    }
}

/// One optional error per field. `None` means the field is fine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Present errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|err| (field, err)))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("form has {count} invalid field(s)", count = .errors.count())]
pub struct ValidationFailure {
    errors: FormErrors,
}

impl ValidationFailure {
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn into_errors(self) -> FormErrors {
        self.errors
    }
}

/// Run every rule. Never short-circuits.
pub fn check(input: &FormInput) -> FormErrors {
    FormErrors {
        name: Field::Name.check(&input.name),
        email: Field::Email.check(&input.email),
        message: Field::Message.check(&input.message),
    }
}

pub fn validate(input: &FormInput) -> Result<(), ValidationFailure> {
    let errors = check(input);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure { errors })
    }
}

/// Cheap gate for the submit button: same rules, no error values kept.
pub fn is_submittable(input: &FormInput) -> bool {
    Field::ALL
        .into_iter()
        .all(|field| field.check(input.get(field)).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str, message: &str) -> FormInput {
        FormInput::new(name, email, message)
    }

    const VALID_EMAIL: &str = "ann@example.com";
    const VALID_MESSAGE: &str = "Hello there!";

    #[test]
    fn test_blank_name_always_fails() {
        for name in ["", " ", "\t\n", "   \u{a0}"] {
            for (email, message) in [("", ""), (VALID_EMAIL, VALID_MESSAGE), ("x", "short")] {
                let errors = check(&input(name, email, message));
                assert_eq!(errors.name, Some(FieldError::NameRequired), "name {name:?}");
                assert!(validate(&input(name, email, message)).is_err());
            }
        }
        assert_eq!(Field::Name.check(" Ann "), None);
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(Field::Email.check(""), Some(FieldError::EmailRequired));
        assert_eq!(Field::Email.check("   "), Some(FieldError::EmailRequired));

        for bad in [
            "not-an-email",
            "ann.example.com",
            "ann@example",
            "@example.com",
            "ann@.com",
            "ann@example.",
            "ann@@example.com",
            "ann @example.com",
            "ann@exa mple.com",
            " ann@example.com",
            "ann@example.com ",
        ] {
            assert_eq!(
                Field::Email.check(bad),
                Some(FieldError::EmailInvalid),
                "{bad:?} should be rejected"
            );
        }

        for good in [
            "a@b.c",
            VALID_EMAIL,
            "first.last@sub.example.co.uk",
            "a..b@c.d",
            "a@b.c.d",
            "ünï@cödé.de",
        ] {
            assert_eq!(Field::Email.check(good), None, "{good:?} should be accepted");
        }
    }

    #[test]
    fn test_message_length_boundaries() {
        assert_eq!(Field::Message.check(""), Some(FieldError::MessageRequired));
        assert_eq!(Field::Message.check("    "), Some(FieldError::MessageRequired));

        for len in 1..MIN_MESSAGE_CHARS {
            let msg = "x".repeat(len);
            assert_eq!(
                Field::Message.check(&msg),
                Some(FieldError::MessageTooShort),
                "length {len}"
            );
        }
        assert_eq!(Field::Message.check(&"x".repeat(10)), None);
        assert_eq!(Field::Message.check(&"x".repeat(500)), None);

        // padding does not count towards the length
        assert_eq!(
            Field::Message.check("   123456789   "),
            Some(FieldError::MessageTooShort)
        );
        // inner spaces do
        assert_eq!(Field::Message.check("1234 56789"), None);
        // characters, not bytes
        assert_eq!(Field::Message.check("ééééé"), Some(FieldError::MessageTooShort));
        assert_eq!(Field::Message.check("éééééééééé"), None);
    }

    #[test]
    fn test_all_fields_checked_without_short_circuit() {
        let errors = check(&input("", "", ""));
        assert_eq!(
            errors,
            FormErrors {
                name: Some(FieldError::NameRequired),
                email: Some(FieldError::EmailRequired),
                message: Some(FieldError::MessageRequired),
            }
        );
        assert_eq!(errors.count(), 3);

        let failure = validate(&input("", "nope", "short")).unwrap_err();
        assert_eq!(failure.errors().count(), 3);
        assert_eq!(failure.to_string(), "form has 3 invalid field(s)");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldError::NameRequired.to_string(), "Name is required");
        assert_eq!(FieldError::EmailRequired.to_string(), "Email is required");
        assert_eq!(
            FieldError::EmailInvalid.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(FieldError::MessageRequired.to_string(), "Message is required");
        assert_eq!(
            FieldError::MessageTooShort.to_string(),
            "Message must be at least 10 characters"
        );
        assert_eq!(FieldError::EmailInvalid.field(), Field::Email);
        assert_eq!(FieldError::MessageTooShort.field(), Field::Message);
    }

    #[test]
    fn test_valid_input_passes() {
        let form = input("Ann", VALID_EMAIL, VALID_MESSAGE);
        assert_eq!(check(&form), FormErrors::default());
        assert!(validate(&form).is_ok());
        assert!(is_submittable(&form));
    }

    #[test]
    fn test_submittable_agrees_with_validate() {
        let names = ["", "  ", "Ann", " Ann "];
        let emails = [
            "",
            " ",
            "ann",
            "ann@example",
            VALID_EMAIL,
            " ann@example.com",
            "a@b.c",
        ];
        let messages = ["", "   ", "short", "123456789", "1234567890", VALID_MESSAGE];

        let mut valid_seen = 0;
        for name in names {
            for email in emails {
                for message in messages {
                    let form = input(name, email, message);
                    let verdict = validate(&form).is_ok();
                    assert_eq!(is_submittable(&form), verdict, "{form:?}");
                    valid_seen += usize::from(verdict);
                }
            }
        }
        // make sure the corpus exercises both sides
        assert!(valid_seen > 0);
    }

    #[test]
    fn test_check_is_idempotent() {
        for form in [
            input("", "", ""),
            input("Ann", "not-an-email", VALID_MESSAGE),
            input("Ann", VALID_EMAIL, "hey"),
            input("Ann", VALID_EMAIL, VALID_MESSAGE),
        ] {
            assert_eq!(check(&form), check(&form));
            assert_eq!(validate(&form), validate(&form));
        }
    }

    #[test]
    fn test_errors_iter_and_clear() {
        let mut errors = check(&input("", "bad", VALID_MESSAGE));
        let listed = errors.iter().collect::<Vec<_>>();
        assert_eq!(
            listed,
            vec![
                (Field::Name, FieldError::NameRequired),
                (Field::Email, FieldError::EmailInvalid),
            ]
        );

        errors.clear(Field::Name);
        assert_eq!(errors.get(Field::Name), None);
        assert_eq!(errors.get(Field::Email), Some(FieldError::EmailInvalid));
        errors.clear(Field::Email);
        assert!(errors.is_empty());
    }
}
