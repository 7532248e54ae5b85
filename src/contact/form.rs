use super::{
    validate::{self, FieldError, FormErrors, ValidationFailure},
    Field, FormInput, MailtoRequest, SubmitMode, UnknownField,
};

/// Whether errors from the last submit attempt are still on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    ShowingErrors,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn message_sent() -> Self {
        Self {
            title: "Thank you!".to_string(),
            description: "Your message has been sent.".to_string(),
        }
    }
}

/// The one side effect a valid submit asks the page to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Notified(Notification),
    Compose(MailtoRequest),
}

/// Field values plus the errors currently shown next to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    input: FormInput,
    errors: FormErrors,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn value(&self, field: Field) -> &str {
        self.input.get(field)
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    pub fn phase(&self) -> FormPhase {
        if self.errors.is_empty() {
            FormPhase::Editing
        } else {
            FormPhase::ShowingErrors
        }
    }

    pub fn is_submittable(&self) -> bool {
        validate::is_submittable(&self.input)
    }

    /// Store a keystroke's worth of text. A stale error on this field is
    /// dropped right away; the other fields keep theirs until the next submit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.input.slot_mut(field) = value.into();
        if self.errors.get(field).is_some() {
            self.errors.clear(field);
        }
    }

    pub fn set_field_named(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownField> {
        let field = name.parse::<Field>()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Validate and, when everything passes, turn the input into a
    /// [`Submission`] and start over with an empty form. On failure the
    /// input is left alone and the errors are kept for display.
    pub fn submit(&mut self, mode: &SubmitMode) -> Result<Submission, ValidationFailure> {
        if let Err(failure) = validate::validate(&self.input) {
            log::debug!(
                "contact form rejected: {:?}",
                failure.errors().iter().map(|(f, _)| f.as_str()).collect::<Vec<_>>()
            );
            self.errors = *failure.errors();
            return Err(failure);
        }

        let submission = match mode {
            SubmitMode::Notify => Submission::Notified(Notification::message_sent()),
            SubmitMode::Mailto { recipient } => {
                Submission::Compose(MailtoRequest::from_input(recipient, &self.input))
            }
        };
        log::info!(
            "contact form submitted ({})",
            match &submission {
                Submission::Notified(_) => "notify",
                Submission::Compose(_) => "mailto",
            }
        );

        *self = Self::default();
        Ok(submission)
    }
}
