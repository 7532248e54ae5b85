use std::fmt;

use super::FormInput;

/// A pre-filled message for the visitor's mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoRequest {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailtoRequest {
    pub fn from_input(recipient: &str, input: &FormInput) -> Self {
        Self {
            recipient: recipient.to_string(),
            subject: format!("Portfolio Contact: Message from {}", input.name),
            body: format!(
                "Name: {}\nEmail: {}\n\nMessage:\n{}",
                input.name, input.email, input.message
            ),
        }
    }

    pub fn to_url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MailtoRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}
