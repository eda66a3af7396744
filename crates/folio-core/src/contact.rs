//! Three-step contact form that ends in a WhatsApp deep link.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const WHATSAPP_BASE: &str = "https://wa.me";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactStep {
    Name,
    Email,
    Message,
}

impl ContactStep {
    pub const ALL: [ContactStep; 3] = [ContactStep::Name, ContactStep::Email, ContactStep::Message];

    pub fn index(self) -> usize {
        match self {
            ContactStep::Name => 0,
            ContactStep::Email => 1,
            ContactStep::Message => 2,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ContactStep::Name => "name",
            ContactStep::Email => "email",
            ContactStep::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactStep::Name => "What's your name?",
            ContactStep::Email => "What's your email?",
            ContactStep::Message => "How can I help you?",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactStep::Name => "John Doe",
            ContactStep::Email => "john@example.com",
            ContactStep::Message => "I have a project idea...",
        }
    }

    fn next(self) -> Option<ContactStep> {
        match self {
            ContactStep::Name => Some(ContactStep::Email),
            ContactStep::Email => Some(ContactStep::Message),
            ContactStep::Message => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, step: ContactStep) -> &str {
        match step {
            ContactStep::Name => &self.name,
            ContactStep::Email => &self.email,
            ContactStep::Message => &self.message,
        }
    }

    fn field_mut(&mut self, step: ContactStep) -> &mut String {
        match step {
            ContactStep::Name => &mut self.name,
            ContactStep::Email => &mut self.email,
            ContactStep::Message => &mut self.message,
        }
    }

    /// Message text in field order: name, email, message.
    pub fn message_text(&self) -> String {
        format!(
            "*Name:* {}\n*Email:* {}\n*Message:* {}",
            self.name, self.email, self.message
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Current field is empty; nothing changed.
    Blocked,
    Advanced(ContactStep),
    /// Final step complete; open this URL.
    Submit(String),
}

#[derive(Clone, Debug)]
pub struct ContactFlow {
    step: ContactStep,
    form: ContactForm,
    phone: String,
}

impl ContactFlow {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            step: ContactStep::Name,
            form: ContactForm::default(),
            phone: phone.into(),
        }
    }

    pub fn step(&self) -> ContactStep {
        self.step
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn current_value(&self) -> &str {
        self.form.field(self.step)
    }

    pub fn set_current(&mut self, value: impl Into<String>) {
        *self.form.field_mut(self.step) = value.into();
    }

    pub fn progress_percent(&self) -> f64 {
        (self.step.index() + 1) as f64 / ContactStep::ALL.len() as f64 * 100.0
    }

    pub fn next(&mut self) -> ContactOutcome {
        if self.current_value().is_empty() {
            return ContactOutcome::Blocked;
        }
        match self.step.next() {
            Some(step) => {
                self.step = step;
                ContactOutcome::Advanced(step)
            }
            None => ContactOutcome::Submit(whatsapp_link(&self.phone, &self.form)),
        }
    }
}

pub fn whatsapp_link(phone: &str, form: &ContactForm) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE,
        phone,
        encode_component(&form.message_text())
    )
}

pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_uri_component() {
        assert_eq!(encode_component("a b@c.d\n"), "a%20b%40c.d%0A");
        assert_eq!(encode_component("it's (ok)!"), "it's%20(ok)!");
    }
}
