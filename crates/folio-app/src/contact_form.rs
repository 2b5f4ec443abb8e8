//! Contact form state
//!
//! The form is decorative: sending produces a local acknowledgement and
//! nothing leaves the process.

use folio_core::content::CONTACT_ACKNOWLEDGEMENT;

/// Focusable elements of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Message,
    Send,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Send,
            FormField::Send => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Send,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
            FormField::Send => FormField::Message,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "Your Email",
            FormField::Message => "Your Message",
            FormField::Send => "Send Message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: FormField,
    /// Acknowledgement text, present after sending until dismissed
    pub acknowledgement: Option<&'static str>,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
            FormField::Send => "",
        }
    }

    fn focused_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Message => Some(&mut self.message),
            FormField::Send => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Append a character to the focused field.
    ///
    /// Newlines are only accepted by the message field.
    pub fn input(&mut self, c: char) {
        if c == '\n' && self.focus != FormField::Message {
            return;
        }
        if let Some(field) = self.focused_mut() {
            field.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_mut() {
            field.pop();
        }
    }

    /// "Send" the form. Field contents are kept.
    pub fn submit(&mut self) -> &'static str {
        self.acknowledgement = Some(CONTACT_ACKNOWLEDGEMENT);
        CONTACT_ACKNOWLEDGEMENT
    }

    pub fn dismiss(&mut self) {
        self.acknowledgement = None;
    }
}
