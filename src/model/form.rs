//! Contact form state and validation rules
//!
//! Each field carries at most one error at a time. Validation runs when
//! focus leaves a field and for every field on submit; any edit clears the
//! field's error until the next evaluation. Submission is a purely local
//! acknowledgment - delivery is outside this core.

use regex::Regex;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

/// Shape check for email values: no whitespace, one @, a dot in the domain
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

/// How long the submission acknowledgment stays on screen
pub const SUCCESS_MESSAGE_TTL: Duration = Duration::from_millis(5000);

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// The three required form fields, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    fn index(self) -> usize {
        match self {
            ContactField::Name => 0,
            ContactField::Email => 1,
            ContactField::Message => 2,
        }
    }

    fn next(self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    fn prev(self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        }
    }
}

/// Contact form state: values, per-field errors, focus, pending acknowledgment
pub struct ContactForm {
    values: [String; 3],
    errors: [Option<&'static str>; 3],
    focus: Option<ContactField>,
    success_expires_at: Option<Instant>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> ContactForm {
        ContactForm {
            values: [String::new(), String::new(), String::new()],
            errors: [None, None, None],
            focus: None,
            success_expires_at: None,
        }
    }

    pub fn value(&self, field: ContactField) -> &str {
        &self.values[field.index()]
    }

    pub fn error(&self, field: ContactField) -> Option<&'static str> {
        self.errors[field.index()]
    }

    pub fn focus(&self) -> Option<ContactField> {
        self.focus
    }

    pub fn is_focused(&self) -> bool {
        self.focus.is_some()
    }

    /// Move focus into the form (first field)
    pub fn focus_first(&mut self) {
        self.focus = Some(ContactField::Name);
    }

    /// Drop focus, validating the departed field (the blur trigger)
    pub fn blur(&mut self) {
        if let Some(field) = self.focus.take() {
            self.validate_field(field);
        }
    }

    /// Advance focus in tab order, validating the departed field
    pub fn focus_next(&mut self) {
        if let Some(field) = self.focus {
            self.validate_field(field);
            self.focus = Some(field.next());
        }
    }

    /// Move focus backwards in tab order, validating the departed field
    pub fn focus_prev(&mut self) {
        if let Some(field) = self.focus {
            self.validate_field(field);
            self.focus = Some(field.prev());
        }
    }

    /// Insert a character into the focused field
    ///
    /// Any edit clears the field's error immediately, regardless of whether
    /// the new value would pass; the error can only reappear on the next
    /// blur or submit evaluation.
    pub fn input(&mut self, c: char) {
        if let Some(field) = self.focus {
            self.values[field.index()].push(c);
            self.clear_error(field);
        }
    }

    /// Delete the character before the cursor in the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.focus {
            self.values[field.index()].pop();
            self.clear_error(field);
        }
    }

    pub fn clear_error(&mut self, field: ContactField) {
        self.errors[field.index()] = None;
    }

    /// Evaluate one field's rule chain; first failing rule wins
    pub fn validate_field(&mut self, field: ContactField) -> bool {
        let value = self.values[field.index()].trim();

        let error = match field {
            ContactField::Name => {
                if value.is_empty() {
                    Some("Name is required")
                } else if value.chars().count() < 2 {
                    Some("Name must be at least 2 characters long")
                } else {
                    None
                }
            }
            ContactField::Email => {
                if value.is_empty() {
                    Some("Email is required")
                } else if !EMAIL_REGEX.is_match(value) {
                    Some("Please enter a valid email address")
                } else {
                    None
                }
            }
            ContactField::Message => {
                if value.is_empty() {
                    Some("Message is required")
                } else if value.chars().count() < 10 {
                    Some("Message must be at least 10 characters long")
                } else {
                    None
                }
            }
        };

        self.errors[field.index()] = error;
        error.is_none()
    }

    /// Evaluate every field without short-circuiting, so all problems
    /// surface at once
    pub fn validate_form(&mut self) -> bool {
        let mut valid = true;
        for field in ContactField::ALL {
            if !self.validate_field(field) {
                valid = false;
            }
        }
        valid
    }

    /// Validate everything and, if it passes, reset the fields and post the
    /// transient acknowledgment. Returns whether the submit went through.
    pub fn submit(&mut self, now: Instant) -> bool {
        if !self.validate_form() {
            return false;
        }

        for value in &mut self.values {
            value.clear();
        }
        self.errors = [None, None, None];
        self.focus = None;
        self.success_expires_at = Some(now + SUCCESS_MESSAGE_TTL);
        true
    }

    pub fn success_visible(&self) -> bool {
        self.success_expires_at.is_some()
    }

    /// Expire the acknowledgment once its delay has elapsed
    ///
    /// One-shot with no cancellation path; a no-op when nothing is pending.
    pub fn tick(&mut self, now: Instant) {
        if let Some(expires_at) = self.success_expires_at {
            if now >= expires_at {
                self.success_expires_at = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.values[0] = name.to_string();
        form.values[1] = email.to_string();
        form.values[2] = message.to_string();
        form
    }

    #[test]
    fn test_name_rules() {
        let mut form = form_with("", "", "");
        assert!(!form.validate_field(ContactField::Name));
        assert_eq!(form.error(ContactField::Name), Some("Name is required"));

        let mut form = form_with("J", "", "");
        assert!(!form.validate_field(ContactField::Name));
        assert_eq!(
            form.error(ContactField::Name),
            Some("Name must be at least 2 characters long")
        );

        let mut form = form_with("Jo", "", "");
        assert!(form.validate_field(ContactField::Name));
        assert_eq!(form.error(ContactField::Name), None);
    }

    #[test]
    fn test_email_rules() {
        let mut form = form_with("", "a@b.com", "");
        assert!(form.validate_field(ContactField::Email));

        let mut form = form_with("", "abc", "");
        assert!(!form.validate_field(ContactField::Email));
        assert_eq!(
            form.error(ContactField::Email),
            Some("Please enter a valid email address")
        );

        let mut form = form_with("", "", "");
        assert!(!form.validate_field(ContactField::Email));
        assert_eq!(form.error(ContactField::Email), Some("Email is required"));
    }

    #[test]
    fn test_email_shape_edge_cases() {
        for bad in ["a b@c.com", "a@b@c.com", "a@bcom", "@b.com", "a@.x "] {
            let mut form = form_with("", bad, "");
            assert!(!form.validate_field(ContactField::Email), "{bad:?} passed");
        }
        let mut form = form_with("", "first.last@sub.domain.io", "");
        assert!(form.validate_field(ContactField::Email));
    }

    #[test]
    fn test_message_length_rules() {
        let mut form = form_with("", "", "12345");
        assert!(!form.validate_field(ContactField::Message));
        assert_eq!(
            form.error(ContactField::Message),
            Some("Message must be at least 10 characters long")
        );

        let mut form = form_with("", "", "1234567890");
        assert!(form.validate_field(ContactField::Message));
    }

    #[test]
    fn test_values_trimmed_before_rules() {
        // Nine characters plus surrounding whitespace stays too short
        let mut form = form_with("", "", "  123456789  ");
        assert!(!form.validate_field(ContactField::Message));

        let mut form = form_with("  Jo  ", "", "");
        assert!(form.validate_field(ContactField::Name));
    }

    #[test]
    fn test_validate_form_surfaces_all_errors() {
        let mut form = form_with("", "abc", "short");
        assert!(!form.validate_form());
        assert!(form.error(ContactField::Name).is_some());
        assert!(form.error(ContactField::Email).is_some());
        assert!(form.error(ContactField::Message).is_some());
    }

    #[test]
    fn test_edit_clears_error_regardless_of_validity() {
        let mut form = ContactForm::new();
        form.focus_first();
        form.focus_next(); // blur empty name -> error shown
        assert!(form.error(ContactField::Name).is_some());

        form.focus_prev(); // back to name (validates email on the way)
        form.input('x'); // still too short, but the error clears
        assert_eq!(form.error(ContactField::Name), None);

        form.backspace(); // empty again; error stays clear until next blur
        assert_eq!(form.error(ContactField::Name), None);

        form.blur();
        assert!(form.error(ContactField::Name).is_some());
    }

    #[test]
    fn test_submit_rejects_invalid_form() {
        let mut form = form_with("Jo", "abc", "1234567890");
        let now = Instant::now();
        assert!(!form.submit(now));
        assert!(!form.success_visible());
        // Values untouched on failed submit
        assert_eq!(form.value(ContactField::Name), "Jo");
    }

    #[test]
    fn test_submit_resets_fields_and_posts_acknowledgment() {
        let mut form = form_with("Jo", "a@b.com", "1234567890");
        let now = Instant::now();
        assert!(form.submit(now));

        for field in ContactField::ALL {
            assert_eq!(form.value(field), "");
            assert_eq!(form.error(field), None);
        }
        assert!(form.success_visible());

        // Still visible just before the delay elapses
        form.tick(now + SUCCESS_MESSAGE_TTL - Duration::from_millis(1));
        assert!(form.success_visible());

        // Gone once it fires
        form.tick(now + SUCCESS_MESSAGE_TTL);
        assert!(!form.success_visible());

        // Removal is a silent no-op when nothing is pending
        form.tick(now + SUCCESS_MESSAGE_TTL);
        assert!(!form.success_visible());
    }

    #[test]
    fn test_input_without_focus_is_noop() {
        let mut form = ContactForm::new();
        form.input('x');
        form.backspace();
        for field in ContactField::ALL {
            assert_eq!(form.value(field), "");
        }
    }
}
