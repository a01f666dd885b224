use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+()0-9\s-]{7,}$").unwrap());

/// A form input and its current error annotation. An empty error means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    pub id: String,
    pub value: String,
    pub error: String,
}

impl Field {
    pub fn new(id: &str, value: &str) -> Self {
        Self {
            id: id.to_string(),
            value: value.to_string(),
            error: String::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_empty()
    }

    fn annotate(&mut self, ok: bool, message: impl FnOnce() -> String) -> bool {
        if ok {
            self.error.clear();
        } else {
            self.error = message();
        }
        ok
    }
}

/// Passes when the trimmed value is non-empty.
pub fn required(field: &mut Field, label: &str) -> bool {
    let ok = !field.value.trim().is_empty();
    field.annotate(ok, || format!("{label} is required."))
}

/// Passes for `local@domain.tld`-shaped values. Not RFC 5322.
pub fn email_like(field: &mut Field) -> bool {
    let ok = EMAIL_RE.is_match(field.value.trim());
    field.annotate(ok, || "Please enter a valid email.".to_string())
}

/// Passes for seven or more characters drawn from digits, whitespace, `+`, `(`, `)` and `-`.
pub fn phone_like(field: &mut Field) -> bool {
    let ok = PHONE_RE.is_match(field.value.trim());
    field.annotate(ok, || "Please enter a valid phone number.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(f: fn(&mut Field) -> bool, value: &str) -> bool {
        f(&mut Field::new("x", value))
    }

    #[test]
    fn test_required() {
        let mut blank = Field::new("v-name", "");
        assert!(!required(&mut blank, "Full name"));
        assert_eq!(blank.error, "Full name is required.");

        assert!(!required(&mut Field::new("v-name", "   "), "Full name"));
        assert!(required(&mut Field::new("v-name", "x"), "Full name"));
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut field = Field::new("c-email", "nope");
        assert!(!email_like(&mut field));
        assert!(!field.is_valid());
        field.value = "a@b.co".to_string();
        assert!(email_like(&mut field));
        assert!(field.is_valid());
    }

    #[test]
    fn test_email_like() {
        assert!(check(email_like, "a@b.co"));
        assert!(check(email_like, "  amina@example.ke  "));
        assert!(!check(email_like, "a@b"));
        assert!(!check(email_like, "a b@c.com"));
        assert!(!check(email_like, "a@@b.com"));
        assert!(!check(email_like, ""));
    }

    #[test]
    fn test_email_error_message() {
        let mut field = Field::new("c-email", "a@b");
        email_like(&mut field);
        assert_eq!(field.error, "Please enter a valid email.");
    }

    #[test]
    fn test_phone_like() {
        assert!(check(phone_like, "+254 712 345678"));
        assert!(check(phone_like, "(020) 123-4567"));
        assert!(check(phone_like, "0712345"));
        assert!(!check(phone_like, "abc"));
        assert!(!check(phone_like, "12345"));
        assert!(!check(phone_like, "123456"));
        assert!(!check(phone_like, "0712 345 678 ext"));
    }

    #[test]
    fn test_phone_length_counts_after_trim() {
        assert!(!check(phone_like, "   123456   "));
    }

    #[test]
    fn test_phone_error_message() {
        let mut field = Field::new("v-phone", "abc");
        phone_like(&mut field);
        assert_eq!(field.error, "Please enter a valid phone number.");
    }
}
