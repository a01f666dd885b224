use std::collections::BTreeMap;

use campaign_common::encode_component;
use tracing::{debug, info};

use crate::validate::{email_like, phone_like, required, Field};

pub const REVIEW_MESSAGE: &str = "Please review the highlighted fields.";

// --- Form Definitions ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormKind {
    Volunteer,
    Contact,
}

impl FormKind {
    pub const ALL: [FormKind; 2] = [FormKind::Volunteer, FormKind::Contact];

    pub fn spec(&self) -> &'static FormSpec {
        match self {
            FormKind::Volunteer => &VOLUNTEER_FORM,
            FormKind::Contact => &CONTACT_FORM,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Volunteer => "volunteer",
            FormKind::Contact => "contact",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Required,
    Email,
    Phone,
}

#[derive(Debug)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    /// Run in order; a later failure overwrites an earlier message.
    pub checks: &'static [Check],
}

#[derive(Debug)]
pub struct FormSpec {
    pub form_id: &'static str,
    pub result_id: &'static str,
    pub subject: &'static str,
    pub pending_message: &'static str,
    pub fields: &'static [FieldSpec],
    compose: fn(&FormValues) -> String,
}

impl FormSpec {
    pub fn compose_body(&self, values: &FormValues) -> String {
        (self.compose)(values)
    }
}

pub static VOLUNTEER_FORM: FormSpec = FormSpec {
    form_id: "volunteer-form",
    result_id: "volunteer-result",
    subject: "Volunteer Sign-up",
    pending_message: "Opening your email app to complete submission…",
    fields: &[
        FieldSpec { id: "v-name", label: "Full name", checks: &[Check::Required] },
        FieldSpec { id: "v-phone", label: "Phone number", checks: &[Check::Required, Check::Phone] },
        FieldSpec { id: "v-location", label: "Ward / Location", checks: &[Check::Required] },
        FieldSpec { id: "v-interests", label: "Interest", checks: &[Check::Required] },
        FieldSpec { id: "v-message", label: "Message", checks: &[] },
    ],
    compose: compose_volunteer,
};

pub static CONTACT_FORM: FormSpec = FormSpec {
    form_id: "contact-form",
    result_id: "contact-result",
    subject: "Website message",
    pending_message: "Opening your email app to send the message…",
    fields: &[
        FieldSpec { id: "c-name", label: "Full name", checks: &[Check::Required] },
        FieldSpec { id: "c-email", label: "Email", checks: &[Check::Required, Check::Email] },
        FieldSpec { id: "c-message", label: "Message", checks: &[Check::Required] },
    ],
    compose: compose_contact,
};

fn compose_volunteer(values: &FormValues) -> String {
    let message = match values.get("v-message") {
        "" => "-",
        m => m,
    };
    [
        "Volunteer sign-up (Campaign Website)".to_string(),
        String::new(),
        format!("Name: {}", values.get("v-name")),
        format!("Phone: {}", values.get("v-phone")),
        format!("Ward/Location: {}", values.get("v-location")),
        format!("Interest: {}", values.get("v-interests")),
        format!("Message: {message}"),
    ]
    .join("\n")
}

fn compose_contact(values: &FormValues) -> String {
    [
        "Message from Campaign Website".to_string(),
        String::new(),
        format!("Name: {}", values.get("c-name")),
        format!("Email: {}", values.get("c-email")),
        String::new(),
        values.get("c-message").to_string(),
    ]
    .join("\n")
}

// --- Values ---

/// Raw input values keyed by field id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, value: &str) -> Self {
        self.insert(id, value);
        self
    }

    pub fn insert(&mut self, id: &str, value: &str) {
        self.0.insert(id.to_string(), value.to_string());
    }

    /// Missing fields read as empty.
    pub fn get(&self, id: &str) -> &str {
        self.0.get(id).map(String::as_str).unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// --- Submission ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Rejected { message: &'static str },
    Handoff { mailto: String, message: &'static str },
}

/// Result of one submission attempt: every field with its annotation, plus what to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub kind: FormKind,
    pub fields: Vec<Field>,
    pub outcome: SubmissionOutcome,
}

impl Submission {
    pub fn mailto(&self) -> Option<&str> {
        match &self.outcome {
            SubmissionOutcome::Handoff { mailto, .. } => Some(mailto.as_str()),
            SubmissionOutcome::Rejected { .. } => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self.outcome {
            SubmissionOutcome::Handoff { message, .. } | SubmissionOutcome::Rejected { message } => {
                message
            }
        }
    }
}

/// Validate every field of `kind` and build the mail handoff when all checks pass.
/// All fields are evaluated and annotated before the decision is made.
pub fn submit(kind: FormKind, values: &FormValues, mail_to: &str) -> Submission {
    let spec = kind.spec();
    let mut ok = true;
    let mut fields = Vec::with_capacity(spec.fields.len());

    for field_spec in spec.fields {
        let mut field = Field::new(field_spec.id, values.get(field_spec.id));
        for check in field_spec.checks {
            let passed = match check {
                Check::Required => required(&mut field, field_spec.label),
                Check::Email => email_like(&mut field),
                Check::Phone => phone_like(&mut field),
            };
            ok &= passed;
        }
        fields.push(field);
    }

    let outcome = if ok {
        info!(form = %kind, "Form passed validation, handing off to mail client");
        SubmissionOutcome::Handoff {
            mailto: mailto_link(mail_to, spec.subject, &spec.compose_body(values)),
            message: spec.pending_message,
        }
    } else {
        debug!(
            form = %kind,
            invalid = fields.iter().filter(|f| !f.is_valid()).count(),
            "Form rejected"
        );
        SubmissionOutcome::Rejected {
            message: REVIEW_MESSAGE,
        }
    };

    Submission {
        kind,
        fields,
        outcome,
    }
}

pub fn mailto_link(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{to}?subject={}&body={}",
        encode_component(subject),
        encode_component(body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TO: &str = "team@senatorcheptoo.ke";

    fn volunteer() -> FormValues {
        FormValues::new()
            .with("v-name", "Amina Chebet")
            .with("v-phone", "+254 712 345678")
            .with("v-location", "Ainamoi")
            .with("v-interests", "Door-to-door")
            .with("v-message", "")
    }

    fn field<'a>(s: &'a Submission, id: &str) -> &'a Field {
        s.fields.iter().find(|f| f.id == id).unwrap()
    }

    #[test]
    fn test_volunteer_body_layout() {
        let body = VOLUNTEER_FORM.compose_body(&volunteer());
        assert_eq!(
            body,
            "Volunteer sign-up (Campaign Website)\n\nName: Amina Chebet\nPhone: +254 712 345678\nWard/Location: Ainamoi\nInterest: Door-to-door\nMessage: -"
        );
    }

    #[test]
    fn test_contact_body_layout() {
        let values = FormValues::new()
            .with("c-name", "Kip")
            .with("c-email", "kip@example.ke")
            .with("c-message", "Hello\nteam");
        assert_eq!(
            CONTACT_FORM.compose_body(&values),
            "Message from Campaign Website\n\nName: Kip\nEmail: kip@example.ke\n\nHello\nteam"
        );
    }

    #[test]
    fn test_valid_volunteer_hands_off() {
        let submission = submit(FormKind::Volunteer, &volunteer(), TO);
        let mailto = submission.mailto().unwrap();
        assert!(mailto.starts_with("mailto:team@senatorcheptoo.ke?subject=Volunteer%20Sign-up&body="));
        assert!(!mailto.contains(' '));
        assert!(!mailto.contains('\n'));
        assert!(submission.fields.iter().all(Field::is_valid));
        assert_eq!(submission.message(), "Opening your email app to complete submission…");
    }

    #[test]
    fn test_all_fields_annotated_without_short_circuit() {
        let values = FormValues::new().with("v-phone", "12");
        let submission = submit(FormKind::Volunteer, &values, TO);
        assert_eq!(submission.mailto(), None);
        assert_eq!(submission.message(), REVIEW_MESSAGE);
        assert_eq!(field(&submission, "v-name").error, "Full name is required.");
        assert_eq!(field(&submission, "v-phone").error, "Please enter a valid phone number.");
        assert_eq!(field(&submission, "v-location").error, "Ward / Location is required.");
        assert_eq!(field(&submission, "v-interests").error, "Interest is required.");
        assert!(field(&submission, "v-message").is_valid());
    }

    #[test]
    fn test_empty_phone_reports_format_message() {
        let values = volunteer().with("v-phone", "");
        let submission = submit(FormKind::Volunteer, &values, TO);
        assert_eq!(field(&submission, "v-phone").error, "Please enter a valid phone number.");
    }

    #[test]
    fn test_contact_rejects_bad_email() {
        let values = FormValues::new()
            .with("c-name", "Kip")
            .with("c-email", "kip@example")
            .with("c-message", "Hi");
        let submission = submit(FormKind::Contact, &values, TO);
        assert_eq!(submission.mailto(), None);
        assert_eq!(field(&submission, "c-email").error, "Please enter a valid email.");
        assert!(field(&submission, "c-name").is_valid());
    }

    #[test]
    fn test_mailto_link_encodes_subject_and_body() {
        assert_eq!(
            mailto_link("a@b.co", "Website message", "Name: A&B"),
            "mailto:a@b.co?subject=Website%20message&body=Name%3A%20A%26B"
        );
    }
}
