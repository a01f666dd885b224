use std::collections::BTreeMap;

use campaign_common::{html_escape, Filter};
use campaign_site::forms::{FieldSpec, FormKind, FormValues, Submission};
use campaign_site::{render_updates, ModalKind};

// --- View Models ---

/// What a form shows: the values to refill, inline errors and the summary line.
#[derive(Debug, Clone, Default)]
pub struct FormView {
    pub values: FormValues,
    pub errors: BTreeMap<String, String>,
    pub message: String,
}

impl FormView {
    /// Refill a rejected form with what the visitor typed plus the annotations.
    pub fn from_submission(values: FormValues, submission: &Submission) -> Self {
        Self {
            values,
            errors: submission
                .fields
                .iter()
                .filter(|f| !f.is_valid())
                .map(|f| (f.id.clone(), f.error.clone()))
                .collect(),
            message: submission.message().to_string(),
        }
    }
}

pub struct PageView {
    pub filter: Filter,
    pub year: i32,
    /// Dialog rendered already open.
    pub modal: Option<ModalKind>,
    pub volunteer: FormView,
    pub contact: FormView,
}

impl PageView {
    pub fn new(filter: Filter, year: i32) -> Self {
        Self {
            filter,
            year,
            modal: None,
            volunteer: FormView::default(),
            contact: FormView::default(),
        }
    }

    pub fn with_modal(mut self, modal: Option<ModalKind>) -> Self {
        self.modal = modal;
        self
    }

    pub fn with_form(mut self, kind: FormKind, view: FormView) -> Self {
        match kind {
            FormKind::Volunteer => self.volunteer = view,
            FormKind::Contact => self.contact = view,
        }
        self
    }
}

const INTEREST_OPTIONS: &[&str] = &[
    "Door-to-door outreach",
    "Events & rallies",
    "Youth mobilisation",
    "Social media",
    "Polling agent",
];

/// Render the full campaign page.
pub fn render_page(view: &PageView) -> String {
    let content = format!(
        r##"<section class="hero">
    <h2>Leadership that listens. Development that reaches every household.</h2>
    <p class="muted">Join the campaign for integrity, fair prices for farmers, and opportunity for young people.</p>
    <div class="actions">
        <a class="btn" href="#volunteer">Volunteer</a>
        {donate}
        {newsletter}
    </div>
</section>
{updates}
{volunteer}
{contact}
{dialogs}"##,
        donate = modal_trigger(ModalKind::Donate, "Donate"),
        newsletter = modal_trigger(ModalKind::Newsletter, "Get updates"),
        updates = render_updates_section(view.filter),
        volunteer = render_volunteer_form(&view.volunteer),
        contact = render_contact_form(&view.contact),
        dialogs = render_dialogs(view.modal),
    );

    build_page(&content, view.year)
}

/// Render the updates section with its filter chips and prerendered list.
pub fn render_updates_section(active: Filter) -> String {
    let chips: String = Filter::CHOICES
        .iter()
        .map(|f| {
            let is_active = *f == active;
            format!(
                r##"<a class="chip{cls}" role="tab" data-filter="{value}" aria-selected="{selected}" href="/?filter={value}#updates">{label}</a>"##,
                cls = if is_active { " is-active" } else { "" },
                value = f.as_str(),
                selected = if is_active { "true" } else { "false" },
                label = f.label(),
            )
        })
        .collect::<Vec<_>>()
        .join("");

    format!(
        r#"<section id="updates">
    <h2>Campaign updates</h2>
    <div class="chips" role="tablist">{chips}</div>
    <div id="updates-list" class="updates">{list}</div>
</section>"#,
        list = render_updates(active),
    )
}

fn render_volunteer_form(view: &FormView) -> String {
    let spec = FormKind::Volunteer.spec();
    let fields = [
        text_input(&spec.fields[0], view, "text", "name"),
        text_input(&spec.fields[1], view, "tel", "tel"),
        text_input(&spec.fields[2], view, "text", "address-level2"),
        select_input(&spec.fields[3], view, INTEREST_OPTIONS),
        textarea(&spec.fields[4], view),
    ]
    .join("\n");

    render_form(FormKind::Volunteer, "volunteer", "Volunteer with the campaign", &fields, view)
}

fn render_contact_form(view: &FormView) -> String {
    let spec = FormKind::Contact.spec();
    let fields = [
        text_input(&spec.fields[0], view, "text", "name"),
        text_input(&spec.fields[1], view, "email", "email"),
        textarea(&spec.fields[2], view),
    ]
    .join("\n");

    render_form(FormKind::Contact, "contact", "Contact the team", &fields, view)
}

fn render_form(kind: FormKind, anchor: &str, heading: &str, fields: &str, view: &FormView) -> String {
    let spec = kind.spec();
    format!(
        r#"<section id="{anchor}">
    <h2>{heading}</h2>
    <form id="{form_id}" class="card" method="post" action="/forms/{kind}" novalidate>
{fields}
        <button type="submit" class="btn">Send</button>
        <p id="{result_id}" class="form-result" role="status">{message}</p>
    </form>
</section>"#,
        form_id = spec.form_id,
        result_id = spec.result_id,
        message = html_escape(&view.message),
    )
}

fn error_hint(field: &FieldSpec, view: &FormView) -> String {
    let error = view.errors.get(field.id).map(String::as_str).unwrap_or("");
    format!(
        r#"<small class="error" data-error-for="{id}">{error}</small>"#,
        id = field.id,
        error = html_escape(error),
    )
}

fn aria_invalid(field: &FieldSpec, view: &FormView) -> &'static str {
    if view.errors.contains_key(field.id) {
        "true"
    } else {
        "false"
    }
}

fn text_input(field: &FieldSpec, view: &FormView, input_type: &str, autocomplete: &str) -> String {
    format!(
        r#"        <label for="{id}">{label}</label>
        <input id="{id}" name="{id}" type="{input_type}" autocomplete="{autocomplete}" value="{value}" aria-invalid="{invalid}">
        {hint}"#,
        id = field.id,
        label = html_escape(field.label),
        value = html_escape(view.values.get(field.id)),
        invalid = aria_invalid(field, view),
        hint = error_hint(field, view),
    )
}

fn select_input(field: &FieldSpec, view: &FormView, options: &[&str]) -> String {
    let current = view.values.get(field.id);
    let mut opts = vec![r#"<option value="">Choose one</option>"#.to_string()];
    opts.extend(options.iter().map(|o| {
        format!(
            r#"<option value="{v}"{sel}>{v}</option>"#,
            v = html_escape(o),
            sel = if *o == current { " selected" } else { "" },
        )
    }));
    format!(
        r#"        <label for="{id}">{label}</label>
        <select id="{id}" name="{id}" aria-invalid="{invalid}">{opts}</select>
        {hint}"#,
        id = field.id,
        label = html_escape(field.label),
        opts = opts.join(""),
        invalid = aria_invalid(field, view),
        hint = error_hint(field, view),
    )
}

fn textarea(field: &FieldSpec, view: &FormView) -> String {
    format!(
        r#"        <label for="{id}">{label}</label>
        <textarea id="{id}" name="{id}" rows="4" aria-invalid="{invalid}">{value}</textarea>
        {hint}"#,
        id = field.id,
        label = html_escape(field.label),
        value = html_escape(view.values.get(field.id)),
        invalid = aria_invalid(field, view),
        hint = error_hint(field, view),
    )
}

/// A link that opens `kind` server-side and carries the hook the page script binds to.
fn modal_trigger(kind: ModalKind, label: &str) -> String {
    format!(
        r#"<a class="btn ghost" href="/?modal={name}" {hook}>{label}</a>"#,
        name = kind.as_str(),
        hook = kind.trigger_attribute(),
    )
}

fn dialog_body(kind: ModalKind) -> &'static str {
    match kind {
        ModalKind::Newsletter => {
            r#"    <form method="post" action="/newsletter">
        <h3>Get campaign updates</h3>
        <label for="n-contact">Email or phone</label>
        <input id="n-contact" name="contact" type="text" autocomplete="email">
        <button id="n-submit" type="submit" class="btn">Subscribe</button>
    </form>"#
        }
        ModalKind::Donate => {
            r#"    <h3>Support the campaign</h3>
    <p>Contributions are received through M-Pesa and bank transfer. Contact the team for details.</p>"#
        }
        ModalKind::Accessibility => {
            r#"    <h3>Accessibility</h3>
    <p>This site supports keyboard navigation and screen readers. Tell us if anything gets in your way.</p>"#
        }
    }
}

fn render_dialogs(open: Option<ModalKind>) -> String {
    ModalKind::ALL
        .iter()
        .map(|kind| {
            format!(
                r#"<dialog id="{id}"{open}>
{body}
    <form method="dialog"><button class="btn ghost">Close</button></form>
</dialog>"#,
                id = kind.dialog_id(),
                open = if open == Some(*kind) { " open" } else { "" },
                body = dialog_body(*kind),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// --- Helpers ---

fn build_page(content: &str, year: i32) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Campaign for Kericho County</title>
<style>
*{{margin:0;padding:0;box-sizing:border-box;}}
body{{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;color:#1a1a1a;background:#fafafa;}}
section{{max-width:960px;margin:0 auto;padding:32px 24px;}}
.site-header{{position:sticky;top:0;background:#fff;padding:12px 24px;display:flex;align-items:center;justify-content:space-between;z-index:10;}}
.site-header.is-elevated{{box-shadow:0 2px 12px rgba(0,0,0,.08);}}
.site-header nav a{{color:#333;text-decoration:none;margin-left:20px;font-size:14px;}}
.nav-toggle{{display:none;}}
@media (max-width:720px){{.nav-toggle{{display:inline-block;}}#site-nav{{display:none;}}#site-nav.is-open,#site-nav:target{{display:flex;flex-direction:column;}}}}
.muted{{color:#666;}}
.btn{{display:inline-block;padding:8px 18px;background:#1b5e20;color:#fff;border:none;border-radius:4px;text-decoration:none;font-size:14px;cursor:pointer;}}
.btn.ghost{{background:transparent;color:#1b5e20;border:1px solid #1b5e20;}}
.chips{{display:flex;gap:8px;margin:16px 0;}}
.chip{{padding:4px 12px;border:1px solid #ccc;border-radius:16px;font-size:13px;color:#333;text-decoration:none;}}
.chip.is-active{{background:#1b5e20;border-color:#1b5e20;color:#fff;}}
.update,.card{{background:#fff;border:1px solid #e0e0e0;border-radius:8px;padding:16px;margin-bottom:12px;}}
.update-meta{{display:flex;gap:8px;font-size:12px;color:#888;margin:4px 0 8px;}}
.badge{{display:inline-block;padding:2px 8px;border-radius:12px;font-size:11px;font-weight:600;}}
.badge.events{{background:#e3f2fd;color:#1565c0;}}
.badge.field{{background:#e8f5e9;color:#2e7d32;}}
.badge.press{{background:#f3e5f5;color:#7b1fa2;}}
form label{{display:block;font-size:13px;margin-top:12px;}}
form input,form select,form textarea{{width:100%;padding:8px;border:1px solid #ccc;border-radius:4px;font:inherit;}}
form [aria-invalid="true"]{{border-color:#c62828;}}
.error{{display:block;min-height:16px;font-size:12px;color:#c62828;}}
.form-result{{margin-top:12px;font-size:14px;}}
dialog{{margin:auto;padding:24px;border:none;border-radius:8px;max-width:420px;}}
footer{{text-align:center;padding:24px;font-size:13px;color:#666;}}
</style>
</head>
<body>
<header class="site-header" data-elevate>
    <h1>Campaign for Kericho County</h1>
    <a class="nav-toggle" href="#site-nav" data-nav-toggle aria-controls="site-nav" aria-expanded="false">Menu</a>
    <nav id="site-nav">
        <a href="#updates">Updates</a>
        <a href="#volunteer">Volunteer</a>
        <a href="#contact">Contact</a>
    </nav>
</header>
<main>
{content}
</main>
<footer>
    <p>&copy; <span id="year">{year}</span> Campaign for Kericho County. {accessibility}</p>
</footer>
</body>
</html>"##,
        accessibility = modal_trigger(ModalKind::Accessibility, "Accessibility"),
    )
}
