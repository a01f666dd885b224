use campaign_common::{config::DEFAULT_MAIL_TO, Filter};
use tracing::debug;

use crate::chrome::{self, ModalKind};
use crate::filters::chip_value;
use crate::forms::{self, FormKind, FormValues, SubmissionOutcome};

// --- State ---

/// Everything the page controller remembers between events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    /// `None` once a chip naming no known category has been selected.
    pub filter: Option<Filter>,
    pub nav_open: bool,
    pub header_elevated: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            filter: Some(Filter::All),
            nav_open: false,
            header_elevated: false,
        }
    }
}

/// Fixed configuration handlers read but never change.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub mail_to: String,
}

impl Default for SiteContext {
    fn default() -> Self {
        Self {
            mail_to: DEFAULT_MAIL_TO.to_string(),
        }
    }
}

// --- Events ---

/// A UI event with the inputs its handler needs already read off the page.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Boot { scroll_y: f64, year: i32 },
    Scroll { scroll_y: f64 },
    NavToggle,
    NavLinkClick,
    KeyDown { key: String },
    FilterChip { filter: Option<String> },
    OpenModal(ModalKind),
    SubmitForm { kind: FormKind, values: FormValues },
    NewsletterSubmit { contact: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Boot,
    Scroll,
    NavToggle,
    NavLinkClick,
    KeyDown,
    FilterChip,
    OpenModal,
    SubmitForm,
    NewsletterSubmit,
}

impl UiEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            UiEvent::Boot { .. } => EventKind::Boot,
            UiEvent::Scroll { .. } => EventKind::Scroll,
            UiEvent::NavToggle => EventKind::NavToggle,
            UiEvent::NavLinkClick => EventKind::NavLinkClick,
            UiEvent::KeyDown { .. } => EventKind::KeyDown,
            UiEvent::FilterChip { .. } => EventKind::FilterChip,
            UiEvent::OpenModal(_) => EventKind::OpenModal,
            UiEvent::SubmitForm { .. } => EventKind::SubmitForm,
            UiEvent::NewsletterSubmit { .. } => EventKind::NewsletterSubmit,
        }
    }
}

// --- Effects ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StampYear(i32),
    ElevateHeader(bool),
    SetNavOpen(bool),
    /// Raw `data-filter` value of the chip to mark.
    MarkActiveChip(String),
    RenderUpdates(Option<Filter>),
    ShowModal(ModalKind),
    SetFieldError { field: String, message: String },
    ShowFormResult { kind: FormKind, message: String },
    Navigate(String),
    ResetForm(FormKind),
    FocusNewsletterContact,
    CacheContact(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: UiState,
    pub effects: Vec<Effect>,
    /// Suppress the browser's default action for the event.
    pub prevent_default: bool,
}

impl Transition {
    fn unchanged(state: &UiState) -> Self {
        Self {
            state: *state,
            effects: Vec::new(),
            prevent_default: false,
        }
    }

    fn with(state: UiState, effects: Vec<Effect>) -> Self {
        Self {
            state,
            effects,
            prevent_default: false,
        }
    }

    fn preventing_default(mut self) -> Self {
        self.prevent_default = true;
        self
    }
}

// --- Dispatch ---

type Handler = fn(&UiState, &UiEvent, &SiteContext) -> Transition;

const DISPATCH: &[(EventKind, Handler)] = &[
    (EventKind::Boot, on_boot),
    (EventKind::Scroll, on_scroll),
    (EventKind::NavToggle, on_nav_toggle),
    (EventKind::NavLinkClick, on_nav_link_click),
    (EventKind::KeyDown, on_key_down),
    (EventKind::FilterChip, on_filter_chip),
    (EventKind::OpenModal, on_open_modal),
    (EventKind::SubmitForm, on_submit_form),
    (EventKind::NewsletterSubmit, on_newsletter_submit),
];

/// Route `event` to its handler. Handlers are pure: they only compute the next
/// state and the effects to apply.
pub fn dispatch(state: &UiState, event: &UiEvent, ctx: &SiteContext) -> Transition {
    let kind = event.kind();
    match DISPATCH.iter().find(|(k, _)| *k == kind) {
        Some((_, handler)) => handler(state, event, ctx),
        None => Transition::unchanged(state),
    }
}

fn on_boot(state: &UiState, event: &UiEvent, _ctx: &SiteContext) -> Transition {
    let UiEvent::Boot { scroll_y, year } = *event else {
        return Transition::unchanged(state);
    };
    let elevated = chrome::header_elevated(scroll_y);
    let next = UiState {
        filter: Some(Filter::All),
        header_elevated: elevated,
        ..*state
    };
    Transition::with(
        next,
        vec![
            Effect::StampYear(year),
            Effect::ElevateHeader(elevated),
            Effect::MarkActiveChip(Filter::All.as_str().to_string()),
            Effect::RenderUpdates(Some(Filter::All)),
        ],
    )
}

fn on_scroll(state: &UiState, event: &UiEvent, _ctx: &SiteContext) -> Transition {
    let UiEvent::Scroll { scroll_y } = *event else {
        return Transition::unchanged(state);
    };
    let elevated = chrome::header_elevated(scroll_y);
    Transition::with(
        UiState {
            header_elevated: elevated,
            ..*state
        },
        vec![Effect::ElevateHeader(elevated)],
    )
}

fn on_nav_toggle(state: &UiState, _event: &UiEvent, _ctx: &SiteContext) -> Transition {
    let open = chrome::toggled_nav(state.nav_open);
    Transition::with(
        UiState {
            nav_open: open,
            ..*state
        },
        vec![Effect::SetNavOpen(open)],
    )
}

fn close_nav(state: &UiState) -> Transition {
    Transition::with(
        UiState {
            nav_open: false,
            ..*state
        },
        vec![Effect::SetNavOpen(false)],
    )
}

fn on_nav_link_click(state: &UiState, _event: &UiEvent, _ctx: &SiteContext) -> Transition {
    close_nav(state)
}

fn on_key_down(state: &UiState, event: &UiEvent, _ctx: &SiteContext) -> Transition {
    match event {
        UiEvent::KeyDown { key } if chrome::closes_nav(key) => close_nav(state),
        _ => Transition::unchanged(state),
    }
}

fn on_filter_chip(state: &UiState, event: &UiEvent, _ctx: &SiteContext) -> Transition {
    let UiEvent::FilterChip { filter } = event else {
        return Transition::unchanged(state);
    };
    let value = chip_value(filter.as_deref());
    let selected = Filter::parse(value);
    if selected.is_none() {
        debug!(filter = value, "Chip names no known category");
    }
    Transition::with(
        UiState {
            filter: selected,
            ..*state
        },
        vec![
            Effect::MarkActiveChip(value.to_string()),
            Effect::RenderUpdates(selected),
        ],
    )
}

fn on_open_modal(state: &UiState, event: &UiEvent, _ctx: &SiteContext) -> Transition {
    match event {
        UiEvent::OpenModal(kind) => Transition::with(*state, vec![Effect::ShowModal(*kind)]),
        _ => Transition::unchanged(state),
    }
}

fn on_submit_form(state: &UiState, event: &UiEvent, ctx: &SiteContext) -> Transition {
    let UiEvent::SubmitForm { kind, values } = event else {
        return Transition::unchanged(state);
    };
    let submission = forms::submit(*kind, values, &ctx.mail_to);

    let mut effects: Vec<Effect> = submission
        .fields
        .iter()
        .map(|f| Effect::SetFieldError {
            field: f.id.clone(),
            message: f.error.clone(),
        })
        .collect();

    match submission.outcome {
        SubmissionOutcome::Rejected { message } => {
            effects.push(Effect::ShowFormResult {
                kind: *kind,
                message: message.to_string(),
            });
        }
        SubmissionOutcome::Handoff { mailto, message } => {
            effects.push(Effect::Navigate(mailto));
            effects.push(Effect::ShowFormResult {
                kind: *kind,
                message: message.to_string(),
            });
            effects.push(Effect::ResetForm(*kind));
        }
    }

    Transition::with(*state, effects).preventing_default()
}

fn on_newsletter_submit(state: &UiState, event: &UiEvent, _ctx: &SiteContext) -> Transition {
    let UiEvent::NewsletterSubmit { contact } = event else {
        return Transition::unchanged(state);
    };
    let contact = contact.trim();
    if contact.is_empty() {
        return Transition::with(*state, vec![Effect::FocusNewsletterContact]).preventing_default();
    }
    Transition::with(*state, vec![Effect::CacheContact(contact.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use campaign_common::UpdateKind;

    fn run(state: &UiState, event: UiEvent) -> Transition {
        dispatch(state, &event, &SiteContext::default())
    }

    #[test]
    fn test_every_event_kind_has_a_handler() {
        let kinds = [
            EventKind::Boot,
            EventKind::Scroll,
            EventKind::NavToggle,
            EventKind::NavLinkClick,
            EventKind::KeyDown,
            EventKind::FilterChip,
            EventKind::OpenModal,
            EventKind::SubmitForm,
            EventKind::NewsletterSubmit,
        ];
        for kind in kinds {
            assert!(DISPATCH.iter().any(|(k, _)| *k == kind), "{kind:?}");
        }
    }

    #[test]
    fn test_boot_renders_all_once() {
        let t = run(&UiState::default(), UiEvent::Boot { scroll_y: 20.0, year: 2026 });
        assert!(t.state.header_elevated);
        assert_eq!(
            t.effects,
            vec![
                Effect::StampYear(2026),
                Effect::ElevateHeader(true),
                Effect::MarkActiveChip("all".to_string()),
                Effect::RenderUpdates(Some(Filter::All)),
            ]
        );
    }

    #[test]
    fn test_filter_chip_renders_exactly_once() {
        let t = run(
            &UiState::default(),
            UiEvent::FilterChip {
                filter: Some("press".to_string()),
            },
        );
        let press = Some(Filter::Only(UpdateKind::Press));
        assert_eq!(t.state.filter, press);
        let renders: Vec<_> = t
            .effects
            .iter()
            .filter(|e| matches!(e, Effect::RenderUpdates(_)))
            .collect();
        assert_eq!(renders, vec![&Effect::RenderUpdates(press)]);
    }

    #[test]
    fn test_unknown_filter_selects_nothing() {
        let state = UiState {
            filter: Some(Filter::Only(UpdateKind::Field)),
            ..UiState::default()
        };
        let t = run(
            &state,
            UiEvent::FilterChip {
                filter: Some("rallies".to_string()),
            },
        );
        assert_eq!(t.state.filter, None);
        assert_eq!(
            t.effects,
            vec![
                Effect::MarkActiveChip("rallies".to_string()),
                Effect::RenderUpdates(None),
            ]
        );
    }

    #[test]
    fn test_chip_without_value_selects_all() {
        let t = run(&UiState::default(), UiEvent::FilterChip { filter: None });
        assert_eq!(t.state.filter, Some(Filter::All));
        assert_eq!(t.effects[0], Effect::MarkActiveChip("all".to_string()));
    }

    #[test]
    fn test_nav_toggle_round_trip() {
        let opened = run(&UiState::default(), UiEvent::NavToggle);
        assert!(opened.state.nav_open);
        let closed = run(&opened.state, UiEvent::NavToggle);
        assert!(!closed.state.nav_open);
        assert_eq!(closed.effects, vec![Effect::SetNavOpen(false)]);
    }

    #[test]
    fn test_escape_closes_nav_other_keys_do_not() {
        let open = UiState {
            nav_open: true,
            ..UiState::default()
        };
        let t = run(&open, UiEvent::KeyDown { key: "Tab".to_string() });
        assert!(t.state.nav_open);
        let t = run(&open, UiEvent::KeyDown { key: "Escape".to_string() });
        assert!(!t.state.nav_open);
    }

    #[test]
    fn test_rejected_submission_does_not_navigate() {
        let t = run(
            &UiState::default(),
            UiEvent::SubmitForm {
                kind: FormKind::Contact,
                values: FormValues::new(),
            },
        );
        assert!(t.prevent_default);
        assert!(!t.effects.iter().any(|e| matches!(e, Effect::Navigate(_))));
        assert!(t.effects.contains(&Effect::ShowFormResult {
            kind: FormKind::Contact,
            message: forms::REVIEW_MESSAGE.to_string(),
        }));
    }

    #[test]
    fn test_blank_newsletter_contact_refocuses() {
        let t = run(
            &UiState::default(),
            UiEvent::NewsletterSubmit {
                contact: "   ".to_string(),
            },
        );
        assert!(t.prevent_default);
        assert_eq!(t.effects, vec![Effect::FocusNewsletterContact]);
    }

    #[test]
    fn test_newsletter_contact_is_trimmed() {
        let t = run(
            &UiState::default(),
            UiEvent::NewsletterSubmit {
                contact: " 0712 345678 ".to_string(),
            },
        );
        assert!(!t.prevent_default);
        assert_eq!(t.effects, vec![Effect::CacheContact("0712 345678".to_string())]);
    }
}
