use std::collections::BTreeMap;

use tracing::debug;

use crate::cache::{remember_contact, KeyValueStore};
use crate::chrome::{self, DialogHost, ModalKind};
use crate::document::{hooks, Document};
use crate::events::{dispatch, Effect, EventKind, SiteContext, UiEvent, UiState};
use crate::filters::mark_active_chip;
use crate::forms::{FormKind, FormValues};
use crate::render::render_selection;

/// What happened when an event was handled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Handled {
    /// Effects that reached the page. Effects whose hook was missing are left out.
    pub applied: Vec<Effect>,
    pub prevent_default: bool,
}

/// The page controller: owns the UI state and applies dispatcher effects to the
/// document, dialogs and newsletter store. Events are handled one at a time.
pub struct Site {
    state: UiState,
    ctx: SiteContext,
    document: Document,
    dialogs: BTreeMap<ModalKind, Box<dyn DialogHost>>,
    store: Box<dyn KeyValueStore>,
}

impl Site {
    pub fn new(document: Document, store: Box<dyn KeyValueStore>, ctx: SiteContext) -> Self {
        Self {
            state: UiState::default(),
            ctx,
            document,
            dialogs: BTreeMap::new(),
            store,
        }
    }

    pub fn with_dialog(mut self, kind: ModalKind, dialog: Box<dyn DialogHost>) -> Self {
        self.dialogs.insert(kind, dialog);
        self
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn dialog(&self, kind: ModalKind) -> Option<&dyn DialogHost> {
        self.dialogs.get(&kind).map(|d| d.as_ref())
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    // --- Input helpers ---

    pub fn boot(&mut self, scroll_y: f64, year: i32) -> Handled {
        self.handle(UiEvent::Boot { scroll_y, year })
    }

    /// Click the chip at `index`. Out-of-range indices do nothing.
    pub fn click_chip(&mut self, index: usize) -> Handled {
        let Some(chip) = self.document.chips().get(index) else {
            return Handled::default();
        };
        let filter = chip.attribute("data-filter").map(str::to_string);
        self.handle(UiEvent::FilterChip { filter })
    }

    /// Submit a form with whatever its inputs currently hold. A form whose result
    /// area or any input is missing from the page is left alone.
    pub fn submit_form(&mut self, kind: FormKind) -> Handled {
        let spec = kind.spec();
        if !self.document.contains(&hooks::id(spec.result_id)) {
            debug!(form = %kind, "Form result hook missing, skipping submit");
            return Handled::default();
        }

        let mut values = FormValues::new();
        for field in spec.fields {
            let Some(input) = self.document.query(&hooks::id(field.id)) else {
                debug!(form = %kind, field = field.id, "Form input missing, skipping submit");
                return Handled::default();
            };
            values.insert(field.id, &input.value);
        }

        self.handle(UiEvent::SubmitForm { kind, values })
    }

    pub fn submit_newsletter(&mut self) -> Handled {
        let Some(input) = self.document.query(hooks::NEWSLETTER_CONTACT) else {
            return Handled::default();
        };
        let contact = input.value.clone();
        self.handle(UiEvent::NewsletterSubmit { contact })
    }

    // --- Dispatch ---

    /// Handle one event to completion. Events whose hooks are absent are no-ops.
    pub fn handle(&mut self, event: UiEvent) -> Handled {
        if !self.hooks_present(&event) {
            debug!(event = ?event.kind(), "Required hooks missing, ignoring event");
            return Handled::default();
        }

        let transition = dispatch(&self.state, &event, &self.ctx);
        self.state = transition.state;

        let applied = transition
            .effects
            .into_iter()
            .filter(|effect| self.apply(effect))
            .collect();

        Handled {
            applied,
            prevent_default: transition.prevent_default,
        }
    }

    fn hooks_present(&self, event: &UiEvent) -> bool {
        match event.kind() {
            EventKind::Scroll => self.document.contains(hooks::HEADER),
            EventKind::NavToggle | EventKind::NavLinkClick | EventKind::KeyDown => {
                self.document.contains(hooks::SITE_NAV) && self.document.contains(hooks::NAV_TOGGLE)
            }
            EventKind::OpenModal => match event {
                UiEvent::OpenModal(kind) => self.dialogs.contains_key(kind),
                _ => false,
            },
            EventKind::SubmitForm => match event {
                UiEvent::SubmitForm { kind, .. } => {
                    self.document.contains(&hooks::id(kind.spec().result_id))
                }
                _ => false,
            },
            EventKind::NewsletterSubmit => {
                self.document.contains(hooks::NEWSLETTER_CONTACT)
                    && self.document.contains(hooks::NEWSLETTER_SUBMIT)
            }
            EventKind::Boot | EventKind::FilterChip => true,
        }
    }

    /// Apply one effect. Returns false when its target is not on the page.
    fn apply(&mut self, effect: &Effect) -> bool {
        match effect {
            Effect::StampYear(year) => match self.document.query_mut(hooks::YEAR) {
                Some(el) => {
                    el.text = year.to_string();
                    true
                }
                None => false,
            },
            Effect::ElevateHeader(on) => match self.document.query_mut(hooks::HEADER) {
                Some(el) => {
                    el.toggle_class(hooks::ELEVATED_CLASS, *on);
                    true
                }
                None => false,
            },
            Effect::SetNavOpen(open) => {
                if !self.document.contains(hooks::NAV_TOGGLE) {
                    return false;
                }
                let Some(nav) = self.document.query_mut(hooks::SITE_NAV) else {
                    return false;
                };
                nav.toggle_class(hooks::OPEN_CLASS, *open);
                if let Some(toggle) = self.document.query_mut(hooks::NAV_TOGGLE) {
                    toggle.set_attribute("aria-expanded", chrome::aria_expanded(*open));
                }
                true
            }
            Effect::MarkActiveChip(value) => {
                mark_active_chip(self.document.chips_mut(), value);
                true
            }
            Effect::RenderUpdates(filter) => match self.document.query_mut(hooks::UPDATES_LIST) {
                Some(list) => {
                    list.inner_html = render_selection(*filter);
                    debug!(filter = ?filter, "Rendered updates");
                    true
                }
                None => false,
            },
            Effect::ShowModal(kind) => match self.dialogs.get_mut(kind) {
                Some(dialog) => chrome::show_if_supported(*kind, dialog.as_mut()),
                None => false,
            },
            Effect::SetFieldError { field, message } => {
                let input_present = match self.document.query_mut(&hooks::id(field)) {
                    Some(input) => {
                        let invalid = if message.is_empty() { "false" } else { "true" };
                        input.set_attribute("aria-invalid", invalid);
                        true
                    }
                    None => false,
                };
                if let Some(hint) = self.document.query_mut(&hooks::error_hint(field)) {
                    hint.text = message.clone();
                }
                input_present
            }
            Effect::ShowFormResult { kind, message } => {
                match self.document.query_mut(&hooks::id(kind.spec().result_id)) {
                    Some(result) => {
                        result.text = message.clone();
                        true
                    }
                    None => false,
                }
            }
            Effect::Navigate(url) => {
                self.document.navigate(url);
                true
            }
            Effect::ResetForm(kind) => {
                for field in kind.spec().fields {
                    self.document.set_value(&hooks::id(field.id), "");
                }
                true
            }
            Effect::FocusNewsletterContact => {
                self.document.focus(hooks::NEWSLETTER_CONTACT);
                self.document.focused() == Some(hooks::NEWSLETTER_CONTACT)
            }
            Effect::CacheContact(contact) => {
                // Failure is already logged; the cache is never authoritative.
                remember_contact(self.store.as_mut(), contact);
                true
            }
        }
    }
}
