use std::collections::{BTreeMap, BTreeSet};

use campaign_common::Filter;

use crate::forms::FormKind;

/// Selectors the page markup must supply. Operations whose hook is absent do nothing.
pub mod hooks {
    pub const YEAR: &str = "#year";
    pub const HEADER: &str = "[data-elevate]";
    pub const SITE_NAV: &str = "#site-nav";
    pub const NAV_TOGGLE: &str = "[data-nav-toggle]";
    pub const UPDATES_LIST: &str = "#updates-list";
    pub const NEWSLETTER_CONTACT: &str = "#n-contact";
    pub const NEWSLETTER_SUBMIT: &str = "#n-submit";

    pub const ELEVATED_CLASS: &str = "is-elevated";
    pub const OPEN_CLASS: &str = "is-open";
    pub const ACTIVE_CLASS: &str = "is-active";

    pub fn id(id: &str) -> String {
        format!("#{id}")
    }

    pub fn error_hint(field_id: &str) -> String {
        format!("[data-error-for=\"{field_id}\"]")
    }
}

// --- Element ---

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    pub text: String,
    pub value: String,
    pub inner_html: String,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.classes.insert(class.to_string());
        } else {
            self.classes.remove(class);
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}

// --- Document ---

/// In-memory model of the page: hooked elements keyed by selector, the ordered
/// filter chips, keyboard focus and the current navigation target.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: BTreeMap<String, Element>,
    chips: Vec<Element>,
    focused: Option<String>,
    location: Option<String>,
}

impl Document {
    /// A document with no hooks at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document carrying every hook the campaign page markup provides.
    pub fn campaign_page() -> Self {
        let mut doc = Self::new()
            .with(hooks::YEAR, Element::new())
            .with(hooks::HEADER, Element::new())
            .with(hooks::SITE_NAV, Element::new())
            .with(
                hooks::NAV_TOGGLE,
                Element::new().with_attribute("aria-expanded", "false"),
            )
            .with(hooks::UPDATES_LIST, Element::new())
            .with(hooks::NEWSLETTER_CONTACT, Element::new())
            .with(hooks::NEWSLETTER_SUBMIT, Element::new());

        for filter in Filter::CHOICES {
            doc.push_chip(Some(filter.as_str()));
        }

        for kind in FormKind::ALL {
            let spec = kind.spec();
            doc.insert(&hooks::id(spec.form_id), Element::new());
            doc.insert(&hooks::id(spec.result_id), Element::new());
            for field in spec.fields {
                doc.insert(&hooks::id(field.id), Element::new());
                doc.insert(&hooks::error_hint(field.id), Element::new());
            }
        }

        doc
    }

    pub fn with(mut self, selector: &str, element: Element) -> Self {
        self.insert(selector, element);
        self
    }

    pub fn insert(&mut self, selector: &str, element: Element) {
        self.elements.insert(selector.to_string(), element);
    }

    pub fn remove(&mut self, selector: &str) -> Option<Element> {
        self.elements.remove(selector)
    }

    pub fn contains(&self, selector: &str) -> bool {
        self.elements.contains_key(selector)
    }

    pub fn query(&self, selector: &str) -> Option<&Element> {
        self.elements.get(selector)
    }

    pub fn query_mut(&mut self, selector: &str) -> Option<&mut Element> {
        self.elements.get_mut(selector)
    }

    /// Type into an input. Returns false when the input is not on the page.
    pub fn set_value(&mut self, selector: &str, value: &str) -> bool {
        match self.elements.get_mut(selector) {
            Some(el) => {
                el.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Append a filter chip. `None` models a chip with no `data-filter` attribute.
    pub fn push_chip(&mut self, filter: Option<&str>) {
        let mut chip = Element::new().with_attribute("aria-selected", "false");
        if let Some(filter) = filter {
            chip.set_attribute("data-filter", filter);
        }
        self.chips.push(chip);
    }

    pub fn chips(&self) -> &[Element] {
        &self.chips
    }

    pub fn chips_mut(&mut self) -> &mut [Element] {
        &mut self.chips
    }

    pub fn focus(&mut self, selector: &str) {
        if self.contains(selector) {
            self.focused = Some(selector.to_string());
        }
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn navigate(&mut self, url: &str) {
        self.location = Some(url.to_string());
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}
