use tracing::debug;

/// Scroll offset, in CSS pixels, past which the header is drawn elevated.
pub const HEADER_ELEVATION_THRESHOLD: f64 = 6.0;

pub fn header_elevated(scroll_y: f64) -> bool {
    scroll_y > HEADER_ELEVATION_THRESHOLD
}

// --- Navigation ---

pub fn toggled_nav(open: bool) -> bool {
    !open
}

pub fn aria_expanded(open: bool) -> &'static str {
    if open {
        "true"
    } else {
        "false"
    }
}

/// Keys that dismiss the mobile navigation.
pub fn closes_nav(key: &str) -> bool {
    key == "Escape"
}

// --- Modals ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModalKind {
    Newsletter,
    Donate,
    Accessibility,
}

impl ModalKind {
    pub const ALL: [ModalKind; 3] = [
        ModalKind::Newsletter,
        ModalKind::Donate,
        ModalKind::Accessibility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModalKind::Newsletter => "newsletter",
            ModalKind::Donate => "donate",
            ModalKind::Accessibility => "accessibility",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }

    pub fn dialog_id(&self) -> &'static str {
        match self {
            ModalKind::Newsletter => "newsletter-modal",
            ModalKind::Donate => "donate-modal",
            ModalKind::Accessibility => "accessibility-modal",
        }
    }

    /// Attribute carried by the controls that open this dialog.
    pub fn trigger_attribute(&self) -> &'static str {
        match self {
            ModalKind::Newsletter => "data-open-newsletter",
            ModalKind::Donate => "data-open-donate",
            ModalKind::Accessibility => "data-open-accessibility",
        }
    }
}

/// A dialog element as exposed by the runtime. Modal presentation is optional
/// and must be queried before use.
pub trait DialogHost: Send {
    fn supports_modal(&self) -> bool;
    fn show_modal(&mut self);
    fn is_open(&self) -> bool;
}

/// Dialog backed by a native `<dialog>` element.
#[derive(Debug, Clone, Default)]
pub struct HtmlDialog {
    supported: bool,
    open: bool,
}

impl HtmlDialog {
    pub fn new() -> Self {
        Self {
            supported: true,
            open: false,
        }
    }

    /// A dialog on a runtime without modal support.
    pub fn unsupported() -> Self {
        Self::default()
    }
}

impl DialogHost for HtmlDialog {
    fn supports_modal(&self) -> bool {
        self.supported
    }

    fn show_modal(&mut self) {
        self.open = true;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

/// Show `dialog` if the runtime supports it. Returns whether it was shown.
pub fn show_if_supported(kind: ModalKind, dialog: &mut dyn DialogHost) -> bool {
    if !dialog.supports_modal() {
        debug!(modal = kind.dialog_id(), "Modal dialogs unsupported, ignoring trigger");
        return false;
    }
    dialog.show_modal();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_threshold_is_exclusive() {
        assert!(!header_elevated(0.0));
        assert!(!header_elevated(6.0));
        assert!(header_elevated(6.5));
        assert!(header_elevated(400.0));
    }

    #[test]
    fn test_only_escape_closes_nav() {
        assert!(closes_nav("Escape"));
        assert!(!closes_nav("Enter"));
        assert!(!closes_nav("escape"));
    }

    #[test]
    fn test_unsupported_dialog_stays_closed() {
        let mut dialog = HtmlDialog::unsupported();
        assert!(!show_if_supported(ModalKind::Donate, &mut dialog));
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_supported_dialog_opens() {
        let mut dialog = HtmlDialog::new();
        assert!(show_if_supported(ModalKind::Newsletter, &mut dialog));
        assert!(dialog.is_open());
    }

    #[test]
    fn test_modal_names_resolve() {
        for kind in ModalKind::ALL {
            assert_eq!(ModalKind::parse(kind.as_str()), Some(kind));
            assert!(kind.trigger_attribute().ends_with(kind.as_str()));
        }
        assert_eq!(ModalKind::parse("volunteer"), None);
    }
}
