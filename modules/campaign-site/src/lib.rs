//! Headless page controller for the campaign site.
//!
//! The page is modelled as a [`Document`] of named hooks. UI events are dispatched
//! through pure handlers that return a new [`UiState`] plus a list of [`Effect`]s,
//! and the [`Site`] runtime applies those effects to the document, dialogs and
//! newsletter store.

pub mod cache;
pub mod chrome;
pub mod document;
pub mod events;
pub mod filters;
pub mod forms;
pub mod render;
pub mod site;
pub mod validate;

pub use cache::{append_contact, remember_contact, FileStore, KeyValueStore, MemoryStore};
pub use chrome::{DialogHost, HtmlDialog, ModalKind};
pub use document::{Document, Element};
pub use events::{dispatch, Effect, SiteContext, Transition, UiEvent, UiState};
pub use forms::{FormKind, FormSpec, FormValues, Submission, SubmissionOutcome};
pub use render::render_updates;
pub use site::{Handled, Site};
pub use validate::Field;
