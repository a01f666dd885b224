//! Preview server for the campaign site. Serves the page with the updates list
//! prerendered and runs the same validation and mail handoff as the page
//! controller for browsers without script.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use tokio::sync::Mutex;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{debug, info, warn};

use campaign_common::{Config, Filter, UpdateRecord, UPDATES};
use campaign_site::forms::{self, FormKind, FormValues, SubmissionOutcome};
use campaign_site::render::select_updates;
use campaign_site::{remember_contact, render_updates, KeyValueStore, ModalKind};

pub mod templates;
use templates::{render_page, FormView, PageView};

// --- App State ---

pub struct AppState {
    pub mail_to: String,
    /// Serialises read-modify-write appends to the newsletter list.
    pub cache: Mutex<Box<dyn KeyValueStore>>,
}

impl AppState {
    pub fn new(config: &Config, cache: Box<dyn KeyValueStore>) -> Self {
        Self {
            mail_to: config.mail_to.clone(),
            cache: Mutex::new(cache),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/updates", get(updates_fragment))
        .route("/api/updates", get(api_updates))
        .route("/forms/{kind}", post(submit_form))
        .route("/newsletter", post(subscribe_newsletter))
        .with_state(state)
        // Visitor input ends up in rendered pages; never cache them.
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Method and path only: no query strings, no form bodies.
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

// --- Handlers ---

#[derive(Deserialize)]
struct PageQuery {
    filter: Option<String>,
    modal: Option<String>,
}

impl PageQuery {
    fn resolve(&self) -> Result<Filter, Response> {
        match self.filter.as_deref() {
            None | Some("") => Ok(Filter::All),
            Some(raw) => Filter::parse(raw).ok_or_else(|| {
                (StatusCode::BAD_REQUEST, format!("Unknown filter: {raw}")).into_response()
            }),
        }
    }

    fn resolve_modal(&self) -> Result<Option<ModalKind>, Response> {
        match self.modal.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => ModalKind::parse(raw).map(Some).ok_or_else(|| {
                (StatusCode::BAD_REQUEST, format!("Unknown dialog: {raw}")).into_response()
            }),
        }
    }
}

fn current_year() -> i32 {
    Utc::now().year()
}

/// Full page. `?modal=` renders that dialog open so its trigger works without script.
async fn index_page(Query(query): Query<PageQuery>) -> Response {
    let (filter, modal) = match (query.resolve(), query.resolve_modal()) {
        (Ok(filter), Ok(modal)) => (filter, modal),
        (Err(rejection), _) | (_, Err(rejection)) => return rejection,
    };
    let view = PageView::new(filter, current_year()).with_modal(modal);
    Html(render_page(&view)).into_response()
}

async fn updates_fragment(Query(query): Query<PageQuery>) -> Response {
    match query.resolve() {
        Ok(filter) => Html(render_updates(filter)).into_response(),
        Err(rejection) => rejection,
    }
}

async fn api_updates(Query(query): Query<PageQuery>) -> Response {
    match query.resolve() {
        Ok(filter) => {
            let records: Vec<&UpdateRecord> = select_updates(UPDATES, filter);
            Json(records).into_response()
        }
        Err(rejection) => rejection,
    }
}

async fn submit_form(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let Some(kind) = FormKind::parse(&kind) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let values: FormValues = fields.into_iter().collect();
    let submission = forms::submit(kind, &values, &state.mail_to);

    match &submission.outcome {
        SubmissionOutcome::Handoff { mailto, .. } => match HeaderValue::from_str(mailto) {
            Ok(location) => (StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response(),
            Err(_) => {
                warn!(form = %kind, "Mail link is not a valid Location header");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        },
        SubmissionOutcome::Rejected { .. } => {
            let view = PageView::new(Filter::All, current_year())
                .with_form(kind, FormView::from_submission(values, &submission));
            (StatusCode::UNPROCESSABLE_ENTITY, Html(render_page(&view))).into_response()
        }
    }
}

#[derive(Deserialize)]
struct NewsletterForm {
    #[serde(default)]
    contact: String,
}

async fn subscribe_newsletter(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NewsletterForm>,
) -> Redirect {
    let contact = form.contact.trim().to_string();
    if contact.is_empty() {
        debug!("Empty newsletter contact, sending visitor back to the input");
        return Redirect::to("/?modal=newsletter#n-contact");
    }

    // The store does blocking file I/O.
    let appended = tokio::task::spawn_blocking(move || {
        let mut cache = state.cache.blocking_lock();
        remember_contact(&mut **cache, &contact)
    })
    .await;

    match appended {
        Ok(Some(len)) => info!(entries = len, "Newsletter contact cached"),
        Ok(None) => {}
        Err(e) => warn!(error = %e, "Newsletter cache task failed"),
    }
    Redirect::to("/#updates")
}
