//! Route handlers.
//!
//! Handlers translate between HTTP and the contact workflow: they pull form
//! fields and the session out of the request, call the workflow, and either
//! render a view or redirect to the contact list.

use crate::models::{ContactForm, DeleteContactForm, UpdateContactForm};
use crate::services::Outcome;
use crate::session::SessionId;
use crate::web::error::AppError;
use crate::web::state::AppState;
use crate::web::views::{ERROR_LAYOUT, MAIN_LAYOUT};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Extension, Form};
use serde_json::{json, Value};

/// Where every successful write sends the browser.
pub const CONTACT_LIST_PATH: &str = "/contact";

type HandlerResult = Result<Response, AppError>;

fn render(state: &AppState, view: &str, data: Value) -> HandlerResult {
    let page = state.views().render(view, &data)?;
    Ok(Html(page).into_response())
}

pub async fn home(State(state): State<AppState>) -> HandlerResult {
    render(
        &state,
        "index",
        json!({
            "title": "Home",
            "layout": MAIN_LAYOUT,
            "nama": "Ardhi Harry",
            "mahasiswa": [
                {"nama": "Ardhi Harry", "email": "ardhiharry@gmail.com"},
                {"nama": "Bayu Krisna", "email": "bayukrisna@gmail.com"},
                {"nama": "Fanky Nurila", "email": "fankynurila@gmail.com"},
            ],
        }),
    )
}

pub async fn about(State(state): State<AppState>) -> HandlerResult {
    render(&state, "about", json!({"title": "About", "layout": MAIN_LAYOUT}))
}

pub async fn list_contacts(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> HandlerResult {
    let listing = state.workflow().list(&session).await?;
    render(
        &state,
        "contact",
        json!({
            "title": "Contact",
            "layout": MAIN_LAYOUT,
            "contacts": listing.contacts,
            "msg": listing.messages,
        }),
    )
}

pub async fn add_form(State(state): State<AppState>) -> HandlerResult {
    render(
        &state,
        "contact-add",
        json!({"title": "Add Contact", "layout": MAIN_LAYOUT}),
    )
}

pub async fn create_contact(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<ContactForm>,
) -> HandlerResult {
    match state.workflow().create(&session, form).await? {
        Outcome::Applied => Ok(Redirect::to(CONTACT_LIST_PATH).into_response()),
        Outcome::Rejected(rejection) => render(
            &state,
            "contact-add",
            json!({
                "title": "Add Contact",
                "layout": MAIN_LAYOUT,
                "errors": rejection.errors,
                "contact": rejection.input,
            }),
        ),
    }
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> HandlerResult {
    let contact = state.workflow().edit_form(&name).await?;
    render(
        &state,
        "contact-edit",
        json!({"title": "Edit Contact", "layout": MAIN_LAYOUT, "contact": contact}),
    )
}

pub async fn update_contact(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<UpdateContactForm>,
) -> HandlerResult {
    match state.workflow().update(&session, form).await? {
        Outcome::Applied => Ok(Redirect::to(CONTACT_LIST_PATH).into_response()),
        Outcome::Rejected(rejection) => render(
            &state,
            "contact-edit",
            json!({
                "title": "Edit Contact",
                "layout": MAIN_LAYOUT,
                "errors": rejection.errors,
                "contact": rejection.input,
            }),
        ),
    }
}

pub async fn contact_detail(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> HandlerResult {
    let contact = state.workflow().detail(&name).await?;
    render(
        &state,
        "contact-detail",
        json!({"title": "Contact Detail", "layout": MAIN_LAYOUT, "contact": contact}),
    )
}

pub async fn delete_contact(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<DeleteContactForm>,
) -> HandlerResult {
    state.workflow().delete(&session, &form.name).await?;
    Ok(Redirect::to(CONTACT_LIST_PATH).into_response())
}

pub async fn not_found(State(state): State<AppState>) -> HandlerResult {
    let page = state
        .views()
        .render("404", &json!({"title": "404", "layout": ERROR_LAYOUT}))?;
    Ok((StatusCode::NOT_FOUND, Html(page)).into_response())
}
