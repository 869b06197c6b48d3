//! HTTP surface of the contact application.
//!
//! Routes:
//! - GET    /                    : landing page
//! - GET    /about               : about page
//! - GET    /contact             : contact list (flushes flash messages)
//! - GET    /contact/add         : create form
//! - POST   /contact             : create a contact
//! - PUT    /contact             : update a contact
//! - DELETE /contact             : delete a contact by name
//! - GET    /contact/edit/:name  : edit form
//! - GET    /contact/:name       : contact detail
//!
//! Anything else is looked up in the static directory, then answered with
//! the 404 page.
//!
//! ## Middleware Stack (Tower)
//!
//! method override → TraceLayer → session cookie → router

pub mod error;
pub mod handlers;
pub mod method_override;
pub mod session;
pub mod state;
pub mod views;

pub use error::AppError;
pub use state::AppState;
pub use views::{HtmlViews, ViewRenderer};

use axum::extract::Request;
use axum::handler::Handler;
use axum::routing::get;
use axum::{middleware, Router};
use std::path::Path;
use tower::util::MapRequest;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// The complete application service: the router behind method override.
pub type App = MapRequest<Router, fn(Request) -> Request>;

/// Build the router with all routes, static files and middleware.
///
/// Method override is not part of this router because it has to run before
/// routing; see [`app`].
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let not_found = handlers::not_found.with_state(state.clone());
    let assets = ServeDir::new(static_dir.as_ref()).not_found_service(not_found);

    Router::new()
        .route("/", get(handlers::home))
        .route("/about", get(handlers::about))
        .route(
            "/contact",
            get(handlers::list_contacts)
                .post(handlers::create_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .route("/contact/add", get(handlers::add_form))
        .route("/contact/edit/:name", get(handlers::edit_form))
        .route("/contact/:name", get(handlers::contact_detail))
        .fallback_service(assets)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session::ensure_session,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the application service: [`router`] wrapped in method override.
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> App {
    ServiceBuilder::new()
        .map_request(method_override::method_override as fn(Request) -> Request)
        .service(router(state, static_dir))
}
