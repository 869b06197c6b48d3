//! End-to-end tests for the HTTP surface.
//!
//! The application service is driven with `tower::ServiceExt::oneshot`, so
//! every request passes through method override, the session cookie layer
//! and the router exactly as it would behind a listener.

mod mocks;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use contact_app::store::ContactStore;
use contact_app::web::App;
use contact_app::{AppState, Config, InMemoryContactStore};
use http_body_util::BodyExt;
use mocks::MockContactStore;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

const FORM: &str = "application/x-www-form-urlencoded";

struct TestApp {
    app: App,
    store: Arc<InMemoryContactStore>,
    _static_dir: TempDir,
}

impl TestApp {
    fn new() -> Self {
        let store = Arc::new(InMemoryContactStore::new());
        let state = AppState::from_config(store.clone(), &Config::default()).unwrap();
        let static_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(static_dir.path().join("css")).unwrap();
        std::fs::write(static_dir.path().join("css/style.css"), "body { margin: 0; }").unwrap();

        Self {
            app: contact_app::app(state, static_dir.path()),
            store,
            _static_dir: static_dir,
        }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.app.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, FORM);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }
}

async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// The `sid=<uuid>` pair from the response's Set-Cookie header.
fn session_cookie(response: &Response) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie issued")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().trim().to_string()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect location")
        .to_str()
        .unwrap()
}

#[tokio::test]
async fn test_home_and_about_pages() {
    let app = TestApp::new();

    let response = app.get("/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Ardhi Harry"));
    assert!(body.contains("Fanky Nurila"));

    let response = app.get("/about", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("About"));
}

#[tokio::test]
async fn test_every_response_carries_a_session_cookie() {
    let app = TestApp::new();

    let response = app.get("/", None).await;
    let cookie = session_cookie(&response);
    assert!(cookie.starts_with("sid="));

    let set_cookie = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Max-Age=6"));

    // A known session keeps its id.
    let again = app.get("/about", Some(&cookie)).await;
    assert_eq!(session_cookie(&again), cookie);
}

#[tokio::test]
async fn test_empty_contact_list() {
    let app = TestApp::new();

    let response = app.get("/contact", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Data contact masih kosong!"));
}

#[tokio::test]
async fn test_create_redirects_and_flashes_once() {
    let app = TestApp::new();

    let response = app
        .post_form(
            "/contact",
            "nama=Ardhi&email=ardhi%40example.com&nohp=081234567890",
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/contact");
    let cookie = session_cookie(&response);
    assert_eq!(app.store.len().await, 1);

    let body = body_string(app.get("/contact", Some(&cookie)).await).await;
    assert!(body.contains("Data contact berhasil ditambahkan!"));
    assert!(body.contains("Ardhi"));

    let body = body_string(app.get("/contact", Some(&cookie)).await).await;
    assert!(!body.contains("Data contact berhasil ditambahkan!"));
    assert!(body.contains("Ardhi"));
}

#[tokio::test]
async fn test_invalid_create_rerenders_form_with_errors() {
    let app = TestApp::new();

    let response = app
        .post_form("/contact", "nama=Ardhi&email=nope&nohp=12345", None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Email tidak valid!"));
    assert!(body.contains("No HP tidak valid!"));
    assert!(body.contains("value=\"nope\""));
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_duplicate_name_is_rejected() {
    let app = TestApp::new();
    let body = "nama=Ardhi&email=ardhi%40example.com&nohp=081234567890";

    app.post_form("/contact", body, None).await;
    let response = app.post_form("/contact", body, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Nama contact sudah digunakan"));
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_update_through_method_override() {
    let app = TestApp::new();
    app.post_form(
        "/contact",
        "nama=Ardhi&email=ardhi%40example.com&nohp=081234567890",
        None,
    )
    .await;
    let id = app.store.find_all().await.unwrap()[0].id.to_string();

    let form = format!(
        "_id={}&oldNama=Ardhi&nama=Ardhi+Harry&email=harry%40example.com&nohp=%2B6281234567890",
        id
    );
    let response = app.post_form("/contact?_method=PUT", &form, None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookie = session_cookie(&response);

    let contact = app.store.find_by_name("Ardhi Harry").await.unwrap().unwrap();
    assert_eq!(contact.email, "harry@example.com");
    assert!(app.store.find_by_name("Ardhi").await.unwrap().is_none());

    let body = body_string(app.get("/contact", Some(&cookie)).await).await;
    assert!(body.contains("Data contact berhasil diubah!"));
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let app = TestApp::new();

    let response = app
        .post_form(
            "/contact?_method=PUT",
            "_id=missing&oldNama=Ghost&nama=Ghost&email=ghost%40example.com&nohp=081234567890",
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_delete_through_method_override() {
    let app = TestApp::new();
    app.post_form(
        "/contact",
        "nama=Ardhi&email=ardhi%40example.com&nohp=081234567890",
        None,
    )
    .await;

    let response = app
        .post_form("/contact?_method=DELETE", "nama=Ardhi", None)
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/contact");
    assert!(app.store.is_empty().await);

    let cookie = session_cookie(&response);
    let body = body_string(app.get("/contact", Some(&cookie)).await).await;
    assert!(body.contains("Data contact berhasil dihapus!"));
}

#[tokio::test]
async fn test_detail_and_edit_pages() {
    let app = TestApp::new();
    app.post_form(
        "/contact",
        "nama=Bayu+Krisna&email=bayu%40example.com&nohp=081298765432",
        None,
    )
    .await;

    let response = app.get("/contact/Bayu%20Krisna", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("bayu@example.com"));
    assert!(body.contains("081298765432"));

    let response = app.get("/contact/edit/Bayu%20Krisna", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("name=\"oldName\""));
    assert!(body.contains("value=\"Bayu Krisna\""));
}

#[tokio::test]
async fn test_missing_contact_pages_render_empty_state() {
    let app = TestApp::new();

    let response = app.get("/contact/Nobody", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Contact tidak ditemukan."));

    let response = app.get("/contact/edit/Nobody", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Contact tidak ditemukan."));
}

#[tokio::test]
async fn test_add_form_page() {
    let app = TestApp::new();

    let response = app.get("/contact/add", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("action=\"/contact\""));
}

#[tokio::test]
async fn test_static_files_and_unknown_paths() {
    let app = TestApp::new();

    let response = app.get("/css/style.css", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("margin"));

    let response = app.get("/no/such/page", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("404"));
}

#[tokio::test]
async fn test_override_is_ignored_on_get() {
    let app = TestApp::new();
    app.post_form(
        "/contact",
        "nama=Ardhi&email=ardhi%40example.com&nohp=081234567890",
        None,
    )
    .await;

    let response = app.get("/contact?_method=DELETE", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_store_outage_is_500() {
    let store = MockContactStore::new();
    store.add_contact("1", "Ardhi", "ardhi@example.com", "081234567890");
    let state = AppState::from_config(Arc::new(store.clone()), &Config::default()).unwrap();
    let static_dir = TempDir::new().unwrap();
    let app = contact_app::app(state, static_dir.path());

    store.set_unavailable(true);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/contact").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body_string(response).await.contains("Ardhi"));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/contact")
                .header(header::CONTENT_TYPE, FORM)
                .body(Body::from("nama=Bayu&email=bayu%40example.com&nohp=081298765432"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(store.get_call_count("create"), 0);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/contact?_method=DELETE")
                .header(header::CONTENT_TYPE, FORM)
                .body(Body::from("nama=Ardhi"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(store.len(), 1);
}
