//! Web presentation layer for the registration system.
//!
//! Exposes an axum [`Router`] serving the registration site (home, list,
//! add, deregister) backed by any [`SnapshotStore`].

pub mod error;
pub mod handlers;
pub mod render;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use parking_lot::Mutex;
use rollbook_core::{school::School, store::SnapshotStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use handlers::{add, deregister, home, list};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `ROLLBOOK_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:     String,
  #[serde(default = "default_port")]
  pub port:     u16,
  /// Directory holding the per-category snapshot files.
  #[serde(default = "default_data_dir")]
  pub data_dir: PathBuf,
  /// Append-mode activity log, one line per successful mutation.
  #[serde(default = "default_log_file")]
  pub log_file: PathBuf,
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  5000
}

fn default_data_dir() -> PathBuf {
  PathBuf::from(".")
}

fn default_log_file() -> PathBuf {
  PathBuf::from("registration.log")
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:     default_host(),
      port:     default_port(),
      data_dir: default_data_dir(),
      log_file: default_log_file(),
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
///
/// The whole school sits behind one mutex: requests are dispatched
/// concurrently, and every mutation must see and snapshot a consistent
/// registry.
pub struct AppState<S: SnapshotStore> {
  pub school: Arc<Mutex<School<S>>>,
}

impl<S: SnapshotStore> AppState<S> {
  pub fn new(school: School<S>) -> Self {
    Self { school: Arc::new(Mutex::new(school)) }
  }
}

impl<S: SnapshotStore> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self { school: Arc::clone(&self.school) }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the registration site.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: SnapshotStore + 'static,
{
  Router::new()
    .route("/",           get(home::handler))
    .route("/list",       get(list::handler::<S>))
    .route("/add",        get(add::form).post(add::submit::<S>))
    .route("/deregister", get(deregister::form).post(deregister::submit::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use rollbook_store_csv::CsvStore;
  use tempfile::TempDir;
  use tower::ServiceExt as _;

  fn make_state(dir: &TempDir) -> AppState<CsvStore> {
    let store = CsvStore::open(dir.path()).unwrap();
    AppState::new(School::open(store).unwrap())
  }

  async fn oneshot_raw(
    state:  AppState<CsvStore>,
    method: &str,
    uri:    &str,
    body:   &str,
  ) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if method == "POST" {
      builder = builder
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    }
    let req = builder.body(Body::from(body.to_string())).unwrap();
    router(state).oneshot(req).await.unwrap()
  }

  async fn body_text(resp: axum::response::Response) -> String {
    let bytes =
      axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  fn student_body(id: &str) -> String {
    format!("type=student&fname=Ann&lname=Lee&DoB=2001-05-01&ID={id}&extra=CS")
  }

  // ── Static pages ────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn home_page_returns_200_with_the_welcome_line() {
    let dir   = TempDir::new().unwrap();
    let resp  = oneshot_raw(make_state(&dir), "GET", "/", "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Welcome to the University Registration System!"));
  }

  #[tokio::test]
  async fn add_form_offers_all_three_categories() {
    let dir  = TempDir::new().unwrap();
    let resp = oneshot_raw(make_state(&dir), "GET", "/add", "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    for option in ["student", "teacher", "employee"] {
      assert!(body.contains(&format!("value=\"{option}\"")), "missing {option}");
    }
  }

  // ── Add ─────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn post_add_redirects_to_list_and_the_record_appears() {
    let dir   = TempDir::new().unwrap();
    let state = make_state(&dir);

    let resp =
      oneshot_raw(state.clone(), "POST", "/add", &student_body("S100")).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp.headers().get(header::LOCATION).unwrap();
    assert_eq!(location, "/list");

    let list = oneshot_raw(state, "GET", "/list", "").await;
    let body = body_text(list).await;
    assert!(
      body.contains("Student [ID: S100] - Lee, DoB: 2001-05-01, Major: CS"),
      "list body: {body}"
    );
  }

  #[tokio::test]
  async fn post_add_with_a_duplicate_id_returns_409_and_adds_nothing() {
    let dir   = TempDir::new().unwrap();
    let state = make_state(&dir);

    oneshot_raw(state.clone(), "POST", "/add", &student_body("S100")).await;
    let resp =
      oneshot_raw(state.clone(), "POST", "/add", &student_body("S100")).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_text(resp).await;
    assert!(body.contains("already registered"), "conflict body: {body}");

    let list = body_text(oneshot_raw(state, "GET", "/list", "").await).await;
    assert_eq!(list.matches("[ID: S100]").count(), 1);
  }

  #[tokio::test]
  async fn submitted_fields_are_trimmed_before_registration() {
    let dir   = TempDir::new().unwrap();
    let state = make_state(&dir);

    let body = "type=student&fname=+Ann+&lname=+Lee+&DoB=2001-05-01&ID=+S100+&extra=CS";
    let resp = oneshot_raw(state.clone(), "POST", "/add", body).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let list = body_text(oneshot_raw(state, "GET", "/list", "").await).await;
    assert!(list.contains("[ID: S100]"), "list body: {list}");
  }

  #[tokio::test]
  async fn an_unknown_category_is_rejected() {
    let dir  = TempDir::new().unwrap();
    let body = "type=alien&fname=A&lname=B&DoB=2000-01-01&ID=X1&extra=Z";
    let resp = oneshot_raw(make_state(&dir), "POST", "/add", body).await;
    assert!(resp.status().is_client_error(), "status: {}", resp.status());
  }

  // ── List ────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn list_escapes_markup_smuggled_into_fields() {
    let dir   = TempDir::new().unwrap();
    let state = make_state(&dir);

    let body = "type=student&fname=X&lname=%3Cscript%3E&DoB=2000-01-01&ID=S9&extra=CS";
    oneshot_raw(state.clone(), "POST", "/add", body).await;

    let list = body_text(oneshot_raw(state, "GET", "/list", "").await).await;
    assert!(list.contains("&lt;script&gt;"), "list body: {list}");
    assert!(!list.contains("<script>"));
  }

  #[tokio::test]
  async fn records_survive_a_server_restart() {
    let dir = TempDir::new().unwrap();

    let state = make_state(&dir);
    oneshot_raw(state, "POST", "/add", &student_body("S100")).await;

    let reopened = make_state(&dir);
    let list = body_text(oneshot_raw(reopened, "GET", "/list", "").await).await;
    assert!(list.contains("[ID: S100]"), "list body: {list}");
  }

  // ── Deregister ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn deregister_reports_success_inline_and_removes_the_record() {
    let dir   = TempDir::new().unwrap();
    let state = make_state(&dir);

    oneshot_raw(state.clone(), "POST", "/add", &student_body("S100")).await;
    let resp = oneshot_raw(
      state.clone(),
      "POST",
      "/deregister",
      "type=student&ID=S100",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Removed successfully."), "body: {body}");

    let list = body_text(oneshot_raw(state, "GET", "/list", "").await).await;
    assert!(!list.contains("[ID: S100]"));
  }

  #[tokio::test]
  async fn deregister_of_a_missing_id_reports_no_removal() {
    let dir  = TempDir::new().unwrap();
    let resp = oneshot_raw(
      make_state(&dir),
      "POST",
      "/deregister",
      "type=teacher&ID=T404",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("ID not found. No removal occurred."), "body: {body}");
  }
}
