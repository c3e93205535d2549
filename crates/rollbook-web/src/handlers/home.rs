//! `GET /`: the landing page.

use axum::response::Html;

use crate::render;

pub async fn handler() -> Html<String> {
  render::home_page()
}
