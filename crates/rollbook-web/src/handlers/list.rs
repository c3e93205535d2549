//! `GET /list`: every collection rendered under its category heading.

use axum::{extract::State, response::Html};
use rollbook_core::store::SnapshotStore;

use crate::{AppState, render};

pub async fn handler<S>(State(state): State<AppState<S>>) -> Html<String>
where
  S: SnapshotStore + 'static,
{
  let school = state.school.lock();
  render::list_page(school.registry())
}
