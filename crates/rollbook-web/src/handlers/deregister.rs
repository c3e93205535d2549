//! `GET`/`POST /deregister`: the removal form and its submission.

use axum::{Form, extract::State, response::Html};
use rollbook_core::{record::Category, store::SnapshotStore};
use serde::Deserialize;

use crate::{AppState, error::Error, render};

/// POST payload; field names match the form inputs.
#[derive(Debug, Deserialize)]
pub struct DeregisterForm {
  #[serde(rename = "type")]
  pub category: Category,
  #[serde(rename = "ID")]
  pub id:       String,
}

pub async fn form() -> Html<String> {
  render::deregister_form_page()
}

/// The outcome is reported inline; a missing ID is a normal page, not an
/// error response.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<DeregisterForm>,
) -> Result<Html<String>, Error>
where
  S: SnapshotStore + 'static,
{
  let outcome = state.school.lock().deregister(form.category, form.id.trim());
  match outcome {
    Ok(_) => Ok(render::message_page("Removed successfully.")),
    Err(rollbook_core::Error::NotFound { .. }) => {
      Ok(render::message_page("ID not found. No removal occurred."))
    }
    Err(err) => Err(err.into()),
  }
}
