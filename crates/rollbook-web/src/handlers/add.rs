//! `GET`/`POST /add`: the add-person form and its submission.

use axum::{
  Form,
  extract::State,
  response::{Html, Redirect},
};
use rollbook_core::{
  record::{Category, NewRecord},
  store::SnapshotStore,
};
use serde::Deserialize;

use crate::{AppState, error::Error, render};

/// POST payload; field names match the form inputs.
#[derive(Debug, Deserialize)]
pub struct AddForm {
  #[serde(rename = "type")]
  pub category: Category,
  pub fname:    String,
  pub lname:    String,
  #[serde(rename = "DoB")]
  pub dob:      String,
  #[serde(rename = "ID")]
  pub id:       String,
  pub extra:    String,
}

pub async fn form() -> Html<String> {
  render::add_form_page()
}

/// On success the browser is sent to the list page; a duplicate ID renders
/// the conflict message instead and mutates nothing.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<AddForm>,
) -> Result<Redirect, Error>
where
  S: SnapshotStore + 'static,
{
  let record = NewRecord {
    category:      form.category,
    first_name:    form.fname.trim().to_string(),
    last_name:     form.lname.trim().to_string(),
    id:            form.id.trim().to_string(),
    date_of_birth: form.dob.trim().to_string(),
    extra:         form.extra.trim().to_string(),
  };
  state.school.lock().register(record)?;
  Ok(Redirect::to("/list"))
}
