//! HTML rendering for the registration site.
//!
//! Pages are small enough to assemble by hand; every dynamic value passes
//! through [`escape_html`] before it reaches a page.

use std::fmt::Display;

use axum::response::Html;
use rollbook_core::registry::Registry;

// ─── Escaping ────────────────────────────────────────────────────────────────

/// Escape `&`, `<`, `>`, and `"` for text and attribute positions.
pub fn escape_html(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());
  for c in value.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      _ => escaped.push(c),
    }
  }
  escaped
}

// ─── Layout ──────────────────────────────────────────────────────────────────

const CHROME: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>University Registration System</title>
  </head>
  <body>
    <h1>University Registration System</h1>
    <nav>
      <a href="/">Home</a> |
      <a href="/list">List Registrations</a> |
      <a href="/add">Add Person</a> |
      <a href="/deregister">Deregister</a>
    </nav>
    <hr>
"#;

/// Wrap `content` in the shared chrome: title, heading, and nav bar.
fn layout(content: &str) -> Html<String> {
  let mut page = String::with_capacity(CHROME.len() + content.len() + 32);
  page.push_str(CHROME);
  page.push_str(content);
  page.push_str("  </body>\n</html>\n");
  Html(page)
}

// ─── Pages ───────────────────────────────────────────────────────────────────

/// GET `/` body.
pub fn home_page() -> Html<String> {
  layout("<p>Welcome to the University Registration System!</p>\n")
}

/// GET `/list` body: one `<ul>` per category, records in insertion order.
pub fn list_page(registry: &Registry) -> Html<String> {
  let mut content = String::from("<h2>All Registrations</h2>\n");
  push_section(&mut content, "Students", registry.students());
  push_section(&mut content, "Teachers", registry.teachers());
  push_section(&mut content, "Employees", registry.employees());
  layout(&content)
}

fn push_section<T: Display>(out: &mut String, heading: &str, records: &[T]) {
  out.push_str(&format!("<h3>{heading}</h3>\n<ul>\n"));
  for record in records {
    out.push_str(&format!("  <li>{}</li>\n", escape_html(&record.to_string())));
  }
  out.push_str("</ul>\n");
}

const CATEGORY_SELECT: &str = r#"  Type:
  <select name="type">
    <option value="student">Student</option>
    <option value="teacher">Teacher</option>
    <option value="employee">Employee</option>
  </select><br>
"#;

/// GET `/add` body.
pub fn add_form_page() -> Html<String> {
  layout(&format!(
    r#"<h2>Add Person</h2>
<form method="post">
{CATEGORY_SELECT}  First Name: <input type="text" name="fname"><br>
  Last Name: <input type="text" name="lname"><br>
  DoB (YYYY-MM-DD): <input type="text" name="DoB"><br>
  ID: <input type="text" name="ID"><br>
  Extra (Major/Subject/Section): <input type="text" name="extra"><br>
  <input type="submit" value="Add">
</form>
"#
  ))
}

/// GET `/deregister` body.
pub fn deregister_form_page() -> Html<String> {
  layout(&format!(
    r#"<h2>Deregister Person</h2>
<form method="post">
{CATEGORY_SELECT}  ID: <input type="text" name="ID"><br>
  <input type="submit" value="Remove">
</form>
"#
  ))
}

/// A one-line outcome page with a link back home.
pub fn message_page(message: &str) -> Html<String> {
  layout(&format!(
    "<p>{}</p>\n<p><a href=\"/\">Home</a></p>\n",
    escape_html(message)
  ))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use rollbook_core::record::{Category, NewRecord};

  use super::*;

  #[test]
  fn escapes_the_four_html_metacharacters() {
    assert_eq!(
      escape_html(r#"<b>"A&B"</b>"#),
      "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;"
    );
  }

  #[test]
  fn plain_text_passes_through_unchanged() {
    assert_eq!(escape_html("O'Connor 2001-05-01"), "O'Connor 2001-05-01");
  }

  #[test]
  fn every_page_carries_the_shared_nav() {
    for Html(page) in [home_page(), add_form_page(), deregister_form_page()] {
      assert!(page.contains("<h1>University Registration System</h1>"));
      assert!(page.contains(r#"<a href="/list">List Registrations</a>"#));
    }
  }

  #[test]
  fn list_page_renders_records_under_their_category_heading() {
    let mut registry = Registry::new();
    registry
      .add(NewRecord {
        category:      Category::Teacher,
        first_name:    "Grace".into(),
        last_name:     "Hopper".into(),
        id:            "T1".into(),
        date_of_birth: "1906-12-09".into(),
        extra:         "CS".into(),
      })
      .unwrap();
    let Html(page) = list_page(&registry);
    assert!(page.contains("<h2>All Registrations</h2>"));
    assert!(page.contains("<h3>Teachers</h3>"));
    assert!(page.contains("<li>Teacher [ID: T1] - Hopper, DoB: 1906-12-09, Subject: CS</li>"));
  }

  #[test]
  fn list_page_escapes_markup_smuggled_into_fields() {
    let mut registry = Registry::new();
    registry
      .add(NewRecord {
        category:      Category::Student,
        first_name:    "X".into(),
        last_name:     "<script>alert(1)</script>".into(),
        id:            "S1".into(),
        date_of_birth: "2000-01-01".into(),
        extra:         "CS".into(),
      })
      .unwrap();
    let Html(page) = list_page(&registry);
    assert!(page.contains("&lt;script&gt;"));
    assert!(!page.contains("<script>"));
  }

  #[test]
  fn forms_carry_the_expected_field_names() {
    let Html(add) = add_form_page();
    assert!(add.contains(r#"<form method="post">"#));
    for field in ["type", "fname", "lname", "DoB", "ID", "extra"] {
      assert!(add.contains(&format!("name=\"{field}\"")), "missing {field}");
    }
    let Html(deregister) = deregister_form_page();
    assert!(deregister.contains(r#"<select name="type">"#));
    assert!(deregister.contains(r#"name="ID""#));
  }
}
