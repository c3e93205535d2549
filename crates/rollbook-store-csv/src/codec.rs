//! Comma-separated row codec.
//!
//! Writes RFC 4180 rows: a field is quoted only when it contains a comma,
//! double quote, CR, or LF; embedded quotes are doubled; rows end in CRLF.
//! The reader additionally tolerates bare LF (and lone CR) terminators, and
//! quoted fields may span physical lines.

use std::{iter::Peekable, str::Chars};

use crate::error::{Error, Result};

// ─── Writing ─────────────────────────────────────────────────────────────────

/// Append one row to `buf`, CRLF-terminated.
pub fn push_row(buf: &mut String, fields: &[&str]) {
  for (i, field) in fields.iter().enumerate() {
    if i > 0 {
      buf.push(',');
    }
    push_field(buf, field);
  }
  buf.push_str("\r\n");
}

fn needs_quoting(field: &str) -> bool {
  field.contains(['"', ',', '\r', '\n'])
}

fn push_field(buf: &mut String, field: &str) {
  if !needs_quoting(field) {
    buf.push_str(field);
    return;
  }
  buf.push('"');
  for c in field.chars() {
    if c == '"' {
      buf.push('"');
    }
    buf.push(c);
  }
  buf.push('"');
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// One parsed row and the physical line it started on (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
  pub line:   usize,
  pub fields: Vec<String>,
}

/// Parse a whole snapshot file into rows. `file` is used in diagnostics only.
pub fn parse_rows(file: &str, text: &str) -> Result<Vec<Row>> {
  let mut rows = Vec::new();
  let mut chars = text.chars().peekable();
  let mut line = 1usize;
  while chars.peek().is_some() {
    let start = line;
    let fields = parse_record(file, &mut chars, &mut line)?;
    rows.push(Row { line: start, fields });
  }
  Ok(rows)
}

fn parse_record(
  file: &str,
  chars: &mut Peekable<Chars<'_>>,
  line: &mut usize,
) -> Result<Vec<String>> {
  let mut fields = Vec::new();
  loop {
    let field = if chars.peek() == Some(&'"') {
      chars.next();
      parse_quoted(file, chars, line)?
    } else {
      parse_bare(chars)
    };
    fields.push(field);
    match chars.next() {
      Some(',') => {}
      Some('\r') => {
        if chars.peek() == Some(&'\n') {
          chars.next();
        }
        *line += 1;
        return Ok(fields);
      }
      Some('\n') => {
        *line += 1;
        return Ok(fields);
      }
      None => return Ok(fields),
      Some(other) => {
        return Err(Error::MalformedRow {
          file:    file.to_owned(),
          line:    *line,
          problem: format!("unexpected {other:?} after closing quote"),
        });
      }
    }
  }
}

/// Consume up to the closing quote; the opening quote is already consumed.
fn parse_quoted(
  file: &str,
  chars: &mut Peekable<Chars<'_>>,
  line: &mut usize,
) -> Result<String> {
  let mut value = String::new();
  loop {
    match chars.next() {
      Some('"') => {
        if chars.peek() == Some(&'"') {
          chars.next();
          value.push('"');
        } else {
          return Ok(value);
        }
      }
      Some('\n') => {
        *line += 1;
        value.push('\n');
      }
      Some(c) => value.push(c),
      None => {
        return Err(Error::MalformedRow {
          file:    file.to_owned(),
          line:    *line,
          problem: "unterminated quoted field".to_owned(),
        });
      }
    }
  }
}

fn parse_bare(chars: &mut Peekable<Chars<'_>>) -> String {
  let mut value = String::new();
  while let Some(&c) = chars.peek() {
    if c == ',' || c == '\r' || c == '\n' {
      break;
    }
    chars.next();
    value.push(c);
  }
  value
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn row(fields: &[&str]) -> String {
    let mut buf = String::new();
    push_row(&mut buf, fields);
    buf
  }

  #[test]
  fn plain_fields_are_written_bare() {
    assert_eq!(row(&["Ann", "Lee", "S100"]), "Ann,Lee,S100\r\n");
  }

  #[test]
  fn fields_with_separators_are_quoted() {
    assert_eq!(row(&["Lee, Jr.", "x"]), "\"Lee, Jr.\",x\r\n");
    assert_eq!(row(&["say \"hi\""]), "\"say \"\"hi\"\"\"\r\n");
    assert_eq!(row(&["two\nlines"]), "\"two\nlines\"\r\n");
  }

  #[test]
  fn empty_fields_survive() {
    assert_eq!(row(&["", "", ""]), ",,\r\n");
    let rows = parse_rows("t.csv", ",,\r\n").unwrap();
    assert_eq!(rows[0].fields, ["", "", ""]);
  }

  #[test]
  fn parses_crlf_and_bare_lf_terminators() {
    let rows = parse_rows("t.csv", "a,b\r\nc,d\ne,f").unwrap();
    let fields: Vec<_> = rows.iter().map(|r| r.fields.clone()).collect();
    assert_eq!(fields, [vec!["a", "b"], vec!["c", "d"], vec!["e", "f"]]);
  }

  #[test]
  fn trailing_newline_does_not_create_a_phantom_row() {
    assert_eq!(parse_rows("t.csv", "a,b\r\n").unwrap().len(), 1);
  }

  #[test]
  fn quoted_field_spans_physical_lines() {
    let rows = parse_rows("t.csv", "a,\"two\nlines\"\r\nnext,row\r\n").unwrap();
    assert_eq!(rows[0].fields[1], "two\nlines");
    assert_eq!(rows[1].line, 3);
  }

  #[test]
  fn doubled_quotes_decode_to_one() {
    let rows = parse_rows("t.csv", "\"say \"\"hi\"\"\",x\r\n").unwrap();
    assert_eq!(rows[0].fields, ["say \"hi\"", "x"]);
  }

  #[test]
  fn unterminated_quote_is_rejected() {
    let err = parse_rows("t.csv", "\"open,field").unwrap_err();
    assert!(matches!(err, Error::MalformedRow { line: 1, .. }));
  }

  #[test]
  fn junk_after_closing_quote_is_rejected() {
    let err = parse_rows("t.csv", "\"ok\"junk,x\r\n").unwrap_err();
    assert!(matches!(err, Error::MalformedRow { .. }));
  }

  #[test]
  fn every_write_parses_back_identically() {
    let fields = ["plain", "with,comma", "with \"quotes\"", "multi\nline", ""];
    let mut buf = String::new();
    push_row(&mut buf, &fields);
    let rows = parse_rows("t.csv", &buf).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].fields, fields);
  }
}
