//! [`CsvStore`], the flat-file implementation of [`SnapshotStore`].

use std::{
  fs, io,
  path::PathBuf,
};

use rollbook_core::{
  record::{Category, Person, PersonRecord},
  registry::Registry,
  store::SnapshotStore,
};

use crate::{
  codec,
  error::{Error, Result},
};

/// Snapshot file name for one category.
fn snapshot_file(category: Category) -> &'static str {
  match category {
    Category::Student => "students.csv",
    Category::Teacher => "teachers.csv",
    Category::Employee => "employees.csv",
  }
}

/// Header row of a category's snapshot file.
fn header(category: Category) -> [&'static str; 5] {
  ["fname", "lname", "ID", "DoB", category.extra_field()]
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A registry snapshot store backed by one comma-delimited file per category,
/// all under a single directory.
#[derive(Debug, Clone)]
pub struct CsvStore {
  dir: PathBuf,
}

impl CsvStore {
  /// Open a store rooted at `dir`, creating the directory if needed.
  /// Snapshot files are created lazily by the first save.
  pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
    let dir = dir.into();
    fs::create_dir_all(&dir)
      .map_err(|source| Error::Io { path: dir.clone(), source })?;
    Ok(Self { dir })
  }

  /// Serialize one category's collection and swap it into place.
  ///
  /// The snapshot lands in a `.tmp` sibling first and is renamed over the
  /// previous file, so a crash mid-write cannot leave a torn snapshot.
  fn save_category<T: PersonRecord>(&self, records: &[T]) -> Result<()> {
    let path = self.dir.join(snapshot_file(T::CATEGORY));

    let mut buf = String::new();
    codec::push_row(&mut buf, &header(T::CATEGORY));
    for record in records {
      let person = record.person();
      codec::push_row(&mut buf, &[
        person.first_name.as_str(),
        person.last_name.as_str(),
        person.id.as_str(),
        person.date_of_birth.as_str(),
        record.extra(),
      ]);
    }

    let tmp = path.with_extension("csv.tmp");
    fs::write(&tmp, &buf)
      .map_err(|source| Error::Io { path: tmp.clone(), source })?;
    fs::rename(&tmp, &path).map_err(|source| Error::Io { path, source })?;
    Ok(())
  }

  /// Load one category's collection.
  ///
  /// A missing or zero-length file is an empty collection; anything else must
  /// start with the expected header and parse completely, or the load fails.
  fn load_category<T: PersonRecord>(&self) -> Result<Vec<T>> {
    let file = snapshot_file(T::CATEGORY);
    let path = self.dir.join(file);

    let text = match fs::read_to_string(&path) {
      Ok(text) => text,
      Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
      Err(source) => return Err(Error::Io { path, source }),
    };

    let rows = codec::parse_rows(file, &text)?;
    let Some((head, body)) = rows.split_first() else {
      return Ok(Vec::new());
    };

    let expected = header(T::CATEGORY);
    if head.fields != expected {
      return Err(Error::Header {
        file:     file.to_owned(),
        expected: expected.join(","),
        found:    head.fields.join(","),
      });
    }

    body.iter().map(|row| record_from_row(file, row)).collect()
  }
}

fn record_from_row<T: PersonRecord>(file: &str, row: &codec::Row) -> Result<T> {
  let [first_name, last_name, id, date_of_birth, extra] =
    row.fields.as_slice()
  else {
    return Err(Error::MalformedRow {
      file:    file.to_owned(),
      line:    row.line,
      problem: format!("expected 5 fields, found {}", row.fields.len()),
    });
  };
  let person = Person {
    first_name:    first_name.clone(),
    last_name:     last_name.clone(),
    id:            id.clone(),
    date_of_birth: date_of_birth.clone(),
  };
  Ok(T::from_parts(person, extra.clone()))
}

impl SnapshotStore for CsvStore {
  type Error = Error;

  fn save_all(&self, registry: &Registry) -> Result<()> {
    self.save_category(registry.students())?;
    self.save_category(registry.teachers())?;
    self.save_category(registry.employees())?;
    Ok(())
  }

  fn load_all(&self) -> Result<Registry> {
    Ok(Registry::from_parts(
      self.load_category()?,
      self.load_category()?,
      self.load_category()?,
    ))
  }
}
