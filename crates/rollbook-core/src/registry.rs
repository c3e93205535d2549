//! The in-memory registry: three category collections and the operations
//! over them.
//!
//! The registry owns every record instance. Collection order is insertion
//! order; removal shifts later records down. ID uniqueness is enforced per
//! category at [`Registry::add`] time only; snapshot loads are trusted.

use crate::{
  error::{Error, Result},
  record::{
    Category, Employee, NewRecord, Person, PersonRecord, Record, Student,
    Teacher,
  },
};

// ─── Search ──────────────────────────────────────────────────────────────────

/// How [`Registry::search`] selects records within one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriterion {
  /// Exact match on the record ID.
  ById(String),
  /// Case-insensitive exact match on the last name.
  ByLastName(String),
  /// Exact match on the stored date-of-birth string.
  ByDateOfBirth(String),
}

impl SearchCriterion {
  fn matches(&self, person: &Person) -> bool {
    match self {
      Self::ById(id) => person.id == *id,
      Self::ByLastName(name) => {
        person.last_name.to_lowercase() == name.to_lowercase()
      }
      Self::ByDateOfBirth(date) => person.date_of_birth == *date,
    }
  }
}

// ─── Registry ────────────────────────────────────────────────────────────────

/// In-memory owner of the three category collections.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Registry {
  students:  Vec<Student>,
  teachers:  Vec<Teacher>,
  employees: Vec<Employee>,
}

impl Registry {
  /// An empty registry with no records in any category.
  pub fn new() -> Self {
    Self::default()
  }

  /// Reassemble a registry from already-loaded collections.
  ///
  /// Used by snapshot stores. The snapshot is trusted as-is; IDs are not
  /// re-checked for uniqueness.
  pub fn from_parts(
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    employees: Vec<Employee>,
  ) -> Self {
    Self { students, teachers, employees }
  }

  pub fn students(&self) -> &[Student] {
    &self.students
  }

  pub fn teachers(&self) -> &[Teacher] {
    &self.teachers
  }

  pub fn employees(&self) -> &[Employee] {
    &self.employees
  }

  /// All three collections in insertion order.
  pub fn list_all(&self) -> (&[Student], &[Teacher], &[Employee]) {
    (&self.students, &self.teachers, &self.employees)
  }

  /// Append a record to its category's collection.
  ///
  /// Fails with [`Error::DuplicateId`], without mutating anything, if the
  /// collection already holds the ID. On success the record is returned as
  /// appended.
  pub fn add(&mut self, input: NewRecord) -> Result<Record> {
    let NewRecord { category, first_name, last_name, id, date_of_birth, extra } =
      input;
    let person = Person { first_name, last_name, id, date_of_birth };
    match category {
      Category::Student => append(&mut self.students, person, extra),
      Category::Teacher => append(&mut self.teachers, person, extra),
      Category::Employee => append(&mut self.employees, person, extra),
    }
  }

  /// Remove the first record in `category` whose ID matches, returning it.
  ///
  /// Fails with [`Error::NotFound`] if no record matches.
  pub fn remove(&mut self, category: Category, id: &str) -> Result<Record> {
    match category {
      Category::Student => take(&mut self.students, id),
      Category::Teacher => take(&mut self.teachers, id),
      Category::Employee => take(&mut self.employees, id),
    }
  }

  /// All records in `category` matching `criterion`, in collection order.
  /// An empty result is not an error.
  pub fn search(
    &self,
    category: Category,
    criterion: &SearchCriterion,
  ) -> Vec<Record> {
    match category {
      Category::Student => filter(&self.students, criterion),
      Category::Teacher => filter(&self.teachers, criterion),
      Category::Employee => filter(&self.employees, criterion),
    }
  }
}

// ─── Per-collection helpers ──────────────────────────────────────────────────

fn append<T: PersonRecord>(
  collection: &mut Vec<T>,
  person: Person,
  extra: String,
) -> Result<Record> {
  if collection.iter().any(|r| r.person().id == person.id) {
    return Err(Error::DuplicateId { category: T::CATEGORY, id: person.id });
  }
  let record = T::from_parts(person, extra);
  collection.push(record.clone());
  Ok(record.into_record())
}

fn take<T: PersonRecord>(collection: &mut Vec<T>, id: &str) -> Result<Record> {
  let position = collection
    .iter()
    .position(|r| r.person().id == id)
    .ok_or_else(|| Error::NotFound {
      category: T::CATEGORY,
      id:       id.to_owned(),
    })?;
  Ok(collection.remove(position).into_record())
}

fn filter<T: PersonRecord>(
  collection: &[T],
  criterion: &SearchCriterion,
) -> Vec<Record> {
  collection
    .iter()
    .filter(|r| criterion.matches(r.person()))
    .cloned()
    .map(T::into_record)
    .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
