//! Record types: the people the registry keeps.
//!
//! Every record is a [`Person`] field group plus exactly one
//! category-specific attribute. Records are immutable once registered; the
//! only mutation the registry offers is full removal.

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Category ────────────────────────────────────────────────────────────────

/// The partition a record belongs to. Each category has its own collection in
/// the registry and its own snapshot file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  Student,
  Teacher,
  Employee,
}

impl Category {
  /// Lower-case singular noun, as used in prompts and log lines.
  pub fn noun(&self) -> &'static str {
    match self {
      Self::Student => "student",
      Self::Teacher => "teacher",
      Self::Employee => "employee",
    }
  }

  /// Capitalised singular label, as used in headings and record rendering.
  pub fn label(&self) -> &'static str {
    match self {
      Self::Student => "Student",
      Self::Teacher => "Teacher",
      Self::Employee => "Employee",
    }
  }

  /// Column name of the category-specific attribute in the snapshot header.
  pub fn extra_field(&self) -> &'static str {
    match self {
      Self::Student => "major",
      Self::Teacher => "subject",
      Self::Employee => "section",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// The field group shared by all three record kinds; never a registry entry
/// on its own.
///
/// `id` is externally assigned and treated as an opaque token; uniqueness is
/// enforced per category at registration time. `date_of_birth` is stored
/// verbatim with no calendar validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
  pub first_name:    String,
  pub last_name:     String,
  pub id:            String,
  pub date_of_birth: String,
}

// ─── Record kinds ────────────────────────────────────────────────────────────

/// A student: person fields plus a declared major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
  pub person: Person,
  pub major:  String,
}

/// A teacher: person fields plus a taught subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
  pub person:  Person,
  pub subject: String,
}

/// An employee: person fields plus an assigned section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
  pub person:  Person,
  pub section: String,
}

impl fmt::Display for Student {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Student [ID: {}] - {}, DoB: {}, Major: {}",
      self.person.id, self.person.last_name, self.person.date_of_birth,
      self.major
    )
  }
}

impl fmt::Display for Teacher {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Teacher [ID: {}] - {}, DoB: {}, Subject: {}",
      self.person.id, self.person.last_name, self.person.date_of_birth,
      self.subject
    )
  }
}

impl fmt::Display for Employee {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Employee [ID: {}] - {}, DoB: {}, Section: {}",
      self.person.id, self.person.last_name, self.person.date_of_birth,
      self.section
    )
  }
}

// ─── PersonRecord ────────────────────────────────────────────────────────────

/// Uniform access to the shared field group and the category-specific
/// attribute.
///
/// Implemented by the three record kinds so the registry and the snapshot
/// stores can handle any category through one code path.
pub trait PersonRecord: Clone {
  const CATEGORY: Category;

  fn person(&self) -> &Person;
  fn extra(&self) -> &str;
  fn from_parts(person: Person, extra: String) -> Self;
  fn into_record(self) -> Record;
}

impl PersonRecord for Student {
  const CATEGORY: Category = Category::Student;

  fn person(&self) -> &Person {
    &self.person
  }

  fn extra(&self) -> &str {
    &self.major
  }

  fn from_parts(person: Person, extra: String) -> Self {
    Self { person, major: extra }
  }

  fn into_record(self) -> Record {
    Record::Student(self)
  }
}

impl PersonRecord for Teacher {
  const CATEGORY: Category = Category::Teacher;

  fn person(&self) -> &Person {
    &self.person
  }

  fn extra(&self) -> &str {
    &self.subject
  }

  fn from_parts(person: Person, extra: String) -> Self {
    Self { person, subject: extra }
  }

  fn into_record(self) -> Record {
    Record::Teacher(self)
  }
}

impl PersonRecord for Employee {
  const CATEGORY: Category = Category::Employee;

  fn person(&self) -> &Person {
    &self.person
  }

  fn extra(&self) -> &str {
    &self.section
  }

  fn from_parts(person: Person, extra: String) -> Self {
    Self { person, section: extra }
  }

  fn into_record(self) -> Record {
    Record::Employee(self)
  }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// A category-erased record, as returned by registry operations that work
/// across categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
  Student(Student),
  Teacher(Teacher),
  Employee(Employee),
}

impl Record {
  pub fn category(&self) -> Category {
    match self {
      Self::Student(_) => Category::Student,
      Self::Teacher(_) => Category::Teacher,
      Self::Employee(_) => Category::Employee,
    }
  }

  pub fn person(&self) -> &Person {
    match self {
      Self::Student(s) => &s.person,
      Self::Teacher(t) => &t.person,
      Self::Employee(e) => &e.person,
    }
  }

  /// The category-specific attribute (major, subject, or section).
  pub fn extra(&self) -> &str {
    match self {
      Self::Student(s) => &s.major,
      Self::Teacher(t) => &t.subject,
      Self::Employee(e) => &e.section,
    }
  }
}

impl fmt::Display for Record {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Student(s) => s.fmt(f),
      Self::Teacher(t) => t.fmt(f),
      Self::Employee(e) => e.fmt(f),
    }
  }
}

// ─── NewRecord ───────────────────────────────────────────────────────────────

/// Input to [`crate::registry::Registry::add`]. One shape serves all three
/// categories; `extra` carries the category-specific attribute.
#[derive(Debug, Clone)]
pub struct NewRecord {
  pub category:      Category,
  pub first_name:    String,
  pub last_name:     String,
  pub id:            String,
  pub date_of_birth: String,
  pub extra:         String,
}
