//! Interactive console menu.
//!
//! The loop reads one line per prompt from any [`BufRead`] and writes to any
//! [`Write`], which keeps the whole surface scriptable in tests.

use std::io::{self, BufRead, Write};

use rollbook_core::{
  Error,
  record::{Category, NewRecord},
  registry::SearchCriterion,
  school::School,
  store::SnapshotStore,
};

/// Run the menu until the user picks Exit.
///
/// A closed input stream surfaces as [`io::ErrorKind::UnexpectedEof`]; the
/// caller decides whether that counts as a clean exit.
pub fn run<S, R, W>(school: &mut School<S>, mut input: R, mut output: W) -> io::Result<()>
where
  S: SnapshotStore,
  R: BufRead,
  W: Write,
{
  loop {
    print_menu(&mut output)?;
    let choice = read_line(&mut input, &mut output, "Enter your choice: ")?;
    match choice.as_str() {
      "1" => add(school, &mut input, &mut output, Category::Student)?,
      "2" => add(school, &mut input, &mut output, Category::Teacher)?,
      "3" => add(school, &mut input, &mut output, Category::Employee)?,
      "4" => deregister(school, &mut input, &mut output, Category::Student)?,
      "5" => deregister(school, &mut input, &mut output, Category::Teacher)?,
      "6" => deregister(school, &mut input, &mut output, Category::Employee)?,
      "7" => search(school, &mut input, &mut output, Category::Student)?,
      "8" => search(school, &mut input, &mut output, Category::Teacher)?,
      "9" => search(school, &mut input, &mut output, Category::Employee)?,
      "10" => list_all(school, &mut output)?,
      "11" => save(school, &mut output)?,
      "12" => {
        writeln!(output, "Exiting... Goodbye!")?;
        return Ok(());
      }
      _ => writeln!(output, "Invalid choice. Try again.")?,
    }
  }
}

// ─── Prompting ───────────────────────────────────────────────────────────────

fn print_menu(output: &mut impl Write) -> io::Result<()> {
  writeln!(output)?;
  writeln!(output, "=== University Registration System ===")?;
  writeln!(output, "1. Add Student")?;
  writeln!(output, "2. Add Teacher")?;
  writeln!(output, "3. Add Employee")?;
  writeln!(output, "4. Deregister Student")?;
  writeln!(output, "5. Deregister Teacher")?;
  writeln!(output, "6. Deregister Employee")?;
  writeln!(output, "7. Search Student")?;
  writeln!(output, "8. Search Teacher")?;
  writeln!(output, "9. Search Employee")?;
  writeln!(output, "10. List All Registrations")?;
  writeln!(output, "11. Save Data")?;
  writeln!(output, "12. Exit")?;
  Ok(())
}

/// Print `prompt` without a newline and read the answer, trimmed.
fn read_line(
  input:  &mut impl BufRead,
  output: &mut impl Write,
  prompt: &str,
) -> io::Result<String> {
  write!(output, "{prompt}")?;
  output.flush()?;
  let mut line = String::new();
  if input.read_line(&mut line)? == 0 {
    return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
  }
  Ok(line.trim().to_string())
}

/// "a Student", "a Teacher", "an Employee".
fn article(category: Category) -> &'static str {
  match category {
    Category::Employee => "an",
    _ => "a",
  }
}

// ─── Menu actions ────────────────────────────────────────────────────────────

fn add<S: SnapshotStore>(
  school:   &mut School<S>,
  input:    &mut impl BufRead,
  output:   &mut impl Write,
  category: Category,
) -> io::Result<()> {
  writeln!(output, "\n--- Adding {} {} ---", article(category), category.label())?;
  let noun = category.noun();
  let first_name = read_line(input, output, &format!("Enter {noun} first name: "))?;
  let last_name = read_line(input, output, &format!("Enter {noun} last name: "))?;
  let date_of_birth =
    read_line(input, output, &format!("Enter {noun} DoB (YYYY-MM-DD): "))?;
  let id = read_line(input, output, &format!("Enter {noun} ID: "))?;
  let extra =
    read_line(input, output, &format!("Enter {noun} {}: ", category.extra_field()))?;

  let record = NewRecord { category, first_name, last_name, id, date_of_birth, extra };
  match school.register(record) {
    Ok(_) => writeln!(output, "{} registered successfully!", category.label())?,
    Err(Error::DuplicateId { .. }) => {
      writeln!(output, "The {noun} is already registered.")?
    }
    Err(err) => writeln!(output, "Error: {err}")?,
  }
  Ok(())
}

fn deregister<S: SnapshotStore>(
  school:   &mut School<S>,
  input:    &mut impl BufRead,
  output:   &mut impl Write,
  category: Category,
) -> io::Result<()> {
  writeln!(output, "\n--- Deregister {} ---", category.label())?;
  let id =
    read_line(input, output, &format!("Enter {} ID to remove: ", category.noun()))?;
  match school.deregister(category, &id) {
    Ok(_) => writeln!(output, "{} with ID {id} deregistered.", category.label())?,
    Err(Error::NotFound { .. }) => writeln!(output, "{} not found.", category.label())?,
    Err(err) => writeln!(output, "Error: {err}")?,
  }
  Ok(())
}

fn search<S: SnapshotStore>(
  school:   &School<S>,
  input:    &mut impl BufRead,
  output:   &mut impl Write,
  category: Category,
) -> io::Result<()> {
  writeln!(output, "\n--- Search {} ---", category.label())?;
  writeln!(output, "1. Search by ID")?;
  writeln!(output, "2. Search by Last Name")?;
  writeln!(output, "3. Search by DoB")?;
  let criterion = match read_line(input, output, "Enter your choice: ")?.as_str() {
    "1" => SearchCriterion::ById(
      read_line(input, output, &format!("Enter {} ID: ", category.noun()))?,
    ),
    "2" => SearchCriterion::ByLastName(read_line(input, output, "Enter last name: ")?),
    "3" => {
      SearchCriterion::ByDateOfBirth(read_line(input, output, "Enter DoB (YYYY-MM-DD): ")?)
    }
    _ => {
      writeln!(output, "Invalid choice.")?;
      return Ok(());
    }
  };

  let matches = school.search(category, &criterion);
  if matches.is_empty() {
    writeln!(output, "No matching {} found.", category.noun())?;
  } else {
    for record in matches {
      writeln!(output, "{record}")?;
    }
  }
  Ok(())
}

fn list_all<S: SnapshotStore>(
  school: &School<S>,
  output: &mut impl Write,
) -> io::Result<()> {
  let (students, teachers, employees) = school.registry().list_all();
  writeln!(output, "\n--- Students ---")?;
  for student in students {
    writeln!(output, "{student}")?;
  }
  writeln!(output, "\n--- Teachers ---")?;
  for teacher in teachers {
    writeln!(output, "{teacher}")?;
  }
  writeln!(output, "\n--- Employees ---")?;
  for employee in employees {
    writeln!(output, "{employee}")?;
  }
  Ok(())
}

fn save<S: SnapshotStore>(
  school: &School<S>,
  output: &mut impl Write,
) -> io::Result<()> {
  match school.save() {
    Ok(()) => writeln!(output, "Data saved successfully.")?,
    Err(err) => writeln!(output, "Error: {err}")?,
  }
  Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
