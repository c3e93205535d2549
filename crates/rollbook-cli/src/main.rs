//! `rollbook`: console menu for the registration system.
//!
//! # Usage
//!
//! ```
//! rollbook
//! rollbook --data-dir ~/rollbook --log-file ~/rollbook/registration.log
//! ```

mod menu;

use std::{
  fs::OpenOptions,
  io,
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use rollbook_core::school::School;
use rollbook_store_csv::CsvStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
  EnvFilter, Layer as _, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "rollbook", about = "University registration console")]
struct Args {
  /// Directory holding the per-category snapshot files.
  #[arg(long, default_value = ".", env = "ROLLBOOK_DATA_DIR")]
  data_dir: PathBuf,

  /// Append-mode activity log, one line per successful mutation.
  #[arg(long, default_value = "registration.log", env = "ROLLBOOK_LOG_FILE")]
  log_file: PathBuf,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  let args = Args::parse();

  init_tracing(&expand_tilde(&args.log_file))?;

  let data_dir = expand_tilde(&args.data_dir);
  let store = CsvStore::open(&data_dir)
    .with_context(|| format!("failed to open store in {data_dir:?}"))?;
  let mut school = School::open(store).context("failed to load snapshots")?;

  let stdin = io::stdin();
  let stdout = io::stdout();
  match menu::run(&mut school, stdin.lock(), stdout.lock()) {
    Ok(()) => Ok(()),
    // ^D at a prompt ends the session the same way Exit does.
    Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
    Err(err) => Err(err).context("console I/O failure"),
  }
}

/// Quiet stderr (warnings only unless `RUST_LOG` overrides), plus the
/// append-mode activity log receiving everything at info and above.
fn init_tracing(log_file: &Path) -> anyhow::Result<()> {
  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(log_file)
    .with_context(|| format!("failed to open log file {log_file:?}"))?;

  let stderr_layer = tracing_subscriber::fmt::layer()
    .with_writer(io::stderr)
    .with_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    );

  let file_layer = tracing_subscriber::fmt::layer()
    .with_ansi(false)
    .with_writer(Arc::new(file))
    .with_filter(LevelFilter::INFO);

  tracing_subscriber::registry()
    .with(stderr_layer)
    .with(file_layer)
    .init();

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
