//! rollbook-web server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) plus
//! `ROLLBOOK_*` environment variables, opens the snapshot directory, and
//! serves the registration site over HTTP.

use std::{
  fs::OpenOptions,
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use rollbook_core::school::School;
use rollbook_store_csv::CsvStore;
use rollbook_web::{AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
  EnvFilter, Layer as _, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

#[derive(Parser)]
#[command(author, version, about = "University registration web server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("ROLLBOOK"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  init_tracing(&expand_tilde(&server_cfg.log_file))?;

  // Open the snapshot store and load whatever it holds.
  let data_dir = expand_tilde(&server_cfg.data_dir);
  let store = CsvStore::open(&data_dir)
    .with_context(|| format!("failed to open store in {data_dir:?}"))?;
  let school = School::open(store).context("failed to load snapshots")?;

  let app = rollbook_web::router(AppState::new(school));
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Stderr events filtered by `RUST_LOG` (info default), plus the append-mode
/// activity log receiving everything at info and above.
fn init_tracing(log_file: &Path) -> anyhow::Result<()> {
  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(log_file)
    .with_context(|| format!("failed to open log file {log_file:?}"))?;

  let stderr_layer = tracing_subscriber::fmt::layer()
    .with_writer(std::io::stderr)
    .with_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
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
