use {
  anyhow::Context,
  arguments::Arguments,
  clap::Parser,
  content_extractor::{ContentExtractor, ExtractorOptions},
  std::{fs, path::PathBuf, process},
  tracing_subscriber::EnvFilter,
};

mod arguments;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn init_logging() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}

fn main() {
  init_logging();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error:#}");
    process::exit(1);
  }
}
