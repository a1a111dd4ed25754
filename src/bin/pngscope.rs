//! Prints the chunk structure of PNG files.

use std::{
  path::{Path, PathBuf},
  process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use pngscope::png::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Fail on the first structural problem instead of collecting warnings
  #[arg(long)]
  strict: bool,

  /// Print the body of every uncompressed text chunk
  #[arg(short, long)]
  text: bool,

  /// Print the metadata audit (text entries, provenance and AI markers)
  #[arg(short, long)]
  audit: bool,

  /// Enable verbose logging
  #[arg(short, long)]
  verbose: bool,

  /// PNG files to inspect
  #[arg(required = true)]
  paths: Vec<PathBuf>,
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let log_level = if cli.verbose { "debug" } else { "warn" };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

  let mode = if cli.strict { ParseMode::Strict } else { ParseMode::Lenient };
  let mut failures = 0;
  for path in cli.paths.iter() {
    if let Err(e) = print_file(path, mode, &cli) {
      println!("{}: {e:#}", path.display());
      failures += 1;
    }
  }
  if failures == 0 {
    ExitCode::SUCCESS
  } else {
    ExitCode::FAILURE
  }
}

fn print_file(path: &Path, mode: ParseMode, cli: &Cli) -> Result<()> {
  let bytes = std::fs::read(path).with_context(|| format!("reading `{}`", path.display()))?;
  println!("{}: {} bytes", path.display(), bytes.len());
  let inspection = inspect(&bytes, mode).context("parsing the chunk stream")?;

  for report in inspection.reports.iter() {
    let chunk = &report.chunk;
    println!(
      "  {offset:>8}  {ty}  {len:>8}  {crc:<8}  {summary}",
      offset = chunk.offset(),
      ty = chunk.ty(),
      len = chunk.length(),
      crc = if chunk.crc_ok() { "crc ok" } else { "BAD CRC" },
      summary = report.summary(),
    );
    if cli.text {
      if let Some(text) = report.text() {
        for line in text.lines() {
          println!("            | {line}");
        }
      }
    }
  }
  for warning in inspection.parsed.warning_messages() {
    println!("  warning: {warning}");
  }

  if cli.audit {
    let audit = MetadataAudit::from_inspection(&inspection);
    println!("  audit:");
    for entry in audit.text_entries.iter() {
      match &entry.text {
        Some(text) => {
          println!("    {} {:?}: {} chars", entry.ty, entry.keyword, text.chars().count())
        }
        None => println!("    {} {:?}: compressed", entry.ty, entry.keyword),
      }
    }
    for finding in audit.findings.iter() {
      println!("    {finding}");
    }
    println!("    AI generated: {}", if audit.is_ai_generated() { "yes" } else { "no evidence" });
  }
  Ok(())
}
