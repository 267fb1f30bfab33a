//! `tracing` output for the browser: one console call per formatted event

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Install the global subscriber. Invalid directives fall back to `info`.
pub fn init(directive: &str) {
  let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(MakeConsoleWriter)
    .with_ansi(false)
    .with_target(false)
    .without_time()
    .try_init();
}

struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
  type Writer = ConsoleWriter;

  fn make_writer(&'a self) -> Self::Writer {
    ConsoleWriter::new(Level::INFO)
  }

  fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
    ConsoleWriter::new(*meta.level())
  }
}

/// Buffers one event and emits it on drop
struct ConsoleWriter {
  level: Level,
  buf: Vec<u8>,
}

impl ConsoleWriter {
  fn new(level: Level) -> Self {
    Self {
      level,
      buf: Vec::new(),
    }
  }
}

impl io::Write for ConsoleWriter {
  fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
    self.buf.extend_from_slice(bytes);
    Ok(bytes.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

impl Drop for ConsoleWriter {
  fn drop(&mut self) {
    let line = String::from_utf8_lossy(&self.buf);
    let line = line.trim_end();
    if line.is_empty() {
      return;
    }
    let line = JsValue::from_str(line);
    match self.level {
      Level::ERROR => console::error_1(&line),
      Level::WARN => console::warn_1(&line),
      Level::INFO => console::info_1(&line),
      _ => console::debug_1(&line),
    }
  }
}
