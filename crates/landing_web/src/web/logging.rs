//! `tracing` output routed to the browser console.
//!
//! The fmt layer formats each event into a buffer; the buffer is handed to
//! `console.log`/`warn`/`error` when the writer drops. Timestamps are off since
//! `SystemTime` is unavailable on wasm32-unknown-unknown.

use std::io;

use landing::config::LogLevel;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

pub(super) fn init(level: LogLevel) {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .without_time()
        .with_target(false)
        .with_max_level(to_tracing(level))
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        // Already installed (e.g. start() called twice); keep the first one.
        web_sys::console::debug_1(&"tracing subscriber already set".into());
    }
}

fn to_tracing(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::with_capacity(128),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
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
        let v = JsValue::from_str(line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&v),
            Level::WARN => web_sys::console::warn_1(&v),
            Level::DEBUG | Level::TRACE => web_sys::console::debug_1(&v),
            _ => web_sys::console::log_1(&v),
        }
    }
}
