//! Common test utilities for ddl-meta tests

use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tempfile::NamedTempFile;

/// Marker present in every failure diagnostic
pub const DIAGNOSTIC_MARKER: &str = "Failed to parse DDL";

/// In-memory sink for formatted `tracing` output
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    /// All captured log text
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }

    /// Captured failure diagnostics, one entry per emitted event
    pub fn diagnostics(&self) -> Vec<String> {
        self.text()
            .lines()
            .filter(|line| line.contains(DIAGNOSTIC_MARKER))
            .map(str::to_string)
            .collect()
    }
}

/// Run `f` with a thread-local subscriber that records WARN and above
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, LogCapture) {
    let capture = LogCapture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, capture)
}

/// Helper to create a temp SQL file with content
pub fn create_sql_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".sql").unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

/// Options for a single file
pub fn file_options(
    path: &Path,
    db_type: ddl_meta::DbType,
    multi: bool,
) -> ddl_meta::ExtractOptions {
    ddl_meta::ExtractOptions {
        input_path: Some(path.to_path_buf()),
        db_type,
        multi,
    }
}
