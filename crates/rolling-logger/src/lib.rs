//! Rolling Logger
//!
//! File logger for desktop apps: size-rotated log files mirrored to stderr.
//! Installs a `tracing` subscriber, so `log` records are captured too
//! through the `tracing-log` bridge.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Rotate once the active file grows past this many bytes
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;
/// Number of files kept, including the active one
pub const DEFAULT_MAX_FILES: usize = 3;

// ========================
// Rolling file
// ========================

/// A log file that rolls over to numbered siblings when it gets too big.
///
/// `<name>.log` is the active file, `<name>.1.log` the most recent
/// rotated one, up to `<name>.<max_files - 1>.log`.
pub struct RollingFile {
    dir: PathBuf,
    name: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    pub fn open(dir: &Path, name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);
        Ok(Self {
            dir: dir.to_path_buf(),
            name: name.to_string(),
            max_bytes,
            max_files: max_files.max(1),
            file,
            written,
        })
    }

    fn active_path(&self) -> PathBuf {
        self.dir.join(format!("{}.log", self.name))
    }

    fn rotated_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}.{}.log", self.name, index))
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_files > 1 {
            let oldest = self.rotated_path(self.max_files - 1);
            if oldest.exists() {
                std::fs::remove_file(&oldest)?;
            }
            for index in (1..self.max_files - 1).rev() {
                let from = self.rotated_path(index);
                if from.exists() {
                    std::fs::rename(&from, self.rotated_path(index + 1))?;
                }
            }
            std::fs::rename(self.active_path(), self.rotated_path(1))?;
            self.file = OpenOptions::new().create(true).append(true).open(self.active_path())?;
        } else {
            self.file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(self.active_path())?;
        }

        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

// ========================
// Subscriber writer
// ========================

/// Per-event writer handed to the fmt layer
struct SinkWriter(Arc<Mutex<RollingFile>>);

impl Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log sink poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.0.lock() {
            Ok(mut file) => file.flush(),
            Err(_) => Ok(()),
        }
    }
}

/// Local wall-clock timestamps
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize the global logger writing to `<log_dir>/<app_name>.log`.
///
/// Output is also mirrored to stderr. Calling this twice returns an error.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    let file = RollingFile::open(&log_dir, app_name, DEFAULT_MAX_BYTES, DEFAULT_MAX_FILES)
        .map_err(|e| format!("Failed to open log file in {}: {}", log_dir.display(), e))?;

    let sink = Arc::new(Mutex::new(file));
    let make_file_writer = move || SinkWriter(sink.clone());

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_timer(LocalTimer)
        .with_max_level(tracing::Level::INFO)
        .with_writer(make_file_writer.and(io::stderr))
        .try_init()
        .map_err(|e| format!("Failed to install subscriber: {}", e))?;

    log::info!("Logger initialized at {}", log_dir.display());
    Ok(())
}
