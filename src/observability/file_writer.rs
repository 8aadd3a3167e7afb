//! Rotating log file writer with size-based rotation and backup retention.
//!
//! [`FileWriter`] is the sink of the `fmt` layer. Each formatted event is
//! buffered in a [`LogLine`] and appended to the file in one write when the line
//! is dropped, so lines from the plugin and worker threads never interleave.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Default file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// When the current file exceeds the size limit it is renamed with a
/// timestamp suffix (`eventdeck.log.<unix_micros>`) and a new file is started.
/// Backups beyond the newest three are removed.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    /// Opened on first write.
    writer: Mutex<Option<fs::File>>,
}

impl FileWriter {
    /// Creates a writer for `file_path`. The file is not opened until the first write.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            max_bytes: MAX_FILE_SIZE_BYTES,
            writer: Mutex::new(None),
        }
    }

    /// Overrides the rotation threshold.
    #[must_use]
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Appends `bytes` to the file, rotating first if the file is over the limit.
    ///
    /// # Errors
    ///
    /// Returns an error if rotation, opening, writing or flushing fails, or if
    /// the internal mutex was poisoned.
    pub fn write_bytes(&self, bytes: &[u8]) -> std::io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| std::io::Error::other(format!("mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| std::io::Error::other("no file available"))?;

        file.write_all(bytes)?;
        file.flush()?;
        drop(writer);

        Ok(())
    }

    fn check_and_rotate(&self, writer: &mut Option<fs::File>) -> std::io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn rotate_files(&self) -> std::io::Result<()> {
        let Some(prefix) = self.backup_prefix() else {
            return Ok(());
        };

        let mut timestamp = chrono::Utc::now().timestamp_micros();
        let mut backup_path = PathBuf::from(format!("{prefix}{timestamp:020}"));
        while backup_path.exists() {
            timestamp += 1;
            backup_path = PathBuf::from(format!("{prefix}{timestamp:020}"));
        }

        if self.file_path.exists() {
            fs::rename(&self.file_path, backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// `<file_path>.` as a string; backups are this prefix plus a timestamp.
    fn backup_prefix(&self) -> Option<String> {
        self.file_path.to_str().map(|path| format!("{path}."))
    }

    /// Removes backups beyond the retention limit, oldest first.
    ///
    /// Individual deletion errors are ignored.
    fn cleanup_old_backups(&self) -> std::io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| std::io::Error::other("no parent directory"))?;

        let file_name = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| std::io::Error::other("invalid file name"))?;
        let backup_marker = format!("{file_name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&backup_marker))
            })
            .collect();

        // Timestamps share a width, so name order is age order.
        backups.sort_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

/// One formatted log event, flushed to the [`FileWriter`] on drop.
pub struct LogLine<'a> {
    target: &'a FileWriter,
    buffer: Vec<u8>,
}

impl Write for LogLine<'_> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Drop for LogLine<'_> {
    fn drop(&mut self) {
        if !self.buffer.is_empty() {
            // Nowhere to report a failed log write.
            let _ = self.target.write_bytes(&self.buffer);
        }
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = LogLine<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogLine {
            target: self,
            buffer: Vec::new(),
        }
    }
}
