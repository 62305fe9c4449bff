//! Rotating file writer with size-based rotation and backup retention.
//!
//! [`FileWriter`] is a `tracing-subscriber` [`MakeWriter`]: every formatted
//! log line goes through it into one file, which is rotated once it would grow
//! past a size threshold. A fixed number of timestamped backups is kept, which
//! bounds disk usage inside the plugin data directory.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (5 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Shareable rotating file writer.
///
/// Clones share the same file handle and size accounting.
///
/// # Rotation Strategy
///
/// 1. Before each write, check whether the write would exceed the threshold
/// 2. If so, rotate:
///    - Rename the current file to `<name>.<timestamp>`
///    - Start a new empty file
///    - Remove the oldest backups beyond the retention limit
///
/// # Example
///
/// ```rust
/// use std::io::Write;
/// use tracing_subscriber::fmt::MakeWriter;
/// use zatalog::observability::FileWriter;
///
/// let dir = tempfile::tempdir()?;
/// let writer = FileWriter::new(dir.path().join("zatalog.log"));
/// writer.make_writer().write_all(b"{\"message\":\"hello\"}\n")?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct FileWriter {
    inner: Arc<Mutex<RotatingFile>>,
}

struct RotatingFile {
    /// Path to the primary log file.
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Lazily-initialized file handle (opens on first write).
    file: Option<File>,
    /// Size of the current file including everything written through us.
    size: u64,
}

impl FileWriter {
    /// Creates a writer with the default size threshold and retention.
    ///
    /// The file is not opened until the first write.
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer with an explicit size threshold and backup count.
    #[must_use]
    pub fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RotatingFile {
                file_path,
                max_bytes,
                max_backups,
                file: None,
                size: 0,
            })),
        }
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, RotatingFile>> {
        self.inner
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))
    }
}

impl RotatingFile {
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.file.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.file_path)?;
            self.size = file.metadata().map(|m| m.len()).unwrap_or(0);
            self.file = Some(file);
        }

        if self.size > 0 && self.size + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
            return self.write_all(buf);
        }

        let file = self
            .file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;
        file.write_all(buf)?;
        file.flush()?;
        self.size += buf.len() as u64;
        Ok(())
    }

    /// Moves the current file aside and prunes old backups.
    ///
    /// Backups are named `<file name>.<UTC timestamp>`, e.g.
    /// `zatalog.log.20261017T193500123456789`, so lexical order is age order.
    fn rotate(&mut self) -> io::Result<()> {
        self.file = None;
        self.size = 0;

        let timestamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%9f").to_string();
        let mut backup_path = PathBuf::from(format!("{}.{timestamp}", self.file_path.display()));
        let mut attempt = 1;
        while backup_path.exists() {
            backup_path = PathBuf::from(format!("{}.{timestamp}-{attempt}", self.file_path.display()));
            attempt += 1;
        }

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// Removes backups beyond the retention limit, oldest first.
    ///
    /// Individual deletion errors are ignored so cleanup continues.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let mut backups = list_backups(&self.file_path)?;
        backups.sort();

        let excess = backups.len().saturating_sub(self.max_backups);
        for old_backup in backups.iter().take(excess) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

/// Backup files belonging to `file_path`, in no particular order.
fn list_backups(file_path: &Path) -> io::Result<Vec<PathBuf>> {
    let parent_dir = file_path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;
    let file_name = file_path
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;
    let prefix = format!("{file_name}.");

    Ok(fs::read_dir(parent_dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(&prefix))
        })
        .collect())
}

/// Handle returned by [`FileWriter::make_writer`].
pub struct FileWriterHandle<'a> {
    writer: &'a FileWriter,
}

impl Write for FileWriterHandle<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.lock()?.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.writer.lock()?.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = FileWriterHandle<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        FileWriterHandle { writer: self }
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("FileWriter");
        if let Ok(inner) = self.inner.lock() {
            debug
                .field("file_path", &inner.file_path)
                .field("max_bytes", &inner.max_bytes)
                .field("max_backups", &inner.max_backups);
        }
        debug.finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_line(writer: &FileWriter, line: &str) {
        writer.make_writer().write_all(line.as_bytes()).unwrap();
    }

    #[test]
    fn writes_are_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zatalog.log");
        let writer = FileWriter::new(path.clone());

        write_line(&writer, "first\n");
        write_line(&writer, "second\n");

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        assert!(list_backups(&path).unwrap().is_empty());
    }

    #[test]
    fn rotates_when_threshold_would_be_exceeded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zatalog.log");
        let writer = FileWriter::with_limits(path.clone(), 16, 3);

        write_line(&writer, "0123456789\n");
        write_line(&writer, "abcdefghij\n");

        assert_eq!(fs::read_to_string(&path).unwrap(), "abcdefghij\n");
        let backups = list_backups(&path).unwrap();
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "0123456789\n");
    }

    #[test]
    fn oversized_line_goes_into_a_fresh_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zatalog.log");
        let writer = FileWriter::with_limits(path.clone(), 4, 3);

        write_line(&writer, "this line is longer than the limit\n");
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "this line is longer than the limit\n"
        );
        assert!(list_backups(&path).unwrap().is_empty());
    }

    #[test]
    fn backup_count_is_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zatalog.log");
        let writer = FileWriter::with_limits(path.clone(), 8, 2);

        for i in 0..6 {
            write_line(&writer, &format!("line {i}\n"));
        }

        assert_eq!(list_backups(&path).unwrap().len(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "line 5\n");
    }

    #[test]
    fn existing_file_size_is_respected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zatalog.log");
        fs::write(&path, "previous session\n").unwrap();

        let writer = FileWriter::with_limits(path.clone(), 20, 3);
        write_line(&writer, "new\n");

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        assert_eq!(list_backups(&path).unwrap().len(), 1);
    }
}
