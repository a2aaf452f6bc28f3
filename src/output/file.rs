//! Rotating file sink: append-only writes, size-triggered gzip archival, and
//! a handle lifecycle that survives write failures.
//!
//! The handle is exclusively owned behind a mutex; the byte cursor mirrors how
//! much has been written to the currently open handle and is refreshed from
//! the file's real size on attach, so rotation stays correct across process
//! restarts. A write failure detaches the sink instead of propagating — the
//! host application must never crash because its log file went away.

use crate::error::Error;
use crate::internal;
use chrono::Local;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Roll sizes below this are clamped up; sub-kilobyte thresholds would
/// rotate on nearly every record.
pub const MIN_ROLL_SIZE: u64 = 1024;
/// Default roll threshold.
pub const DEFAULT_ROLL_SIZE: u64 = 4 * 1024 * 1024;

const BUFFER_SIZE: usize = 8192;
const ARCHIVE_STAMP: &str = "%Y-%m-%d_%H-%M-%S_";

struct Inner {
    path: Option<PathBuf>,
    out: Option<File>,
}

/// Durable sink with size-based rotation and gzip compression.
///
/// One per logger; sharing an appender between loggers would entangle their
/// rotation decisions, which is why logger inheritance never copies it.
pub struct FileAppender {
    inner: Mutex<Inner>,
    /// Bytes written to the open handle since the last roll or (re)attach.
    cursor: AtomicU64,
    attached: AtomicBool,
    rolling: AtomicBool,
    max_size: AtomicU64,
    /// The internal logger's own sink swallows its write failures instead of
    /// reporting them back through the internal logger.
    quiet: bool,
}

impl Default for FileAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl FileAppender {
    /// Creates a detached appender. Nothing is written until `attach`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                path: None,
                out: None,
            }),
            cursor: AtomicU64::new(0),
            attached: AtomicBool::new(false),
            rolling: AtomicBool::new(false),
            max_size: AtomicU64::new(DEFAULT_ROLL_SIZE),
            quiet: false,
        }
    }

    pub(crate) fn new_quiet() -> Self {
        Self {
            quiet: true,
            ..Self::new()
        }
    }

    /// Opens (creating if needed) the file for append and takes ownership of
    /// the handle. Any previously open handle is closed first, so re-attaching
    /// is safe and leak-free. The cursor picks up the file's current size.
    ///
    /// # Errors
    /// I/O error when the path cannot be opened for append.
    pub fn attach(&self, path: &Path) -> Result<(), Error> {
        let Ok(mut inner) = self.inner.lock() else {
            return Err(Error::InvalidPath("appender state poisoned".to_string()));
        };
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let len = file.metadata().map_or(0, |m| m.len());
        inner.out = Some(file);
        inner.path = Some(path.to_path_buf());
        self.cursor.store(len, Ordering::Release);
        self.attached.store(true, Ordering::Release);
        Ok(())
    }

    /// Reopens the path from the previous attach without changing any
    /// configuration.
    ///
    /// # Errors
    /// `InvalidPath` when the appender was never attached; otherwise as
    /// `attach`.
    pub fn reattach(&self) -> Result<(), Error> {
        let path = {
            let Ok(inner) = self.inner.lock() else {
                return Err(Error::InvalidPath("appender state poisoned".to_string()));
            };
            inner.path.clone()
        };
        match path {
            Some(path) => self.attach(&path),
            None => Err(Error::InvalidPath("no previous attachment".to_string())),
        }
    }

    /// Releases the file handle. Idempotent: calling this on a detached
    /// appender has no effect. The handle is dropped exactly once whether
    /// detachment was requested here or forced by a write failure.
    pub fn detach(&self) {
        let Ok(mut inner) = self.inner.lock() else {
            return;
        };
        self.attached.store(false, Ordering::Release);
        inner.out.take();
    }

    /// Whether a handle is currently open. A write failure flips this off
    /// until `attach`/`reattach`.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.rolling.load(Ordering::Relaxed)
    }

    pub fn set_rolling(&self, enabled: bool) {
        self.rolling.store(enabled, Ordering::Relaxed);
    }

    /// Sets the roll threshold, clamped up to [`MIN_ROLL_SIZE`].
    pub fn set_roll_size(&self, bytes: u64) {
        self.max_size.store(bytes.max(MIN_ROLL_SIZE), Ordering::Relaxed);
    }

    /// Bytes written to the open handle since the last roll or (re)attach.
    #[must_use]
    pub fn cursor(&self) -> u64 {
        self.cursor.load(Ordering::Acquire)
    }

    /// Appends the full byte sequence. Silently drops the write when
    /// detached. A roll triggers only after the write lands, so the
    /// triggering record always ends up in the pre-roll file. Any I/O failure
    /// detaches the sink and is reported to the internal logger — nothing
    /// reaches the caller.
    pub fn write(&self, bytes: &[u8]) {
        if !self.is_attached() {
            return;
        }
        let Ok(mut inner) = self.inner.lock() else {
            return;
        };
        if let Err(e) = self.write_locked(&mut inner, bytes) {
            self.attached.store(false, Ordering::Release);
            inner.out.take();
            drop(inner);
            if !self.quiet {
                internal::exception(&e);
            }
        }
    }

    fn write_locked(&self, inner: &mut Inner, bytes: &[u8]) -> io::Result<()> {
        {
            let out = inner
                .out
                .as_mut()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "no open handle"))?;
            let mut rem = bytes;
            while !rem.is_empty() {
                let chunk = rem.len().min(BUFFER_SIZE);
                out.write_all(&rem[..chunk])?;
                self.cursor.fetch_add(chunk as u64, Ordering::AcqRel);
                rem = &rem[chunk..];
            }
            // The archive is built by reading the path back, so the data must
            // be on disk before any roll.
            out.flush()?;
        }
        if self.rolling.load(Ordering::Relaxed)
            && self.cursor.load(Ordering::Acquire) >= self.max_size.load(Ordering::Relaxed)
        {
            self.roll_locked(inner)?;
        }
        Ok(())
    }

    /// Archives the live file and truncates it, regardless of size.
    ///
    /// # Errors
    /// I/O errors from reading, compressing, or truncating. Unlike the write
    /// path, an explicit roll reports its failure to the caller.
    pub fn roll(&self) -> Result<(), Error> {
        let Ok(mut inner) = self.inner.lock() else {
            return Err(Error::InvalidPath("appender state poisoned".to_string()));
        };
        self.roll_locked(&mut inner)?;
        Ok(())
    }

    /// Archive and truncate are deliberately not atomic with respect to each
    /// other; a crash in between can leave both the archive and a non-empty
    /// live file.
    fn roll_locked(&self, inner: &mut Inner) -> io::Result<()> {
        let path = inner
            .path
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "no output path"))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let archive_name = format!("{}{file_name}.zip", Local::now().format(ARCHIVE_STAMP));
        let archive_path = path
            .parent()
            .map_or_else(|| PathBuf::from(&archive_name), |p| p.join(&archive_name));

        compress_to_gzip(path, &archive_path)?;

        // Truncate in place through a second handle: the append handle keeps
        // working and concurrent readers keep a valid inode.
        OpenOptions::new().write(true).open(path)?.set_len(0)?;
        self.cursor.store(0, Ordering::Release);
        Ok(())
    }
}

impl std::fmt::Debug for FileAppender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileAppender")
            .field("attached", &self.is_attached())
            .field("rolling", &self.is_rolling())
            .field("cursor", &self.cursor())
            .finish_non_exhaustive()
    }
}

/// Streams the whole file into a gzip archive. An existing archive with the
/// same name is overwritten.
fn compress_to_gzip(src: &Path, dst: &Path) -> io::Result<()> {
    let mut reader = BufReader::new(File::open(src)?);
    let mut encoder = GzEncoder::new(BufWriter::new(File::create(dst)?), Compression::default());

    let mut buffer = [0u8; BUFFER_SIZE];
    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        encoder.write_all(&buffer[..bytes_read])?;
    }
    encoder.finish()?.flush()
}
