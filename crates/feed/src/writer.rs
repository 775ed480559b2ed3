//! Feed persistence
//!
//! Writes go to a temporary file in the destination directory which is then
//! renamed over the target, so a failed run never leaves a truncated feed.

use crate::error::{FeedError, FeedResult};
use crate::feed::Feed;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writes serialized feeds to a fixed destination path
#[derive(Debug, Clone)]
pub struct FeedWriter {
    path: PathBuf,
}

impl FeedWriter {
    /// Creates a writer for `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serializes `feed` and replaces the destination file with it
    ///
    /// Missing parent directories are created. Any previous content at the
    /// destination is overwritten.
    pub fn write(&self, feed: &Feed) -> FeedResult<()> {
        let xml = feed.to_rss_string()?;

        let dir = self.parent_dir();
        self.ensure_directory_exists(&dir)?;

        let temp_file = NamedTempFile::new_in(&dir).map_err(|e| self.write_error(e))?;
        self.write_atomic(temp_file, &xml)?;

        log::info!(
            "Wrote {} items ({} bytes) to {}",
            feed.item_count(),
            xml.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Serializes `feed` into an arbitrary sink, e.g. stdout
    pub fn write_to<W: Write>(feed: &Feed, mut sink: W) -> FeedResult<()> {
        feed.write_rss(&mut sink)?;
        sink.flush()?;
        Ok(())
    }

    /// Directory the temporary file is created in; `.` for bare file names
    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_directory_exists(&self, dir: &Path) -> FeedResult<()> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| FeedError::DirectoryCreation {
                path: dir.to_path_buf(),
                source: e,
            })?;
            log::info!("Created output directory: {}", dir.display());
        }
        Ok(())
    }

    fn write_atomic(&self, mut temp_file: NamedTempFile, content: &str) -> FeedResult<()> {
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| self.write_error(e))?;
        temp_file.flush().map_err(|e| self.write_error(e))?;

        // Temp files are created 0600; published feeds should stay world-readable
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(temp_file.path(), fs::Permissions::from_mode(0o644))
                .map_err(|e| self.write_error(e))?;
        }

        temp_file
            .persist(&self.path)
            .map_err(|e| self.write_error(e.error))?;

        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> FeedError {
        FeedError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
