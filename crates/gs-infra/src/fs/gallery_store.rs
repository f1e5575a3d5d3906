use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use gs_core::ports::{ImageStoreError, ImageStorePort};
use tracing::{debug, warn};

/// Upper bound on `name (n).ext` candidates tried before giving up.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Filesystem-backed gallery.
///
/// Saves land in a single directory. Existing files are never overwritten:
/// a clashing name gets a ` (n)` suffix before the extension. The payload is
/// written to a hidden temp file and fsynced first; only then is a final name
/// claimed, by hard-linking the temp file into place. A final name therefore
/// never points at an incomplete file, even if the process dies mid-save.
///
/// The gallery directory must live on a filesystem with hard links.
pub struct FsGalleryStore {
    gallery_dir: PathBuf,
}

impl FsGalleryStore {
    /// Create a store that saves into `gallery_dir`, created on first save.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// let store = gs_infra::FsGalleryStore::new(PathBuf::from("/tmp/gallery"));
    /// assert_eq!(store.gallery_dir(), std::path::Path::new("/tmp/gallery"));
    /// ```
    pub fn new(gallery_dir: PathBuf) -> Self {
        Self { gallery_dir }
    }

    pub fn gallery_dir(&self) -> &Path {
        &self.gallery_dir
    }

    /// Write `bytes` to a hidden temp file in the gallery directory.
    fn stage(&self, bytes: &[u8]) -> Result<PathBuf, ImageStoreError> {
        let tmp_path = self
            .gallery_dir
            .join(format!(".{}.tmp", uuid::Uuid::new_v4()));

        if let Err(err) = write_synced(&tmp_path, bytes) {
            remove_temp(&tmp_path);
            return Err(io_error(&tmp_path, err));
        }
        Ok(tmp_path)
    }

    /// Link the staged file under the first free candidate name.
    fn claim_name(&self, staged: &Path, file_name: &str) -> Result<PathBuf, ImageStoreError> {
        for attempt in 0..MAX_NAME_ATTEMPTS {
            let target = self.gallery_dir.join(candidate_name(file_name, attempt));
            match fs::hard_link(staged, &target) {
                Ok(()) => return Ok(target),
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(err) => return Err(io_error(&target, err)),
            }
        }
        Err(ImageStoreError::NameExhausted(file_name.to_string()))
    }
}

impl ImageStorePort for FsGalleryStore {
    fn persist(&self, bytes: &[u8], file_name: &str) -> Result<String, ImageStoreError> {
        let file_name = sanitize_file_name(file_name)?;

        fs::create_dir_all(&self.gallery_dir).map_err(|err| io_error(&self.gallery_dir, err))?;

        let staged = self.stage(bytes)?;
        let claimed = self.claim_name(&staged, file_name);
        remove_temp(&staged);

        let target = claimed?;
        debug!(target_path = %target.display(), "Image linked into gallery");
        Ok(target.to_string_lossy().into_owned())
    }
}

/// Storage backend that is never available.
///
/// Every save fails. Used when no gallery backend is configured.
#[derive(Debug, Default)]
pub struct UnavailableGalleryStore;

impl ImageStorePort for UnavailableGalleryStore {
    fn persist(&self, _bytes: &[u8], _file_name: &str) -> Result<String, ImageStoreError> {
        Err(ImageStoreError::Unavailable(
            "no gallery storage backend configured".to_string(),
        ))
    }
}

/// Keep only the final path component of a caller-supplied name.
fn sanitize_file_name(file_name: &str) -> Result<&str, ImageStoreError> {
    Path::new(file_name)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ImageStoreError::InvalidFileName(file_name.to_string()))
}

/// `photo.png`, `photo (1).png`, `photo (2).png`, ...
fn candidate_name(file_name: &str, attempt: u32) -> String {
    if attempt == 0 {
        return file_name.to_string();
    }
    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{} ({}).{}", stem, attempt, ext),
        None => format!("{} ({})", stem, attempt),
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn remove_temp(path: &Path) {
    if let Err(err) = fs::remove_file(path) {
        if err.kind() != io::ErrorKind::NotFound {
            warn!(path = %path.display(), error = %err, "Failed to remove temp file");
        }
    }
}

fn io_error(path: &Path, source: io::Error) -> ImageStoreError {
    ImageStoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}
