// Filesystem photo source - the terminal stand-in for the phone camera
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::capture::{CaptureError, PhotoSource};
use crate::models::CapturedPhoto;

/// Extensions the photo picker will offer for upload.
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// A photo source backed by one already-picked file.
pub struct FilePhoto {
    path: PathBuf,
}

impl FilePhoto {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PhotoSource for FilePhoto {
    fn request_access(&self) -> Result<(), CaptureError> {
        // Access means the file is there and readable.
        fs::metadata(&self.path).map(|_| ()).map_err(map_io)
    }

    fn capture(&self) -> Result<CapturedPhoto, CaptureError> {
        let bytes = fs::read(&self.path).map_err(map_io)?;
        Ok(CapturedPhoto {
            path: self.path.clone(),
            bytes,
        })
    }
}

/// A file that vanished reads as a cancelled shot; anything else on disk
/// reads as an access problem.
fn map_io(e: std::io::Error) -> CaptureError {
    if e.kind() == ErrorKind::NotFound {
        CaptureError::Cancelled
    } else {
        CaptureError::PermissionDenied
    }
}

/// Photos under `dir`, newest first, the way a camera roll opens on the most
/// recent shot.
///
/// A missing directory means no photos yet, not an error.
pub fn list_photos(dir: &Path) -> Result<Vec<PathBuf>, CaptureError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(_) => return Err(CaptureError::PermissionDenied),
    };

    let mut photos: Vec<(PathBuf, SystemTime)> = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !is_photo(&path) {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        photos.push((path, modified));
    }

    photos.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(photos.into_iter().map(|(path, _)| path).collect())
}

fn is_photo(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            PHOTO_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn lists_only_photo_files_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("old.jpg"), b"old").unwrap();
        fs::write(dir.path().join("notes.txt"), b"skip me").unwrap();
        // Distinct mtimes even on coarse filesystems.
        thread::sleep(Duration::from_millis(50));
        fs::write(dir.path().join("new.PNG"), b"new").unwrap();

        let photos = list_photos(dir.path()).unwrap();
        let names: Vec<_> = photos
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["new.PNG", "old.jpg"]);
    }

    #[test]
    fn missing_directory_means_no_photos() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("nope");
        assert!(list_photos(&gone).unwrap().is_empty());
    }

    #[test]
    fn capture_reads_the_file_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.jpg");
        fs::write(&path, b"jpeg bytes").unwrap();

        let source = FilePhoto::new(&path);
        source.request_access().unwrap();
        let photo = source.capture().unwrap();

        assert_eq!(photo.bytes, b"jpeg bytes");
        assert_eq!(photo.path, path);
    }

    #[test]
    fn missing_file_counts_as_cancelled() {
        let source = FilePhoto::new("/definitely/not/here.jpg");
        assert!(matches!(
            source.request_access(),
            Err(CaptureError::Cancelled)
        ));
        assert!(matches!(source.capture(), Err(CaptureError::Cancelled)));
    }
}
