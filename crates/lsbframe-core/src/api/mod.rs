//! File based entry points around [`crate::frame`].
//!
//! This is the only part of the crate that touches the file system or logs.

pub mod hide;
pub mod unveil;
pub mod unveil_raw;

use std::path::Path;

use crate::{frame, FrameOptions, LsbFrameError, Result};

const KNOWN_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "img"];

/// First known media extension mentioned in the file name, if any.
///
/// Informational only, the codec never looks into the media format.
pub fn media_extension(path: &Path) -> Option<&'static str> {
    let name = path.file_name()?.to_str()?.to_lowercase();
    KNOWN_EXTENSIONS
        .iter()
        .filter_map(|ext| name.find(ext).map(|pos| (pos, *ext)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, ext)| ext)
}

/// Largest payload the given carrier file can hold
pub fn capacity_of(carrier: impl AsRef<Path>, opts: &FrameOptions) -> Result<usize> {
    let carrier = carrier.as_ref();
    let len = std::fs::metadata(carrier)
        .map_err(|source| LsbFrameError::ReadError { source })?
        .len();
    let len = usize::try_from(len).unwrap_or(usize::MAX);

    Ok(frame::capacity(len, opts))
}

pub(crate) fn read_carrier(path: &Path) -> Result<Vec<u8>> {
    let carrier = std::fs::read(path).map_err(|source| LsbFrameError::ReadError { source })?;
    log::debug!(
        "read carrier {} ({} bytes, kind: {})",
        path.display(),
        carrier.len(),
        media_extension(path).unwrap_or("unknown")
    );

    Ok(carrier)
}

pub(crate) fn write_target(path: &Path, data: &[u8]) -> Result<()> {
    std::fs::write(path, data).map_err(|source| LsbFrameError::WriteError { source })?;
    log::debug!("wrote {} bytes to {}", data.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn should_find_the_media_extension() {
        assert_eq!(media_extension(Path::new("a/b/photo.PNG")), Some("png"));
        assert_eq!(media_extension(Path::new("x.jpeg")), Some("jpeg"));
        assert_eq!(media_extension(Path::new("jpg-export.png")), Some("jpg"));
        assert_eq!(media_extension(Path::new("notes.txt")), None);
        assert_eq!(media_extension(Path::new("/")), None);
    }

    #[test]
    fn should_report_the_capacity_of_a_file() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.bin");
        std::fs::write(&carrier, vec![0; 1000]).unwrap();

        assert_eq!(capacity_of(&carrier, &FrameOptions::default()).unwrap(), 108);
        assert!(matches!(
            capacity_of(temp_dir.path().join("missing.bin"), &FrameOptions::default()),
            Err(LsbFrameError::ReadError { .. })
        ));
    }
}
