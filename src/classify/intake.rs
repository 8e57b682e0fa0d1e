/// Image input boundary
///
/// Validates a picked or dropped file before the session accepts it:
/// a single, recognized, non-empty image whose header actually parses.
/// Validation failures are shown inline and never change the session
/// stage.

use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::state::data::SelectedImage;

/// File extensions accepted by the picker and the drop target
pub const IMAGE_EXTENSIONS: [&str; 8] = [
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tif", "tiff",
];

/// Reasons a picked or dropped file was turned away
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no file was selected")]
    NoFileSelected,
    #[error("\"{0}\" is not a supported image type")]
    UnsupportedFileType(String),
    #[error("the selected file is empty")]
    EmptyFile,
    #[error("could not read the selected image: {0}")]
    Unreadable(String),
}

/// Validate a dropped or picked path and build the session's image handle.
pub fn inspect_selection(path: PathBuf) -> Result<SelectedImage, SelectionError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or(SelectionError::NoFileSelected)?;

    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if !IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(SelectionError::UnsupportedFileType(file_name));
    }

    let metadata = fs::metadata(&path).map_err(|e| SelectionError::Unreadable(e.to_string()))?;
    if metadata.len() == 0 {
        return Err(SelectionError::EmptyFile);
    }

    // Probe the header for pixel dimensions; this also rejects files that
    // merely wear an image extension
    let dimensions =
        image::image_dimensions(&path).map_err(|e| SelectionError::Unreadable(e.to_string()))?;

    Ok(SelectedImage {
        path,
        file_name,
        dimensions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    /// Unique scratch path under the system temp directory
    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pesthub-intake-{}-{}", std::process::id(), name))
    }

    fn write_probe_image(path: &Path) {
        image::RgbImage::from_pixel(4, 3, image::Rgb([40, 160, 80]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn valid_image_yields_name_and_dimensions() {
        let path = scratch_path("leaf.png");
        write_probe_image(&path);

        let selected = inspect_selection(path.clone()).unwrap();

        assert_eq!(selected.file_name, path.file_name().unwrap().to_string_lossy());
        assert_eq!(selected.dimensions, (4, 3));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn unsupported_extension_is_rejected_by_name() {
        let outcome = inspect_selection(PathBuf::from("/tmp/notes.txt"));
        assert_eq!(
            outcome,
            Err(SelectionError::UnsupportedFileType("notes.txt".to_string()))
        );
    }

    #[test]
    fn missing_extension_is_rejected() {
        let outcome = inspect_selection(PathBuf::from("/tmp/photo"));
        assert!(matches!(
            outcome,
            Err(SelectionError::UnsupportedFileType(_))
        ));
    }

    #[test]
    fn empty_file_is_rejected() {
        let path = scratch_path("empty.png");
        fs::write(&path, []).unwrap();

        assert_eq!(
            inspect_selection(path.clone()),
            Err(SelectionError::EmptyFile)
        );

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_unreadable() {
        let outcome = inspect_selection(scratch_path("nowhere.jpg"));
        assert!(matches!(outcome, Err(SelectionError::Unreadable(_))));
    }

    #[test]
    fn garbage_wearing_an_image_extension_is_unreadable() {
        let path = scratch_path("garbage.jpg");
        fs::write(&path, b"definitely not a jpeg").unwrap();

        assert!(matches!(
            inspect_selection(path.clone()),
            Err(SelectionError::Unreadable(_))
        ));

        fs::remove_file(path).unwrap();
    }
}
