//! File delivery for exported images.

use super::{DEFAULT_FILENAME, ExportError};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Where and under what name exported images are written.
#[derive(Debug, Clone)]
pub struct ExportTarget {
    /// Directory to write exports to.
    pub directory: PathBuf,
    /// Filename template (supports chrono format specifiers such as
    /// `sketch_%Y-%m-%d.png`; a plain name is used as-is).
    pub filename: String,
}

impl Default for ExportTarget {
    fn default() -> Self {
        Self {
            directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Inkboard"),
            filename: DEFAULT_FILENAME.to_string(),
        }
    }
}

/// Expands any chrono format specifiers in the filename template.
///
/// A template without specifiers (the default `picture.png`) passes through
/// unchanged. A template with a stray `%` that chrono cannot interpret is
/// used literally instead of failing the export.
pub fn generate_filename(template: &str) -> String {
    use std::fmt::Write;

    let mut filename = String::new();
    match write!(filename, "{}", Local::now().format(template)) {
        Ok(()) => filename,
        Err(_) => {
            log::warn!(
                "Filename template '{}' has invalid format specifiers, using it literally",
                template
            );
            template.to_string()
        }
    }
}

/// Ensure the export directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    // Canonicalize to resolve relative paths
    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save encoded image bytes to a file, returning the path written.
pub fn save_image(image_data: &[u8], target: &ExportTarget) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&target.directory)?;

    let filename = generate_filename(&target.filename);
    let file_path = directory.join(&filename);

    log::info!(
        "Saving image to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    fs::write(&file_path, image_data)?;

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_filenames_pass_through() {
        assert_eq!(generate_filename("picture.png"), "picture.png");
    }

    #[test]
    fn templated_filenames_expand() {
        let filename = generate_filename("sketch_%Y.png");
        assert!(filename.starts_with("sketch_2"));
        assert!(filename.ends_with(".png"));
        assert!(!filename.contains('%'));
    }

    #[test]
    fn stray_percent_falls_back_to_the_literal_name() {
        assert_eq!(generate_filename("my%20picture.png"), "my%20picture.png");
        assert_eq!(generate_filename("100%.png"), "100%.png");
    }

    #[test]
    fn expand_tilde_leaves_absolute_paths_alone() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with('~'));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn default_target_uses_the_fixed_filename() {
        let target = ExportTarget::default();
        assert_eq!(target.filename, DEFAULT_FILENAME);
    }

    #[test]
    fn save_image_creates_the_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let target = ExportTarget {
            directory: temp.path().join("nested/exports"),
            filename: "out.png".to_string(),
        };
        let path = save_image(b"not-a-real-png", &target).unwrap();
        assert!(path.exists());
        assert_eq!(fs::read(&path).unwrap(), b"not-a-real-png");
    }
}
