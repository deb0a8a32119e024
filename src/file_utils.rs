use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{AppError, Result};
use log::warn;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Returns true when the path carries one of the supported image extensions.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_str.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Compares two paths so that numeric runs sort by value and case is ignored.
pub fn natural_cmp(a: &Path, b: &Path) -> Ordering {
    let a = a.to_string_lossy();
    let b = b.to_string_lossy();
    natord::compare_ignore_case(&a, &b).then_with(|| a.cmp(&b))
}

/// Recursively collects every supported image below `dir`, in natural order.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(AppError::DirectoryScan(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut image_files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_supported_image(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    image_files.sort_by(|a, b| natural_cmp(a, b));
    Ok(image_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn numeric_runs_sort_by_value() {
        let dir = tempdir().unwrap();
        for name in ["page_10.jpg", "page_2.jpg", "page_1.jpg"] {
            touch(&dir.path().join(name));
        }

        let files = scan_directory(dir.path()).unwrap();
        assert_eq!(
            names(&files, dir.path()),
            vec!["page_1.jpg", "page_2.jpg", "page_10.jpg"]
        );
    }

    #[test]
    fn subfolders_are_walked_in_natural_order() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("Chapter_10/page_1.png"));
        touch(&dir.path().join("Chapter_2/page_2.png"));
        touch(&dir.path().join("Chapter_2/page_1.png"));

        let files = scan_directory(dir.path()).unwrap();
        assert_eq!(
            names(&files, dir.path()),
            vec![
                "Chapter_2/page_1.png",
                "Chapter_2/page_2.png",
                "Chapter_10/page_1.png"
            ]
        );
    }

    #[test]
    fn only_supported_extensions_are_kept() {
        let dir = tempdir().unwrap();
        for name in ["a.JPG", "b.jpeg", "c.Png", "d.gif", "e.txt", "reading_history.json", "noext"] {
            touch(&dir.path().join(name));
        }

        let files = scan_directory(dir.path()).unwrap();
        assert_eq!(names(&files, dir.path()), vec!["a.JPG", "b.jpeg", "c.Png"]);
    }

    #[test]
    fn case_is_ignored_when_ordering() {
        assert_eq!(
            natural_cmp(Path::new("b_2.png"), Path::new("A_10.png")),
            Ordering::Greater
        );
        assert_eq!(
            natural_cmp(Path::new("Page_2.png"), Path::new("page_10.png")),
            Ordering::Less
        );
    }

    #[test]
    fn empty_folder_yields_empty_sequence() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("notes.txt"));
        assert!(scan_directory(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_folder_is_an_error() {
        let dir = tempdir().unwrap();
        let result = scan_directory(&dir.path().join("missing"));
        assert!(matches!(result, Err(AppError::DirectoryScan(_))));
    }
}
