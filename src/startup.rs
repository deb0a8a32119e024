use slint::ComponentHandle;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::state::AppState;

/// First positional argument that names an existing directory.
fn folder_from_args<I>(args: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .filter_map(|arg| {
            if arg.to_string_lossy().starts_with('-') {
                None
            } else {
                Some(PathBuf::from(arg))
            }
        })
        .find(|path| path.is_dir())
}

fn startup_folder_from_args() -> Option<PathBuf> {
    folder_from_args(std::env::args_os().skip(1))
}

/// Opens the folder given on the command line, if any, once the window exists.
pub fn configure_startup_opening(app: &crate::AppWindow, app_state: &AppState) {
    if let Some(root) = startup_folder_from_args() {
        log::info!("Opening startup folder: {}", root.display());
        crate::ui::open_folder(app.as_weak(), app_state.reader.clone(), root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn flags_and_files_are_skipped() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("page_1.png");
        std::fs::write(&file, b"").unwrap();

        let args = vec![
            OsString::from("--verbose"),
            file.clone().into_os_string(),
            dir.path().as_os_str().to_owned(),
        ];
        assert_eq!(folder_from_args(args), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn no_arguments_means_no_folder() {
        assert_eq!(folder_from_args(Vec::<OsString>::new()), None);
    }

    #[test]
    fn missing_directory_is_ignored() {
        let dir = tempdir().unwrap();
        let args = vec![dir.path().join("missing").into_os_string()];
        assert_eq!(folder_from_args(args), None);
    }
}
