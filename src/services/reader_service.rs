//! The reader session: page sequence, cursor, reading history and display mode.
//!
//! Every operation runs synchronously and returns a description of what the
//! window should show ([`PageView`] / [`ViewUpdate`]), so the session can be
//! driven without any UI toolkit. Only [`select_folder`] is async: it awaits
//! the resume answer before committing the new folder.

use crate::config::{DEFAULT_VIEWPORT, IMAGE_CACHE_CAPACITY};
use crate::error::{AppError, Result};
use crate::file_utils;
use crate::history::ReadingHistory;
use crate::image_cache::ImageCache;
use crate::image_loader;
use crate::state::{Direction, DisplayMode, NavigationState, Palette};
use image::{DynamicImage, RgbImage};
use log::{debug, error, info, warn};
use std::cell::RefCell;
use std::fmt;
use std::fs;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Keys the reader reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderKey {
    Left,
    Right,
    Other,
}

impl ReaderKey {
    pub fn from_name(name: &str) -> Self {
        match name {
            "left" => ReaderKey::Left,
            "right" => ReaderKey::Right,
            _ => ReaderKey::Other,
        }
    }
}

/// Discrete user inputs routed to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ReaderEvent {
    Next,
    Previous,
    JumpTo(String),
    ToggleDarkMode,
    Resized { width: f32, height: f32 },
    Key(ReaderKey),
}

/// Text shown on the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Page { index: usize, total: usize },
    Error(String),
}

impl StatusLine {
    pub fn is_error(&self) -> bool {
        matches!(self, StatusLine::Error(_))
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLine::Page { index, total } => write!(f, "Page {} of {}", index + 1, total),
            StatusLine::Error(message) => f.write_str(message),
        }
    }
}

/// A rendered page. `image` is `None` when the page could not be decoded and
/// the display area should be cleared.
#[derive(Debug, Clone)]
pub struct PageView {
    pub image: Option<RgbImage>,
    pub status: StatusLine,
}

#[derive(Debug, Clone)]
pub enum ViewUpdate {
    Page(PageView),
    Status(StatusLine),
    Palette(Palette),
}

/// A scanned folder with its history loaded, not yet committed to the session.
#[derive(Debug)]
pub struct PendingFolder {
    root: PathBuf,
    files: Vec<PathBuf>,
    history: ReadingHistory,
}

impl PendingFolder {
    #[cfg(test)]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Saved position for this root, clamped to the scanned sequence.
    pub fn saved_page(&self) -> Option<usize> {
        let saved = self.history.get(&self.root)?;
        Some(saved.min(self.files.len().saturating_sub(1)))
    }
}

/// Outcome of scanning a newly chosen folder.
#[derive(Debug)]
pub enum FolderLoad {
    /// No supported images.
    Empty,
    Ready(PendingFolder),
}

/// Resolves `root` to the absolute form used as the history key, so `.` and
/// the picker's absolute path name the same folder.
pub fn canonical_root(root: &Path) -> PathBuf {
    fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf())
}

/// Selects `root` as the reading folder.
///
/// When the folder has a saved position, `confirm_resume` is awaited with it
/// while the session still holds the previous folder; the new folder only
/// replaces it once the answer is known. A folder without images empties the
/// session and returns `None`.
pub async fn select_folder<F, Fut>(
    reader: &RefCell<ReaderService>,
    root: &Path,
    confirm_resume: F,
) -> Option<PageView>
where
    F: FnOnce(usize) -> Fut,
    Fut: Future<Output = bool>,
{
    let pending = match ReaderService::prepare_folder(root) {
        FolderLoad::Empty => {
            reader.borrow_mut().clear_folder();
            return None;
        }
        FolderLoad::Ready(pending) => pending,
    };

    let resume = match pending.saved_page() {
        Some(page) => confirm_resume(page).await,
        None => false,
    };
    reader.borrow_mut().open_folder(pending, resume)
}

/// Parses 1-based page input into a cursor for a sequence of `total` pages.
pub fn parse_page_number(input: &str, total: usize) -> Result<usize> {
    let trimmed = input.trim();
    let page: i64 = trimmed
        .parse()
        .map_err(|_| AppError::InvalidPageNumber(trimmed.to_string()))?;

    if page < 1 || page as u64 > total as u64 {
        return Err(AppError::PageOutOfRange { page, total });
    }
    Ok((page - 1) as usize)
}

fn viewport_from_lengths(width: f32, height: f32) -> (u32, u32) {
    let to_px = |v: f32| if v.is_finite() && v >= 1.0 { v.round() as u32 } else { 1 };
    (to_px(width), to_px(height))
}

pub struct ReaderService {
    root: Option<PathBuf>,
    navigation: NavigationState,
    history: ReadingHistory,
    display_mode: DisplayMode,
    viewport: (u32, u32),
    cache: ImageCache,
}

impl ReaderService {
    pub fn new() -> Self {
        Self {
            root: None,
            navigation: NavigationState::new(),
            history: ReadingHistory::new(),
            display_mode: DisplayMode::default(),
            viewport: DEFAULT_VIEWPORT,
            cache: ImageCache::new(IMAGE_CACHE_CAPACITY),
        }
    }

    #[cfg(test)]
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.navigation.cursor()
    }

    #[cfg(test)]
    pub fn page_count(&self) -> usize {
        self.navigation.len()
    }

    #[cfg(test)]
    pub fn pages(&self) -> &[PathBuf] {
        self.navigation.files()
    }

    #[cfg(test)]
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn palette(&self) -> Palette {
        self.display_mode.palette()
    }

    #[cfg(test)]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Scans `root` and loads its history without touching the current session.
    ///
    /// The result is committed with [`open_folder`](Self::open_folder) or
    /// dropped, so events handled in between still act on the previous folder.
    pub fn prepare_folder(root: &Path) -> FolderLoad {
        let start = std::time::Instant::now();
        let root = canonical_root(root);

        let files = match file_utils::scan_directory(&root) {
            Ok(files) => files,
            Err(e) => {
                warn!("{}", e);
                Vec::new()
            }
        };
        debug!(
            "Scanned {} pages under {} in {:?}",
            files.len(),
            root.display(),
            start.elapsed()
        );

        if files.is_empty() {
            info!("No images found under {}", root.display());
            return FolderLoad::Empty;
        }

        let history = ReadingHistory::load(&root);
        FolderLoad::Ready(PendingFolder {
            root,
            files,
            history,
        })
    }

    /// Drops the current folder, leaving an empty session.
    pub fn clear_folder(&mut self) {
        self.root = None;
        self.navigation.clear();
        self.history = ReadingHistory::new();
        self.cache.clear();
    }

    /// Replaces the session with `pending` and renders its starting page.
    pub fn open_folder(&mut self, pending: PendingFolder, resume: bool) -> Option<PageView> {
        let start = if resume { pending.saved_page() } else { None };
        let PendingFolder {
            root,
            files,
            history,
        } = pending;

        info!("Opened {} ({} pages)", root.display(), files.len());
        self.cache.clear();
        self.navigation.replace_files(files);
        self.history = history;
        self.root = Some(root);

        self.render(start.unwrap_or(0))
    }

    /// Shows page `index` and records it in the history. Out-of-range indices are ignored.
    pub fn render(&mut self, index: usize) -> Option<PageView> {
        let total = self.navigation.len();
        let path = self.navigation.path_at(index)?.to_path_buf();
        self.navigation.set_cursor(index);

        let start = std::time::Instant::now();
        let image = match self.scaled_page(&path) {
            Ok(image) => image,
            Err(e) => {
                let message = format!("Failed to load page {}: {}", index + 1, e);
                error!("{} ({})", message, path.display());
                return Some(PageView {
                    image: None,
                    status: StatusLine::Error(message),
                });
            }
        };
        debug!("Rendered {} in {:?}", path.display(), start.elapsed());

        let status = match self.record_position(index) {
            Ok(()) => StatusLine::Page { index, total },
            Err(e) => {
                error!("{}", e);
                StatusLine::Error(e.to_string())
            }
        };

        Some(PageView {
            image: Some(image),
            status,
        })
    }

    fn record_position(&mut self, index: usize) -> Result<()> {
        let Some(root) = self.root.as_deref() else {
            return Ok(());
        };
        self.history.set(root, index);
        self.history.save(root)
    }

    fn decoded_page(&mut self, path: &Path) -> Result<Rc<DynamicImage>> {
        if let Some(image) = self.cache.get(path) {
            return Ok(image);
        }
        let image = Rc::new(image_loader::load_image_blocking(path)?);
        self.cache.put(path.to_path_buf(), image.clone());
        Ok(image)
    }

    fn scaled_page(&mut self, path: &Path) -> Result<RgbImage> {
        let image = self.decoded_page(path)?;
        Ok(image_loader::scale_to_fit(&image, self.viewport))
    }

    fn step(&mut self, direction: Direction) -> Option<PageView> {
        let index = self.navigation.peek(direction)?;
        self.render(index)
    }

    pub fn advance(&mut self) -> Option<PageView> {
        self.step(Direction::Next)
    }

    pub fn retreat(&mut self) -> Option<PageView> {
        self.step(Direction::Previous)
    }

    /// Jumps to a 1-based page typed by the user.
    ///
    /// Bad input yields a status-only update and leaves the cursor alone.
    pub fn jump_to(&mut self, input: &str) -> Option<ViewUpdate> {
        if self.navigation.is_empty() {
            return None;
        }
        match parse_page_number(input, self.navigation.len()) {
            Ok(index) => self.render(index).map(ViewUpdate::Page),
            Err(e) => {
                warn!("Rejected jump input {:?}: {}", input, e);
                Some(ViewUpdate::Status(StatusLine::Error(e.to_string())))
            }
        }
    }

    pub fn toggle_dark_mode(&mut self) -> Palette {
        self.display_mode = self.display_mode.toggled();
        debug!("Display mode is now {:?}", self.display_mode);
        self.palette()
    }

    /// Records the new display area and re-scales the current page into it.
    ///
    /// Cursor and history are left untouched.
    pub fn resize(&mut self, width: f32, height: f32) -> Option<PageView> {
        self.viewport = viewport_from_lengths(width, height);

        let index = self.navigation.cursor()?;
        let total = self.navigation.len();
        let path = self.navigation.current_path()?.to_path_buf();

        let view = match self.scaled_page(&path) {
            Ok(image) => PageView {
                image: Some(image),
                status: StatusLine::Page { index, total },
            },
            Err(e) => PageView {
                image: None,
                status: StatusLine::Error(format!("Failed to load page {}: {}", index + 1, e)),
            },
        };
        Some(view)
    }

    /// Left moves forward and right moves back (right-to-left reading).
    pub fn on_key(&mut self, key: ReaderKey) -> Option<PageView> {
        match key {
            ReaderKey::Left => self.advance(),
            ReaderKey::Right => self.retreat(),
            ReaderKey::Other => None,
        }
    }

    /// Routes one input event to its operation.
    pub fn dispatch(&mut self, event: ReaderEvent) -> Option<ViewUpdate> {
        match event {
            ReaderEvent::Next => self.advance().map(ViewUpdate::Page),
            ReaderEvent::Previous => self.retreat().map(ViewUpdate::Page),
            ReaderEvent::JumpTo(input) => self.jump_to(&input),
            ReaderEvent::ToggleDarkMode => Some(ViewUpdate::Palette(self.toggle_dark_mode())),
            ReaderEvent::Resized { width, height } => {
                self.resize(width, height).map(ViewUpdate::Page)
            }
            ReaderEvent::Key(key) => self.on_key(key).map(ViewUpdate::Page),
        }
    }
}

impl Default for ReaderService {
    fn default() -> Self {
        Self::new()
    }
}
