//! Application configuration constants.

/// Supported image file extensions for scanning directories (compared lowercase).
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Name of the reading history sidecar written into each chosen root folder.
pub const HISTORY_FILE_NAME: &str = "reading_history.json";

/// Number of decoded pages kept around for resize and back-and-forth navigation.
pub const IMAGE_CACHE_CAPACITY: usize = 8;

/// Display area assumed until the window reports its real size.
pub const DEFAULT_VIEWPORT: (u32, u32) = (900, 1250);
