use crate::sample::FEATURED_COUNT;

/// Site-relative location of the course/hole CSV.
pub const DEFAULT_CSV_PATH: &str = "assets/courses_holes.csv";
/// Directory prepended to normalized photo paths.
pub const DEFAULT_PHOTO_BASE: &str = "assets/photos/";

/// Options controlling how the home page is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    /// CSV path handed to the [`Source`](crate::loader::Source).
    pub csv_path: String,
    /// Prefix for every card image source.
    pub photo_base: String,
    /// Maximum number of featured holes.
    pub featured_count: usize,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            csv_path: DEFAULT_CSV_PATH.to_string(),
            photo_base: DEFAULT_PHOTO_BASE.to_string(),
            featured_count: FEATURED_COUNT,
        }
    }
}
