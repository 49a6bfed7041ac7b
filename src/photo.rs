use crate::row::Row;

/// Placeholder image used in the CSV for holes without a real photo.
pub const NO_PHOTO: &str = "nophoto.png";

/// Strip `prefix` from the start of `s`, ignoring ASCII case.
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> &'a str {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &s[prefix.len()..],
        _ => s,
    }
}

/// Normalize an inconsistent CSV photo reference.
///
/// Trims whitespace, then strips one leading `assets/` and afterwards one
/// leading `photos/` (both case-insensitive). The `assets/` check runs first,
/// so `assets/photos/x.jpg` becomes `x.jpg` while `photos/assets/x.jpg`
/// only loses its `photos/` segment.
pub fn normalize_photo_path(raw: &str) -> &str {
    let trimmed = raw.trim();
    let without_assets = strip_prefix_ignore_case(trimmed, "assets/");
    strip_prefix_ignore_case(without_assets, "photos/")
}

/// Lowercased last path segment of the normalized photo reference.
pub fn photo_file_name(raw: &str) -> String {
    normalize_photo_path(raw)
        .rsplit('/')
        .next()
        .unwrap_or("")
        .to_lowercase()
}

/// A row is displayable when its photo file name is present and is not the
/// `nophoto.png` placeholder.
pub fn has_usable_photo(row: &Row) -> bool {
    let file = photo_file_name(row.photo());
    !file.is_empty() && file != NO_PHOTO
}
