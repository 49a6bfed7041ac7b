use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::photo::has_usable_photo;
use crate::row::Row;
use crate::sample::sample;

/// Keep only rows with a usable photo reference.
pub fn filter_usable(rows: &[Row]) -> Vec<&Row> {
    rows.iter().filter(|r| has_usable_photo(r)).collect()
}

/// Keep the first row per course, comparing trimmed lowercase names.
///
/// Rows with a blank course are dropped. Relative order is preserved.
pub fn unique_by_course<'a, I>(rows: I) -> Vec<&'a Row>
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for row in rows {
        let key = row.course_key();
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        out.push(row);
    }
    out
}

/// Random featured picks: usable photos, one per course, at most `limit`.
pub fn select_featured<'a, R: Rng + ?Sized>(
    rows: &'a [Row],
    rng: &mut R,
    limit: usize,
) -> Vec<&'a Row> {
    let usable = filter_usable(rows);
    let unique = unique_by_course(usable.iter().copied());
    debug!(
        rows = rows.len(),
        usable = usable.len(),
        courses = unique.len(),
        "featured candidates"
    );
    sample(unique, rng, limit)
}
