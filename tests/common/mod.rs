#![allow(dead_code)]

use std::collections::HashSet;

use featured_holes::Card;

/// Normalize whitespace for golden test comparison:
/// trim each line, collapse consecutive blank lines, strip trailing newline.
pub fn normalize(s: &str) -> String {
    let lines: Vec<&str> = s.lines().map(|l| l.trim_end()).collect();
    let mut result = String::new();
    let mut prev_blank = false;
    for line in &lines {
        let is_blank = line.is_empty();
        if is_blank && prev_blank {
            continue;
        }
        result.push_str(line);
        result.push('\n');
        prev_blank = is_blank;
    }
    result.trim_end().to_string()
}

/// Image sources of the first-occurrence row of every eligible course in
/// `tests/fixtures/courses_holes.csv`.
pub const ELIGIBLE_IMAGES: &[&str] = &[
    "assets/photos/pebble_7.jpg",
    "assets/photos/bandon/13.JPG",
    "assets/photos/augusta_12.jpg",
    "assets/photos/sawgrass_17.jpg",
    "assets/photos/straits_17.jpg",
];

/// Assert the featured-selection invariants on rendered cards.
pub fn assert_valid_picks(cards: &[Card]) {
    assert!(cards.len() <= 3, "too many cards: {}", cards.len());
    let titles: HashSet<String> = cards
        .iter()
        .map(|c| c.title.trim().to_lowercase())
        .collect();
    assert_eq!(titles.len(), cards.len(), "duplicate course in {cards:?}");
    for card in cards {
        assert!(
            ELIGIBLE_IMAGES.contains(&card.image_src.as_str()),
            "unexpected pick: {}",
            card.image_src
        );
    }
}
