mod common;

use featured_holes::loader::FileSource;
use featured_holes::page::Form;
use featured_holes::select::{filter_usable, unique_by_course};
use featured_holes::{
    Event, HeadlessPage, Key, SiteError, SiteOptions, Source, Target, WarningCode,
    build_home_page, load_csv, parse_rows,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use common::{ELIGIBLE_IMAGES, assert_valid_picks, normalize};

fn fixture_options(file: &str) -> SiteOptions {
    SiteOptions {
        csv_path: format!("tests/fixtures/{file}"),
        ..Default::default()
    }
}

struct UnreachableSource;

impl Source for UnreachableSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, SiteError> {
        Err(SiteError::Http {
            url: path.to_string(),
            reason: "network unreachable".to_string(),
        })
    }
}

/// Fixture rows survive parsing, including quoted cells and the blank line.
#[test]
fn test_load_fixture_rows() {
    let outcome = load_csv(&FileSource::default(), "tests/fixtures/courses_holes.csv");
    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.rows.len(), 10);
    assert_eq!(outcome.rows[3].course(), "Bandon Dunes, Pacific Dunes");
    assert_eq!(outcome.rows[6].par(), "");
}

/// Filter + dedup over the fixture keeps exactly the first eligible row per course.
#[test]
fn test_filter_dedup_fixture() {
    let outcome = load_csv(&FileSource::default(), "tests/fixtures/courses_holes.csv");
    let usable = filter_usable(&outcome.rows);
    let unique = unique_by_course(usable);
    let courses: Vec<&str> = unique.iter().map(|r| r.course()).collect();
    assert_eq!(
        courses,
        vec![
            "Pebble Beach Golf Links",
            "Bandon Dunes, Pacific Dunes",
            "Augusta National",
            "TPC Sawgrass",
            "Whistling Straits",
        ]
    );
}

#[test]
fn test_scenario_pebble_and_torrey() {
    let rows = parse_rows(
        b"Course,photo\nPebble,assets/photos/1.jpg\nPebble,photos/2.jpg\nTorrey,nophoto.png\n",
    )
    .unwrap();
    let unique = unique_by_course(filter_usable(&rows));
    assert_eq!(unique.len(), 1);
    assert_eq!(unique[0].course(), "Pebble");
}

/// Invariants hold for every seed over the real fixture.
#[test]
fn test_home_page_picks_valid_for_many_seeds() {
    for seed in 0..40 {
        let (home, warnings) = build_home_page(
            &FileSource::default(),
            HeadlessPage::new(),
            StdRng::seed_from_u64(seed),
            fixture_options("courses_holes.csv"),
        );
        assert!(warnings.is_empty());
        assert_eq!(home.cards().len(), 3);
        assert_valid_picks(home.cards());
    }
}

/// Across seeds, every eligible course eventually gets featured.
#[test]
fn test_every_eligible_course_gets_featured() {
    let mut seen = std::collections::HashSet::new();
    for seed in 0..200 {
        let (home, _) = build_home_page(
            &FileSource::default(),
            HeadlessPage::new(),
            StdRng::seed_from_u64(seed),
            fixture_options("courses_holes.csv"),
        );
        for card in home.cards() {
            seen.insert(card.image_src.clone());
        }
    }
    assert_eq!(seen.len(), ELIGIBLE_IMAGES.len());
}

/// Network failure: empty featured container, visible notice, one warning.
#[test]
fn test_network_error_shows_no_photos() {
    let (home, warnings) = build_home_page(
        &UnreachableSource,
        HeadlessPage::new(),
        StdRng::seed_from_u64(0),
        SiteOptions::default(),
    );
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code, WarningCode::FetchFailed);
    assert!(home.page().no_photos_visible());
    assert!(home.page().featured().is_empty());
}

#[test]
fn test_missing_file_shows_no_photos() {
    let (home, warnings) = build_home_page(
        &FileSource::default(),
        HeadlessPage::new(),
        StdRng::seed_from_u64(0),
        fixture_options("does_not_exist.csv"),
    );
    assert_eq!(warnings.len(), 1);
    assert!(home.page().no_photos_visible());
}

#[test]
fn test_all_placeholder_photos_shows_no_photos() {
    let (home, warnings) = build_home_page(
        &FileSource::default(),
        HeadlessPage::new(),
        StdRng::seed_from_u64(0),
        fixture_options("no_photos.csv"),
    );
    assert!(warnings.is_empty());
    assert!(home.cards().is_empty());
    assert!(home.page().no_photos_visible());
}

/// Modal shown, Escape pressed: hidden with the image source cleared.
#[test]
fn test_modal_escape_scenario() {
    let (mut home, _) = build_home_page(
        &FileSource::default(),
        HeadlessPage::new(),
        StdRng::seed_from_u64(4),
        fixture_options("courses_holes.csv"),
    );
    assert!(home.dispatch(&Event::Click(Target::CardImage(0))));
    assert!(home.page().modal_visible());
    assert!(!home.page().modal_src().is_empty());

    assert!(home.dispatch(&Event::KeyDown(Key::from_name("Escape"))));
    assert!(!home.page().modal_visible());
    assert_eq!(home.page().modal_src(), "");

    // a second Escape has nothing to close
    assert!(!home.dispatch(&Event::KeyDown(Key::Escape)));
}

#[test]
fn test_close_button_scenario() {
    let (mut home, _) = build_home_page(
        &FileSource::default(),
        HeadlessPage::new(),
        StdRng::seed_from_u64(5),
        fixture_options("courses_holes.csv"),
    );
    home.dispatch(&Event::Click(Target::CardImage(2)));
    assert!(home.dispatch(&Event::Click(Target::ModalClose)));
    assert!(!home.page().modal_visible());
    assert!(home.page().to_html().contains("aria-hidden=\"true\""));
}

#[test]
fn test_other_events_are_ignored() {
    let (mut home, _) = build_home_page(
        &FileSource::default(),
        HeadlessPage::new(),
        StdRng::seed_from_u64(5),
        fixture_options("courses_holes.csv"),
    );
    assert!(!home.dispatch(&Event::Click(Target::Other)));
    assert!(!home.dispatch(&Event::Submit(Form::Other)));
    assert!(!home.dispatch(&Event::KeyUp(Target::Other, Key::Enter)));
}

/// Golden test: a single eligible course renders deterministically.
#[test]
fn test_single_course_golden_html() {
    let (home, _) = build_home_page(
        &FileSource::default(),
        HeadlessPage::new().without_quote_elements(),
        StdRng::seed_from_u64(99),
        fixture_options("single_course.csv"),
    );
    let expected = include_str!("fixtures/expected/single_course.html");
    assert_eq!(normalize(&home.page().to_html()), normalize(expected));
}
