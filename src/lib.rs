pub mod app;
pub mod config;
pub mod error;
pub mod loader;
pub mod modal;
pub mod page;
pub mod photo;
pub mod quotes;
pub mod render;
pub mod row;
pub mod sample;
pub mod select;

pub use app::HomePage;
pub use config::SiteOptions;
pub use error::SiteError;
pub use loader::{LoadOutcome, LoadWarning, Source, WarningCode, load_csv, parse_rows};
pub use page::{Event, HeadlessPage, Key, Page, Target};
pub use render::Card;
pub use row::Row;

#[cfg(feature = "async")]
pub use loader::{AsyncSource, load_csv_async};

use rand::Rng;

/// Load the CSV from `source` and render a home page into `page`.
///
/// Loading never fails; anything that went wrong is reported in the returned
/// warnings and the page shows its "no photos" notice instead.
pub fn build_home_page<P: Page, R: Rng>(
    source: &dyn Source,
    page: P,
    rng: R,
    options: SiteOptions,
) -> (HomePage<P, R>, Vec<LoadWarning>) {
    let outcome = load_csv(source, &options.csv_path);
    let mut home = HomePage::new(page, rng, options);
    home.start(&outcome.rows);
    (home, outcome.warnings)
}

/// Async variant of [`build_home_page`]; only the fetch is asynchronous.
#[cfg(feature = "async")]
pub async fn build_home_page_async<P: Page, R: Rng>(
    source: &dyn AsyncSource,
    page: P,
    rng: R,
    options: SiteOptions,
) -> (HomePage<P, R>, Vec<LoadWarning>) {
    let outcome = load_csv_async(source, &options.csv_path).await;
    let mut home = HomePage::new(page, rng, options);
    home.start(&outcome.rows);
    (home, outcome.warnings)
}
