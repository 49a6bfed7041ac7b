use rand::Rng;

/// Number of featured holes shown on the home page.
pub const FEATURED_COUNT: usize = 3;

/// Fisher–Yates shuffle in place.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle `items` and keep at most `limit` of them.
pub fn sample<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R, limit: usize) -> Vec<T> {
    shuffle(&mut items, rng);
    items.truncate(limit);
    items
}
