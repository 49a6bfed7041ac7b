use rand::Rng;

use crate::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

const fn quote(text: &'static str, author: &'static str) -> Quote {
    Quote { text, author }
}

/// Built-in golf quotes with attributions.
pub const GOLF_QUOTES: &[Quote] = &[
    quote("The more I practice, the luckier I get.", "Gary Player"),
    quote(
        "Golf is a game of inches. The most important are the six inches between your ears.",
        "Arnold Palmer",
    ),
    quote(
        "Success in golf depends less on strength of body than upon strength of mind and character.",
        "Arnold Palmer",
    ),
    quote(
        "You swing your best when you have the fewest things to think about.",
        "Bobby Jones",
    ),
    quote(
        "It’s a funny thing, the more I practice the luckier I get.",
        "Jerry Barber",
    ),
    quote(
        "Resolve never to quit, never to give up, no matter what the situation.",
        "Jack Nicklaus",
    ),
    quote(
        "Golf is deceptively simple and endlessly complicated.",
        "Harvey Penick",
    ),
    quote(
        "A bad day of golf is better than a good day at work.",
        "Anonymous",
    ),
    quote(
        "Putts get real difficult the day they hand out the money.",
        "Lee Trevino",
    ),
    quote("The most important shot in golf is the next one.", "Ben Hogan"),
    quote(
        "Competitive golf is played mainly on a five-inch course… the space between your ears.",
        "Bobby Jones",
    ),
    quote("Don’t be too proud to take lessons. I’m not.", "Jack Nicklaus"),
];

/// Picks random quote indices, never the same one twice in a row.
#[derive(Debug, Clone, Default)]
pub struct QuoteRotator {
    last_index: Option<usize>,
}

impl QuoteRotator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_index(&self) -> Option<usize> {
        self.last_index
    }

    /// Next index into a list of `len` quotes.
    ///
    /// Lists of 0 or 1 entries always yield 0 and leave the state alone.
    /// Otherwise a repeat of the previous index is bumped to the next slot,
    /// wrapping at the end.
    pub fn next_index<R: Rng + ?Sized>(&mut self, len: usize, rng: &mut R) -> usize {
        if len <= 1 {
            return 0;
        }
        let mut idx = rng.gen_range(0..len);
        if Some(idx) == self.last_index {
            idx = (idx + 1) % len;
        }
        self.last_index = Some(idx);
        idx
    }

    /// Next quote from `quotes`, or `None` when the list is empty.
    pub fn next_quote<'q, R: Rng + ?Sized>(
        &mut self,
        quotes: &'q [Quote],
        rng: &mut R,
    ) -> Option<&'q Quote> {
        let idx = self.next_index(quotes.len(), rng);
        quotes.get(idx)
    }
}

/// Author line as displayed under the quote.
pub fn format_author(author: &str) -> String {
    format!("— {author}")
}

/// Write a fresh quote into the page's quote block, if it has one.
pub fn render_quote<P: Page + ?Sized, R: Rng + ?Sized>(
    page: &mut P,
    rotator: &mut QuoteRotator,
    quotes: &[Quote],
    rng: &mut R,
) {
    if !page.has_quote_elements() {
        return;
    }
    if let Some(q) = rotator.next_quote(quotes, rng) {
        page.set_quote(q.text, &format_author(q.author));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::HeadlessPage;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_builtin_quote_list() {
        assert_eq!(GOLF_QUOTES.len(), 12);
        assert!(GOLF_QUOTES.iter().all(|q| !q.text.is_empty() && !q.author.is_empty()));
    }

    #[test]
    fn test_never_repeats_consecutively() {
        let mut rng = StdRng::seed_from_u64(2024);
        for len in 2..6 {
            let mut rotator = QuoteRotator::new();
            let mut prev = rotator.next_index(len, &mut rng);
            for _ in 0..500 {
                let idx = rotator.next_index(len, &mut rng);
                assert!(idx < len);
                assert_ne!(idx, prev, "len {len}");
                prev = idx;
            }
        }
    }

    #[test]
    fn test_two_entries_alternate() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut rotator = QuoteRotator::new();
        let first = rotator.next_index(2, &mut rng);
        for i in 1..20 {
            let expected = (first + i) % 2;
            assert_eq!(rotator.next_index(2, &mut rng), expected);
        }
    }

    #[test]
    fn test_degenerate_lists_return_zero_without_state() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut rotator = QuoteRotator::new();
        assert_eq!(rotator.next_index(0, &mut rng), 0);
        assert_eq!(rotator.next_index(1, &mut rng), 0);
        assert_eq!(rotator.next_index(1, &mut rng), 0);
        assert_eq!(rotator.last_index(), None);
    }

    #[test]
    fn test_last_index_tracks_choice() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut rotator = QuoteRotator::new();
        let idx = rotator.next_index(GOLF_QUOTES.len(), &mut rng);
        assert_eq!(rotator.last_index(), Some(idx));
    }

    #[test]
    fn test_next_quote_empty_list() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut rotator = QuoteRotator::new();
        assert!(rotator.next_quote(&[], &mut rng).is_none());
    }

    #[test]
    fn test_render_quote_sets_text_and_author() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut rotator = QuoteRotator::new();
        let mut page = HeadlessPage::new();
        let only = [quote("Keep your head down.", "Coach")];
        render_quote(&mut page, &mut rotator, &only, &mut rng);
        assert_eq!(page.quote(), Some(("Keep your head down.", "— Coach")));
    }

    #[test]
    fn test_render_quote_without_elements_is_noop() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut rotator = QuoteRotator::new();
        let mut page = HeadlessPage::new().without_quote_elements();
        render_quote(&mut page, &mut rotator, GOLF_QUOTES, &mut rng);
        assert!(page.quote().is_none());
        assert_eq!(rotator.last_index(), None);
    }
}
