//! Home page controller: renders the featured holes and the quote block,
//! then routes UI events to the modal, quote rotator and small page helpers.

use rand::Rng;
use tracing::debug;

use crate::config::SiteOptions;
use crate::modal::Modal;
use crate::page::{Event, Form, Key, NEWSLETTER_THANKS, Page, Target};
use crate::quotes::{GOLF_QUOTES, Quote, QuoteRotator, render_quote};
use crate::render::{Card, render_featured};
use crate::row::Row;
use crate::select::select_featured;

/// Home page state: the rendered cards, the shared modal and the quote rotator.
pub struct HomePage<P: Page, R: Rng> {
    page: P,
    rng: R,
    options: SiteOptions,
    cards: Vec<Card>,
    modal: Modal,
    rotator: QuoteRotator,
    quotes: &'static [Quote],
}

impl<P: Page, R: Rng> HomePage<P, R> {
    pub fn new(page: P, rng: R, options: SiteOptions) -> Self {
        Self {
            page,
            rng,
            options,
            cards: Vec::new(),
            modal: Modal::new(),
            rotator: QuoteRotator::new(),
            quotes: GOLF_QUOTES,
        }
    }

    /// Replace the built-in quote list.
    pub fn with_quotes(mut self, quotes: &'static [Quote]) -> Self {
        self.quotes = quotes;
        self
    }

    /// Initial render: featured holes from `rows`, then the first quote.
    pub fn start(&mut self, rows: &[Row]) {
        self.render_featured(rows);
        self.render_quote();
    }

    /// Pick and render a fresh set of featured holes.
    pub fn render_featured(&mut self, rows: &[Row]) {
        let picks = select_featured(rows, &mut self.rng, self.options.featured_count);
        self.cards = render_featured(&mut self.page, &picks, &self.options);
        debug!(cards = self.cards.len(), "rendered featured holes");
    }

    pub fn render_quote(&mut self) {
        render_quote(&mut self.page, &mut self.rotator, self.quotes, &mut self.rng);
    }

    /// Route one UI event. Returns whether anything handled it.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        match event {
            Event::Click(target) => self.handle_click(target),
            Event::KeyDown(key) => self.modal.handle_key_down(&mut self.page, key),
            Event::KeyUp(Target::NewQuoteButton, Key::Enter | Key::Space) => {
                self.new_quote()
            }
            Event::KeyUp(..) => false,
            Event::Submit(Form::Newsletter) => self.submit_newsletter(),
            Event::Submit(Form::Other) => false,
        }
    }

    fn handle_click(&mut self, target: &Target) -> bool {
        match target {
            Target::CardImage(index) => match self.cards.get(*index) {
                Some(card) => {
                    let src = card.image_src.clone();
                    self.modal.open(&mut self.page, &src);
                    true
                }
                None => false,
            },
            Target::ModalClose | Target::ModalBackdrop => {
                self.modal.handle_click(&mut self.page, target)
            }
            Target::BackToTop => {
                self.page.scroll_to_top();
                true
            }
            Target::NewQuoteButton => self.new_quote(),
            Target::ModalImage | Target::Other => false,
        }
    }

    fn new_quote(&mut self) -> bool {
        if !self.page.has_quote_elements() {
            return false;
        }
        self.render_quote();
        true
    }

    fn submit_newsletter(&mut self) -> bool {
        if !self.page.has_newsletter() {
            return false;
        }
        self.page.alert(NEWSLETTER_THANKS);
        self.page.reset_newsletter();
        true
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn rotator(&self) -> &QuoteRotator {
        &self.rotator
    }

    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn into_page(self) -> P {
        self.page
    }
}
