use crate::render::{Card, escape_html};

/// Element ids and class names the page markup is expected to carry.
pub mod ids {
    pub const FEATURED: &str = "featured";
    pub const NO_PHOTOS: &str = "noPhotos";
    pub const PHOTO_MODAL: &str = "photoModal";
    pub const MODAL_IMG: &str = "modalImg";
    pub const QUOTE_TEXT: &str = "quote-text";
    pub const QUOTE_AUTHOR: &str = "quote-author";
    pub const NEW_QUOTE_BTN: &str = "new-quote-btn";
    pub const NEWSLETTER: &str = "newsletter";

    pub const HOLE_CARD: &str = "hole-card";
    pub const HOLE_IMG: &str = "hole-img";
    pub const MODAL_CLOSE: &str = "modal-close";
    pub const BACK_TO_TOP: &str = "back-to-top";
    /// Marker class that makes the modal visible.
    pub const SHOW: &str = "show";
}

/// Text of the notice shown when no hole has a usable photo.
pub const NO_PHOTOS_MESSAGE: &str = "No featured photos yet. Check back soon.";
/// Alert shown after the newsletter form is submitted.
pub const NEWSLETTER_THANKS: &str = "Thanks for joining our newsletter!";

/// What an event was dispatched to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The `.hole-img` of the card at this index.
    CardImage(usize),
    ModalClose,
    /// The `#photoModal` backdrop itself, not its content.
    ModalBackdrop,
    ModalImage,
    BackToTop,
    NewQuoteButton,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Forms the page can submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Form {
    Newsletter,
    Other,
}

/// A UI event delivered by the host's dispatch loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Click(Target),
    /// Document-level keydown.
    KeyDown(Key),
    KeyUp(Target, Key),
    Submit(Form),
}

/// The UI surface the site logic drives.
///
/// Implementations map these calls onto a real document or, like
/// [`HeadlessPage`], record them.
pub trait Page {
    /// Empty the `#featured` container.
    fn clear_featured(&mut self);

    fn append_card(&mut self, card: &Card);

    /// Make the `#noPhotos` notice visible.
    fn show_no_photos(&mut self);

    /// Set the `#modalImg` source. An empty string clears it.
    fn set_modal_image(&mut self, src: &str);

    /// Toggle the `show` marker and `aria-hidden` on `#photoModal`.
    fn set_modal_visible(&mut self, visible: bool);

    /// Whether both quote elements exist.
    fn has_quote_elements(&self) -> bool {
        true
    }

    fn set_quote(&mut self, text: &str, author: &str);

    fn has_newsletter(&self) -> bool {
        false
    }

    fn reset_newsletter(&mut self) {}

    fn alert(&mut self, message: &str);

    fn scroll_to_top(&mut self);
}

/// In-memory page that records every change, for tests and the CLI.
#[derive(Debug, Clone)]
pub struct HeadlessPage {
    featured: Vec<Card>,
    no_photos_visible: bool,
    modal_visible: bool,
    modal_src: String,
    quote: Option<(String, String)>,
    quote_elements: bool,
    newsletter: bool,
    newsletter_resets: usize,
    alerts: Vec<String>,
    scroll_requests: usize,
}

impl Default for HeadlessPage {
    fn default() -> Self {
        Self {
            featured: Vec::new(),
            no_photos_visible: false,
            modal_visible: false,
            modal_src: String::new(),
            quote: None,
            quote_elements: true,
            newsletter: false,
            newsletter_resets: 0,
            alerts: Vec::new(),
            scroll_requests: 0,
        }
    }
}

impl HeadlessPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page without the quote block.
    pub fn without_quote_elements(mut self) -> Self {
        self.quote_elements = false;
        self
    }

    /// Page carrying the `#newsletter` signup form.
    pub fn with_newsletter(mut self) -> Self {
        self.newsletter = true;
        self
    }

    pub fn featured(&self) -> &[Card] {
        &self.featured
    }

    pub fn no_photos_visible(&self) -> bool {
        self.no_photos_visible
    }

    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn modal_src(&self) -> &str {
        &self.modal_src
    }

    /// Current `(text, author line)` pair, once a quote was rendered.
    pub fn quote(&self) -> Option<(&str, &str)> {
        self.quote.as_ref().map(|(t, a)| (t.as_str(), a.as_str()))
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn newsletter_resets(&self) -> usize {
        self.newsletter_resets
    }

    pub fn scroll_requests(&self) -> usize {
        self.scroll_requests
    }

    /// HTML fragment of the page regions the site logic owns.
    pub fn to_html(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("<section id=\"{}\">\n", ids::FEATURED));
        for card in &self.featured {
            out.push_str(&card.to_html());
        }
        out.push_str("</section>\n");

        let display = if self.no_photos_visible { "block" } else { "none" };
        out.push_str(&format!(
            "<p id=\"{}\" style=\"display: {display}\">{}</p>\n",
            ids::NO_PHOTOS,
            escape_html(NO_PHOTOS_MESSAGE)
        ));

        let class = if self.modal_visible {
            format!("modal {}", ids::SHOW)
        } else {
            "modal".to_string()
        };
        out.push_str(&format!(
            "<div id=\"{}\" class=\"{class}\" aria-hidden=\"{}\">\n",
            ids::PHOTO_MODAL,
            !self.modal_visible
        ));
        out.push_str(&format!(
            "  <button class=\"{}\" aria-label=\"Close\">&times;</button>\n",
            ids::MODAL_CLOSE
        ));
        out.push_str(&format!(
            "  <img id=\"{}\" src=\"{}\" alt=\"\">\n",
            ids::MODAL_IMG,
            escape_html(&self.modal_src)
        ));
        out.push_str("</div>\n");

        if self.quote_elements {
            let (text, author) = self.quote().unwrap_or(("", ""));
            out.push_str("<blockquote>\n");
            out.push_str(&format!(
                "  <p id=\"{}\">{}</p>\n",
                ids::QUOTE_TEXT,
                escape_html(text)
            ));
            out.push_str(&format!(
                "  <cite id=\"{}\">{}</cite>\n",
                ids::QUOTE_AUTHOR,
                escape_html(author)
            ));
            out.push_str("</blockquote>\n");
        }

        if self.newsletter {
            out.push_str(&format!("<form id=\"{}\">\n", ids::NEWSLETTER));
            out.push_str("  <input type=\"email\" name=\"email\" required>\n");
            out.push_str("  <button type=\"submit\">Subscribe</button>\n");
            out.push_str("</form>\n");
        }

        out
    }

    /// Plain-text summary: one line per card, the notice, then the quote.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if self.no_photos_visible {
            out.push_str(NO_PHOTOS_MESSAGE);
            out.push('\n');
        }
        for card in &self.featured {
            out.push_str(&format!(
                "{} | {} | {}\n",
                card.title, card.subtitle, card.image_src
            ));
        }
        if let Some((text, author)) = self.quote() {
            out.push('\n');
            out.push_str(&format!("\"{text}\" {author}\n"));
        }
        out
    }

    /// JSON view of the rendered state.
    pub fn to_json(&self) -> serde_json::Value {
        let featured: Vec<serde_json::Value> = self
            .featured
            .iter()
            .map(|c| {
                serde_json::json!({
                    "title": c.title,
                    "subtitle": c.subtitle,
                    "image": c.image_src,
                    "alt": c.alt,
                })
            })
            .collect();
        let quote = self.quote().map(|(text, author)| {
            serde_json::json!({ "text": text, "author": author })
        });
        serde_json::json!({
            "featured": featured,
            "no_photos": self.no_photos_visible,
            "modal": { "visible": self.modal_visible, "src": self.modal_src },
            "quote": quote,
        })
    }
}

impl Page for HeadlessPage {
    fn clear_featured(&mut self) {
        self.featured.clear();
    }

    fn append_card(&mut self, card: &Card) {
        self.featured.push(card.clone());
    }

    fn show_no_photos(&mut self) {
        self.no_photos_visible = true;
    }

    fn set_modal_image(&mut self, src: &str) {
        self.modal_src = src.to_string();
    }

    fn set_modal_visible(&mut self, visible: bool) {
        self.modal_visible = visible;
    }

    fn has_quote_elements(&self) -> bool {
        self.quote_elements
    }

    fn set_quote(&mut self, text: &str, author: &str) {
        self.quote = Some((text.to_string(), author.to_string()));
    }

    fn has_newsletter(&self) -> bool {
        self.newsletter
    }

    fn reset_newsletter(&mut self) {
        self.newsletter_resets += 1;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn scroll_to_top(&mut self) {
        self.scroll_requests += 1;
    }
}
