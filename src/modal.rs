//! Lightbox modal shared by every featured card.

use crate::page::{Key, Page, Target};

/// Whether the modal is showing, and which image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Hidden,
    Shown {
        src: String,
    },
}

/// Open/close transitions for `#photoModal`.
#[derive(Debug, Clone, Default)]
pub struct Modal {
    state: ModalState,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_shown(&self) -> bool {
        matches!(self.state, ModalState::Shown { .. })
    }

    /// Show `src` in the modal.
    pub fn open<P: Page + ?Sized>(&mut self, page: &mut P, src: &str) {
        page.set_modal_image(src);
        page.set_modal_visible(true);
        self.state = ModalState::Shown {
            src: src.to_string(),
        };
    }

    /// Hide the modal and clear its image.
    pub fn close<P: Page + ?Sized>(&mut self, page: &mut P) {
        page.set_modal_visible(false);
        page.set_modal_image("");
        self.state = ModalState::Hidden;
    }

    /// Close on the close control or a backdrop click. Returns whether the
    /// click was consumed.
    pub fn handle_click<P: Page + ?Sized>(&mut self, page: &mut P, target: &Target) -> bool {
        match target {
            Target::ModalClose | Target::ModalBackdrop => {
                self.close(page);
                true
            }
            _ => false,
        }
    }

    /// Escape closes the modal, but only while it is shown.
    pub fn handle_key_down<P: Page + ?Sized>(&mut self, page: &mut P, key: &Key) -> bool {
        if *key == Key::Escape && self.is_shown() {
            self.close(page);
            return true;
        }
        false
    }
}
