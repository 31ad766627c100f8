use serde::Serialize;

use super::index::{flatten, start_offset, PortfolioItem, Slide};

/// The one shared piece of viewer state: visible or not, and which slide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewerState {
    pub open: bool,
    pub index: usize,
}

/// Single lightbox over every portfolio item's photos. The carousel is
/// not finite: stepping past either end wraps around.
#[derive(Debug, Clone)]
pub struct LightboxViewer {
    items: Vec<PortfolioItem>,
    slides: Vec<Slide>,
    state: ViewerState,
}

impl LightboxViewer {
    pub fn new(items: Vec<PortfolioItem>) -> Self {
        let slides = flatten(&items);
        LightboxViewer { items, slides, state: ViewerState::default() }
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Show the first photo of `items[item_index]`.
    ///
    /// # Panics
    ///
    /// When `item_index > items.len()`, as [`start_offset`] does.
    pub fn open(&mut self, item_index: usize) {
        self.state.index = start_offset(&self.items, item_index);
        self.state.open = true;
    }

    pub fn close(&mut self) {
        self.state.open = false;
    }

    pub fn next(&mut self) {
        if self.state.open && !self.slides.is_empty() {
            self.state.index = (self.state.index + 1) % self.slides.len();
        }
    }

    pub fn prev(&mut self) {
        if self.state.open && !self.slides.is_empty() {
            let len = self.slides.len();
            self.state.index = (self.state.index % len + len - 1) % len;
        }
    }

    /// The slide on screen, if the viewer is open and the index lands on one.
    pub fn current(&self) -> Option<&Slide> {
        if self.state.open {
            self.slides.get(self.state.index)
        } else {
            None
        }
    }
}
