use serde::{Deserialize, Serialize};

/// A named work sample with its own ordered photo gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub gallery: Vec<String>,
}

/// One image in the lightbox, captioned with its item's title and subtitle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub src: String,
    pub title: String,
    pub description: String,
}

/// All galleries concatenated, item order first, photo order second.
pub fn flatten(items: &[PortfolioItem]) -> Vec<Slide> {
    items
        .iter()
        .flat_map(|item| {
            item.gallery.iter().map(move |src| Slide {
                src: src.clone(),
                title: item.title.clone(),
                description: item.subtitle.clone(),
            })
        })
        .collect()
}

/// Index of the first slide of `items[item_index]` in [`flatten`]'s output.
///
/// # Panics
///
/// When `item_index > items.len()`. Callers pass indices of rendered items.
pub fn start_offset(items: &[PortfolioItem], item_index: usize) -> usize {
    items[..item_index].iter().map(|item| item.gallery.len()).sum()
}

/// Slides plus the start offset of every item, computed once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryIndex {
    pub slides: Vec<Slide>,
    pub offsets: Vec<usize>,
}

impl GalleryIndex {
    pub fn build(items: &[PortfolioItem]) -> Self {
        let offsets = items
            .iter()
            .scan(0usize, |running, item| {
                let offset = *running;
                *running += item.gallery.len();
                Some(offset)
            })
            .collect();
        GalleryIndex { slides: flatten(items), offsets }
    }

    pub fn offset_of(&self, item_index: usize) -> Option<usize> {
        self.offsets.get(item_index).copied()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
