//! Portfolio lightbox: slide index, viewer state and the command channel
//! used to drive the viewer from outside its own rendering tree.

pub mod index;
pub mod viewer;
pub mod command;

pub use index::{flatten, start_offset, GalleryIndex, PortfolioItem, Slide};
pub use viewer::LightboxViewer;
pub use command::{GalleryCommand, GalleryController, GalleryHandle};
