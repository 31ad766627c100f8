use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use super::index::PortfolioItem;
use super::viewer::{LightboxViewer, ViewerState};

const COMMAND_QUEUE_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCommand {
    /// Open at the first photo of the given portfolio item
    Open(usize),
    Close,
    Next,
    Prev,
}

#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("Gallery controller is no longer running")]
    ControllerGone,
}

/// Cloneable handle for driving the lightbox. Hand it to whatever needs to
/// open the gallery instead of reaching for shared global state.
#[derive(Debug, Clone)]
pub struct GalleryHandle {
    tx: mpsc::Sender<GalleryCommand>,
}

impl GalleryHandle {
    pub async fn send(&self, command: GalleryCommand) -> Result<(), GalleryError> {
        self.tx.send(command).await.map_err(|_| GalleryError::ControllerGone)
    }

    pub async fn open(&self, item_index: usize) -> Result<(), GalleryError> {
        self.send(GalleryCommand::Open(item_index)).await
    }

    pub async fn close(&self) -> Result<(), GalleryError> {
        self.send(GalleryCommand::Close).await
    }
}

/// Owns the viewer and applies queued commands strictly one after another.
/// Every applied command publishes the new state.
pub struct GalleryController {
    viewer: LightboxViewer,
    rx: mpsc::Receiver<GalleryCommand>,
    state_tx: watch::Sender<ViewerState>,
}

impl GalleryController {
    pub fn new(items: Vec<PortfolioItem>) -> (Self, GalleryHandle, watch::Receiver<ViewerState>) {
        let (tx, rx) = mpsc::channel(COMMAND_QUEUE_CAPACITY);
        let viewer = LightboxViewer::new(items);
        let (state_tx, state_rx) = watch::channel(viewer.state());
        (GalleryController { viewer, rx, state_tx }, GalleryHandle { tx }, state_rx)
    }

    pub fn viewer(&self) -> &LightboxViewer {
        &self.viewer
    }

    pub fn apply(&mut self, command: GalleryCommand) {
        match command {
            GalleryCommand::Open(item_index) if item_index > self.viewer.item_count() => {
                warn!(item_index, items = self.viewer.item_count(), "Ignoring open for unknown portfolio item");
                return;
            }
            GalleryCommand::Open(item_index) => self.viewer.open(item_index),
            GalleryCommand::Close => self.viewer.close(),
            GalleryCommand::Next => self.viewer.next(),
            GalleryCommand::Prev => self.viewer.prev(),
        }
        debug!(?command, state = ?self.viewer.state(), "Gallery command applied");
        self.state_tx.send_replace(self.viewer.state());
    }

    /// Process commands until every handle is dropped.
    pub async fn run(mut self) -> LightboxViewer {
        while let Some(command) = self.rx.recv().await {
            self.apply(command);
        }
        self.viewer
    }
}
