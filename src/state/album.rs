use super::catalog::Catalog;
use super::data::ImageSource;

/// Keys the album viewer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// An album that is currently on screen
#[derive(Debug, Clone, PartialEq)]
struct OpenAlbum {
    studio_id: String,
    index: usize,
    /// Resolved images of the studio, dropped on close
    images: Vec<ImageSource>,
}

/// Lightbox state: closed, or open on one studio at one image.
///
/// Invariant: while open, `index < images.len()` unless the studio has no
/// images, in which case `index == 0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlbumViewer {
    open: Option<OpenAlbum>,
    scroll_locked: bool,
}

impl AlbumViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `studio_id` at `index`, switching studios if another album is
    /// open. Unknown ids are ignored and return `false`.
    pub fn open(&mut self, catalog: &Catalog, studio_id: &str, index: usize) -> bool {
        let Some(studio) = catalog.find(studio_id) else {
            tracing::debug!("Ignoring album request for unknown studio '{}'", studio_id);
            return false;
        };

        let images: Vec<ImageSource> = studio
            .images
            .iter()
            .map(|reference| catalog.image_source(reference))
            .collect();
        let index = index.min(images.len().saturating_sub(1));

        self.open = Some(OpenAlbum {
            studio_id: studio.id.clone(),
            index,
            images,
        });
        self.scroll_locked = true;
        true
    }

    /// Move by `delta` images, wrapping around in both directions
    pub fn navigate(&mut self, delta: i64) {
        if let Some(album) = self.open.as_mut() {
            if album.images.is_empty() {
                return;
            }
            let len = album.images.len() as i64;
            let step = delta.rem_euclid(len);
            album.index = ((album.index as i64 + step) % len) as usize;
        }
    }

    /// Jump to a thumbnail. Out-of-range indexes wrap like `navigate`.
    pub fn select_thumbnail(&mut self, index: usize) {
        if let Some(album) = self.open.as_mut() {
            if album.images.is_empty() {
                return;
            }
            album.index = index % album.images.len();
        }
    }

    pub fn close(&mut self) {
        self.open = None;
        self.scroll_locked = false;
    }

    /// Apply a keyboard shortcut. Keys do nothing while closed.
    pub fn handle_key(&mut self, key: AlbumKey) {
        if !self.is_open() {
            return;
        }

        match key {
            AlbumKey::Escape => self.close(),
            AlbumKey::ArrowLeft => self.navigate(-1),
            AlbumKey::ArrowRight => self.navigate(1),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Whether the page behind the album must ignore scrolling and clicks
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn studio_id(&self) -> Option<&str> {
        self.open.as_ref().map(|album| album.studio_id.as_str())
    }

    /// Active image index, 0 when closed
    pub fn index(&self) -> usize {
        self.open.as_ref().map_or(0, |album| album.index)
    }

    /// Resolved images of the open studio, empty when closed
    pub fn images(&self) -> &[ImageSource] {
        self.open
            .as_ref()
            .map(|album| album.images.as_slice())
            .unwrap_or(&[])
    }

    pub fn current_image(&self) -> Option<&ImageSource> {
        self.open
            .as_ref()
            .and_then(|album| album.images.get(album.index))
    }
}
