use crate::content::PORTFOLIO;

/// Images shown before the visitor asks for more
pub const INITIAL_VISIBLE: usize = 12;
/// Images added by each "show more"
pub const REVEAL_STEP: usize = 8;
/// Leading images fetched eagerly and preloaded
pub const EAGER_COUNT: usize = 6;
/// Width of the gallery rendition used as the tile `src`
pub const TILE_WIDTH: u32 = 640;

const CATEGORY: &str = "Lifestyle";
const LOCATION: &str = "Cincinnati, OH";

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub id: u32,
    pub label: &'static str,
    pub category: &'static str,
    pub location: &'static str,
    pub path: &'static str,
}

impl GalleryImage {
    /// Cached rendition of this image served by the site itself
    pub fn route(&self, width: u32) -> String {
        format!("/images/{}?w={}", self.id, width)
    }

    /// `srcset` over the site's own image route
    pub fn route_src_set(&self, widths: &[u32]) -> String {
        widths
            .iter()
            .map(|w| format!("{} {}w", self.route(*w), w))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Ordered portfolio images, revealed a page at a time
#[derive(Debug)]
pub struct Gallery {
    images: Vec<GalleryImage>,
}

impl Gallery {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self { images }
    }

    /// The site portfolio, ids counting up from 1
    pub fn portfolio() -> &'static Gallery {
        lazy_static::lazy_static! {
            static ref PORTFOLIO_GALLERY: Gallery = Gallery::new(
                PORTFOLIO
                    .iter()
                    .zip(1..)
                    .map(|(&(label, path), id)| GalleryImage {
                        id,
                        label,
                        category: CATEGORY,
                        location: LOCATION,
                        path,
                    })
                    .collect()
            );
        }
        &PORTFOLIO_GALLERY
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&GalleryImage> {
        self.images.iter().find(|image| image.id == id)
    }

    /// The first `visible` images
    pub fn reveal(&self, visible: usize) -> &[GalleryImage] {
        &self.images[..visible.min(self.len())]
    }

    /// How many images to show after one more reveal step
    pub fn next_count(&self, visible: usize) -> usize {
        visible.saturating_add(REVEAL_STEP).min(self.len())
    }

    pub fn has_more(&self, visible: usize) -> bool {
        visible < self.len()
    }

    /// Images worth a `<link rel="preload">`
    pub fn preload(&self) -> &[GalleryImage] {
        self.reveal(EAGER_COUNT)
    }
}

/// Whether the image at `index` is likely above the fold
pub fn is_eager(index: usize) -> bool {
    index < EAGER_COUNT
}
