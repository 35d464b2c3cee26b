use crate::content::{FAVICON, THEME_COLOR};
use crate::media::{Cdn, Gallery, PRELOAD_WIDTHS, TILE_WIDTH};

/// A `<link>` in the document head
#[derive(Debug, Clone, PartialEq)]
pub struct HeadLink {
    pub rel: &'static str,
    pub href: String,
    pub sizes: Option<&'static str>,
    pub crossorigin: bool,
}

/// Tags every page carries in its `<head>`
///
/// Built once at startup and shared read-only by every request.
#[derive(Debug, Clone)]
pub struct HeadAssets {
    pub links: Vec<HeadLink>,
    pub theme_color: &'static str,
}

impl HeadAssets {
    pub fn build(cdn: &Cdn) -> Self {
        let favicon = cdn.image(FAVICON);
        let origin = cdn.origin();

        let icon = |rel: &'static str, sizes: &'static str, width: u32| HeadLink {
            rel,
            href: favicon.width(width),
            sizes: Some(sizes),
            crossorigin: false,
        };

        let links = vec![
            HeadLink {
                rel: "preconnect",
                href: origin.clone(),
                sizes: None,
                crossorigin: true,
            },
            HeadLink {
                rel: "dns-prefetch",
                href: origin,
                sizes: None,
                crossorigin: false,
            },
            icon("icon", "16x16", 16),
            icon("icon", "32x32", 32),
            icon("apple-touch-icon", "180x180", 180),
        ];

        Self {
            links,
            theme_color: THEME_COLOR,
        }
    }
}

/// `<link rel="preload" as="image">` for an above-the-fold image
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePreload {
    pub href: String,
    pub src_set: String,
    pub sizes: &'static str,
}

impl ImagePreload {
    /// Preloads for the leading portfolio images, through the image cache
    pub fn for_gallery(gallery: &Gallery) -> Vec<Self> {
        gallery
            .preload()
            .iter()
            .map(|image| Self {
                href: image.route(TILE_WIDTH),
                src_set: image.route_src_set(&PRELOAD_WIDTHS),
                sizes: "(max-width: 1024px) 50vw, 25vw",
            })
            .collect()
    }
}
