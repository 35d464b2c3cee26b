use std::fmt;

use url::Url;

/// Path segment after which the CDN reads its transformation directives
const UPLOAD_SEGMENT: &str = "/upload/";

/// Automatic format, quality and device pixel ratio
const AUTO_DIRECTIVES: &str = "f_auto,q_auto,dpr_auto";
/// Small low quality rendition painted behind an image while it loads
const PLACEHOLDER_DIRECTIVES: &str = "f_auto,q_25,w_80";

pub const HERO_WIDTHS: [u32; 4] = [1280, 1600, 2000, 2400];
pub const CARD_WIDTHS: [u32; 4] = [480, 640, 800, 1000];
pub const PORTRAIT_WIDTHS: [u32; 4] = [480, 640, 800, 1200];
pub const MASONRY_WIDTHS: [u32; 4] = [320, 480, 640, 800];
pub const PRELOAD_WIDTHS: [u32; 3] = [480, 640, 800];

/// The image CDN account every site image is uploaded to
#[derive(Debug, Clone)]
pub struct Cdn {
    base_url: Url,
}

impl Cdn {
    pub fn new(mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { base_url }
    }

    /// An uploaded image by its path below the upload root
    pub fn image(&self, path: &str) -> CdnImage {
        CdnImage(format!("{}{}", self.base_url, path.trim_start_matches('/')))
    }

    /// `scheme://host[:port]` of the CDN, for connection hints
    pub fn origin(&self) -> String {
        self.base_url.origin().ascii_serialization()
    }
}

/// URL of an image on the CDN
///
/// Every rendition is the same URL with directives spliced in after
/// `/upload/`. URLs from anywhere else are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdnImage(String);

impl CdnImage {
    /// Let the CDN pick format and quality
    pub fn optimized(&self) -> String {
        self.with_directives(AUTO_DIRECTIVES)
    }

    /// Optimized and scaled down to `width` pixels
    pub fn width(&self, width: u32) -> String {
        self.with_directives(&format!("{},w_{}", AUTO_DIRECTIVES, width))
    }

    /// `srcset` attribute value over the given widths
    pub fn src_set(&self, widths: &[u32]) -> String {
        widths
            .iter()
            .map(|w| format!("{} {}w", self.width(*w), w))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn placeholder(&self) -> String {
        self.with_directives(PLACEHOLDER_DIRECTIVES)
    }

    fn with_directives(&self, directives: &str) -> String {
        match self.0.find(UPLOAD_SEGMENT) {
            Some(at) => {
                let (head, tail) = self.0.split_at(at + UPLOAD_SEGMENT.len());
                format!("{}{}/{}", head, directives, tail)
            }
            None => self.0.clone(),
        }
    }
}

impl From<String> for CdnImage {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for CdnImage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CdnImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
