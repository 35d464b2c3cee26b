use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use askama::Template;

use chrono::Datelike;

use crate::content::{ContactDetails, BRAND_NAME, BRAND_TAGLINE, CONTACT, FAVICON};
use crate::media::{Cdn, HeadAssets};

/// Booking form page and submission
pub mod contact;
/// Gallery image delivery
pub mod images;
/// Static marketing pages
pub mod pages;

mod error;

pub use error::*;

/// Navigation entries as `(label, path)`
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("Portfolio", "/portfolio"),
    ("About", "/about"),
    ("Services", "/services"),
];

/// A navbar entry
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// Everything the shared page frame needs
pub struct Layout<'a> {
    pub head: &'a HeadAssets,
    pub nav: Vec<NavLink>,
    pub title: &'static str,
    pub brand: &'static str,
    pub tagline: &'static str,
    pub logo: String,
    pub contact: &'static ContactDetails,
    pub year: i32,
}

impl<'a> Layout<'a> {
    pub fn new(head: &'a HeadAssets, cdn: &Cdn, path: &'static str, title: &'static str) -> Self {
        let nav = NAV_LINKS
            .iter()
            .map(|&(label, href)| NavLink {
                label,
                href,
                active: href == path,
            })
            .collect();

        Self {
            head,
            nav,
            title,
            brand: BRAND_NAME,
            tagline: BRAND_TAGLINE,
            logo: cdn.image(FAVICON).width(96),
            contact: &CONTACT,
            year: chrono::Local::now().year(),
        }
    }
}

/// A responsive image: fallback `src` plus `srcset`
pub struct Picture {
    pub alt: &'static str,
    pub src: String,
    pub src_set: String,
}

/// Render a template into an HTML response
pub fn render(status: StatusCode, template: &impl Template) -> PageResult<HttpResponse> {
    let body = template.render()?;

    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body))
}
