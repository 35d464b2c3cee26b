/// Basic application code
pub mod app;
/// REST clients for outside services
pub mod client;
/// Site copy and image paths
pub mod content;
/// Controllers for page endpoints
pub mod controller;
/// Domain objects
pub mod domain;
/// Domain validation errors
pub mod error;
/// CDN image URLs, gallery and head tags
pub mod media;
/// Application settings
pub mod settings;
/// Booking form validation and delivery
pub mod submission;
/// Application telemetry for tracing and logging
pub mod telemetry;
