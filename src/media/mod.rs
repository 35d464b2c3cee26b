mod cdn;
mod gallery;
mod head;
mod image_cache;

pub use cdn::*;
pub use gallery::*;
pub use head::*;
pub use image_cache::*;
