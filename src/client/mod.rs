mod cdn_client;
mod intake_client;

pub use cdn_client::*;
pub use intake_client::*;
