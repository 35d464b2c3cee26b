mod email_address;
mod inquiry_type;
mod person_name;
mod phone_number;
mod preferred_date_time;
mod studio_clock;

pub use email_address::*;
pub use inquiry_type::*;
pub use person_name::*;
pub use phone_number::*;
pub use preferred_date_time::*;
pub use studio_clock::*;
