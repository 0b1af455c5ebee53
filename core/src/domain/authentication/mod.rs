pub mod session;
pub mod value_objects;

pub use session::{SessionHub, SessionSubscription};
pub use value_objects::Identity;
