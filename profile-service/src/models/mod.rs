pub mod user;

pub use user::{Age, NewUser, UserRecord};
