pub mod health;
pub mod users;

pub use health::{greeting, health_check};
pub use users::{add_user, fetch_users};
