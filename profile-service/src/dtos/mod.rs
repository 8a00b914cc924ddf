pub mod users;

pub use users::{AddUserRequest, MessageResponse, UserResponse};
