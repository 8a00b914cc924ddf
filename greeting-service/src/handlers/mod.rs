pub mod greeting;

pub use greeting::{greeting, health_check};
