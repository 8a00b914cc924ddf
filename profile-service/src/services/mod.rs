pub mod memory;
pub mod mongo;
pub mod repository;

pub use memory::InMemoryUserRepository;
pub use mongo::MongoUserRepository;
pub use repository::UserRepository;
