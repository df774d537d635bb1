pub mod resource_repository;
pub mod user_repository;

pub use resource_repository::ResourceRepository;
pub use user_repository::UserRepository;
