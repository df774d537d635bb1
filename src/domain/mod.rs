pub mod auth;
pub mod resource;
pub mod shared;
pub mod user;
