// Users module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CreateUserRequest, User, UserCreated};
pub use repositories::{MySqlUserRepository, UserRepository};
pub use services::UserService;
