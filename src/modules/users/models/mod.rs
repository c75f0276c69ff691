pub mod user;

pub use user::{CreateUserRequest, User, UserCreated};
