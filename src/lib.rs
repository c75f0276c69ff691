//! Online store basket, favourites and catalogue service.
//!
//! Business logic lives in `modules::*::services`; persistence sits behind
//! the repository traits so the services run over MySQL or any other store.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod state;

// Re-export commonly used types
pub use modules::basket;
pub use modules::favourites;
pub use modules::products;
pub use modules::users;
pub use state::{AppState, Repositories};
