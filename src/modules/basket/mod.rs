// Basket module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{BasketCount, BasketEntry, BasketKey, BasketRequest};
pub use repositories::{BasketRepository, MySqlBasketRepository};
pub use services::BasketService;
