pub mod basket_repository;

pub use basket_repository::{BasketRepository, MySqlBasketRepository};
