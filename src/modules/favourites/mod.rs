// Favourites module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{FavouriteEntry, FavouriteKey, FavouriteRequest, FavouritesCount};
pub use repositories::{FavouritesRepository, MySqlFavouritesRepository};
pub use services::FavouritesService;
