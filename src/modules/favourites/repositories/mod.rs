pub mod favourites_repository;

pub use favourites_repository::{FavouritesRepository, MySqlFavouritesRepository};
