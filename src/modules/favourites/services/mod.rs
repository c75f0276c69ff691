pub mod favourites_service;

pub use favourites_service::FavouritesService;
