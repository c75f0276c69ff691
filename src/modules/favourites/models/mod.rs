pub mod favourite_entry;

pub use favourite_entry::{FavouriteEntry, FavouriteKey, FavouriteRequest, FavouritesCount};
