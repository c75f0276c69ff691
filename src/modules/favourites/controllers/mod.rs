pub mod favourites_controller;

pub use favourites_controller::configure;
