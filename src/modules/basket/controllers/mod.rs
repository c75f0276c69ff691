pub mod basket_controller;

pub use basket_controller::configure;
