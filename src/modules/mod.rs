pub mod basket;
pub mod favourites;
pub mod health;
pub mod products;
pub mod users;

use actix_web::web;

/// Register every API scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::controllers::configure)
        .configure(users::controllers::configure)
        .configure(products::controllers::configure)
        .configure(basket::controllers::configure)
        .configure(favourites::controllers::configure);
}
