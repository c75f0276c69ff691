use std::sync::Arc;

use actix_web::web;
use sqlx::MySqlPool;

use crate::modules::basket::{BasketRepository, BasketService, MySqlBasketRepository};
use crate::modules::favourites::{
    FavouritesRepository, FavouritesService, MySqlFavouritesRepository,
};
use crate::modules::products::{MySqlProductRepository, ProductRepository, ProductService};
use crate::modules::users::{MySqlUserRepository, UserRepository, UserService};

/// Repository handles shared by the services
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub baskets: Arc<dyn BasketRepository>,
    pub favourites: Arc<dyn FavouritesRepository>,
}

impl Repositories {
    pub fn mysql(pool: MySqlPool) -> Self {
        Self {
            users: Arc::new(MySqlUserRepository::new(pool.clone())),
            products: Arc::new(MySqlProductRepository::new(pool.clone())),
            baskets: Arc::new(MySqlBasketRepository::new(pool.clone())),
            favourites: Arc::new(MySqlFavouritesRepository::new(pool)),
        }
    }
}

/// Services handed to the HTTP layer
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub products: Arc<ProductService>,
    pub basket: Arc<BasketService>,
    pub favourites: Arc<FavouritesService>,
}

impl AppState {
    pub fn new(repos: Repositories, page_size: u32) -> Self {
        Self {
            users: Arc::new(UserService::new(repos.users.clone())),
            products: Arc::new(ProductService::new(repos.products.clone(), page_size)),
            basket: Arc::new(BasketService::new(
                repos.baskets,
                repos.products.clone(),
                repos.users.clone(),
                page_size,
            )),
            favourites: Arc::new(FavouritesService::new(
                repos.favourites,
                repos.products,
                repos.users,
                page_size,
            )),
        }
    }

    /// Register each service as `web::Data<Arc<_>>`, the shape the controllers extract
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.users.clone()))
            .app_data(web::Data::new(self.products.clone()))
            .app_data(web::Data::new(self.basket.clone()))
            .app_data(web::Data::new(self.favourites.clone()));
    }
}
