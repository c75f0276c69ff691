pub mod product;

pub use product::{
    max_price, Product, ProductInfo, ProductMutation, ProductRequest, MAX_IMAGE_URL_LENGTH,
    MAX_NAME_LENGTH,
};
