//! Fixed user-facing message tables.

/// Messages returned on successful mutations
pub struct SuccessMessage;

impl SuccessMessage {
    pub const USER_ADDED: &'static str = "User added";
    pub const PRODUCT_ADDED: &'static str = "Product added";
    pub const PRODUCT_DELETED: &'static str = "Product deleted";
    pub const PRODUCT_UPDATED: &'static str = "Product updated";

    pub const BASKET_IS_EMPTIED: &'static str = "Basket is emptied";
    pub const FAVOURITES_IS_EMPTIED: &'static str = "Favourites is emptied";
}

/// Messages carried by the domain error kinds
pub struct ErrorMessage;

impl ErrorMessage {
    pub const USER_NOT_FOUND: &'static str = "User not found";
    pub const EMAIL_ALREADY_REGISTERED: &'static str = "Email is already registered";
    pub const PRODUCT_NOT_FOUND: &'static str = "Product not found";

    pub const PRODUCT_ALREADY_IN_BASKET: &'static str = "Product is already in basket";
    pub const PRODUCT_NOT_IN_BASKET: &'static str = "Product is not in basket";
    pub const BASKET_IS_EMPTY: &'static str = "Basket is empty";

    pub const PRODUCT_ALREADY_IN_FAVOURITES: &'static str = "Product is already in favourites";
    pub const PRODUCT_NOT_IN_FAVOURITES: &'static str = "Product is not in favourites";
    pub const FAVOURITES_IS_EMPTY: &'static str = "Favourites is empty";
}
