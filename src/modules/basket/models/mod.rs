pub mod basket_entry;

pub use basket_entry::{BasketCount, BasketEntry, BasketKey, BasketRequest};
