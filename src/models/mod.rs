pub mod basket;
pub mod basket_product;
pub mod branch;
pub mod income;
pub mod income_product;
pub mod product;
pub mod store;
