pub mod basket_product_service;
pub mod basket_service;
pub mod branch_service;
pub mod dealer_service;
pub mod income_product_service;
pub mod income_service;
pub mod product_service;
pub mod store_service;

pub use basket_product_service::BasketProductService;
pub use basket_service::BasketService;
pub use branch_service::BranchService;
pub use dealer_service::DealerService;
pub use income_product_service::IncomeProductService;
pub use income_service::IncomeService;
pub use product_service::ProductService;
pub use store_service::StoreService;
