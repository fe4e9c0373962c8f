pub mod basket_product_repo;
pub mod basket_repo;
pub mod branch_repo;
pub mod dealer_repo;
pub mod income_product_repo;
pub mod income_repo;
pub mod product_repo;
pub mod store_repo;

pub use basket_product_repo::{BasketProductRepository, BasketProductStorage};
pub use basket_repo::{BasketRepository, BasketStorage};
pub use branch_repo::{BranchRepository, BranchStorage};
pub use dealer_repo::{DealerRepository, DealerStorage};
pub use income_product_repo::{IncomeProductRepository, IncomeProductStorage};
pub use income_repo::{IncomeRepository, IncomeStorage};
pub use product_repo::{ProductRepository, ProductStorage};
pub use store_repo::{StoreRepository, StoreStorage};
