// src/config.rs

use std::{env, sync::Arc, time::Duration};

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::{
        BasketProductRepository, BasketRepository, BranchRepository, DealerRepository,
        IncomeProductRepository, IncomeRepository, ProductRepository, StoreRepository,
    },
    services::{
        BasketProductService, BasketService, BranchService, DealerService, IncomeProductService,
        IncomeService, ProductService, StoreService,
    },
};

// O estado compartilhado da aplicação: a pool e o grafo de serviços.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub basket_service: BasketService,
    pub basket_product_service: BasketProductService,
    pub branch_service: BranchService,
    pub income_service: IncomeService,
    pub income_product_service: IncomeProductService,
    pub product_service: ProductService,
    pub store_service: StoreService,
    pub dealer_service: DealerService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")?;

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool))
    }

    // Monta o grafo de dependências: repositório concreto -> service.
    pub fn from_pool(db_pool: PgPool) -> Self {
        let basket_service =
            BasketService::new(Arc::new(BasketRepository::new(db_pool.clone())));
        let basket_product_service =
            BasketProductService::new(Arc::new(BasketProductRepository::new(db_pool.clone())));
        let branch_service =
            BranchService::new(Arc::new(BranchRepository::new(db_pool.clone())));
        let income_service =
            IncomeService::new(Arc::new(IncomeRepository::new(db_pool.clone())));
        let income_product_service =
            IncomeProductService::new(Arc::new(IncomeProductRepository::new(db_pool.clone())));
        let product_service =
            ProductService::new(Arc::new(ProductRepository::new(db_pool.clone())));
        let store_service = StoreService::new(Arc::new(StoreRepository::new(db_pool.clone())));
        let dealer_service = DealerService::new(Arc::new(DealerRepository::new(db_pool.clone())));

        Self {
            db_pool,
            basket_service,
            basket_product_service,
            branch_service,
            income_service,
            income_product_service,
            product_service,
            store_service,
            dealer_service,
        }
    }
}
