// src/main.rs

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;

mod common;
mod config;
mod db;
mod handlers;
mod models;
mod services;

use crate::config::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let basket_routes = Router::new()
        .route(
            "/basket",
            post(handlers::basket::create_basket).put(handlers::basket::update_basket),
        )
        .route(
            "/basket/{id}",
            get(handlers::basket::get_basket).delete(handlers::basket::delete_basket),
        )
        .route("/baskets", get(handlers::basket::get_basket_list));

    let basket_product_routes = Router::new()
        .route(
            "/basket_product",
            post(handlers::basket_product::create_basket_product)
                .put(handlers::basket_product::update_basket_product),
        )
        .route(
            "/basket_product/{id}",
            get(handlers::basket_product::get_basket_product)
                .delete(handlers::basket_product::delete_basket_product),
        )
        .route(
            "/basket_products",
            get(handlers::basket_product::get_basket_product_list),
        );

    let income_routes = Router::new()
        .route(
            "/income",
            post(handlers::income::create_income).put(handlers::income::update_income),
        )
        .route(
            "/income/{id}",
            get(handlers::income::get_income).delete(handlers::income::delete_income),
        )
        .route("/incomes", get(handlers::income::get_income_list))
        .route(
            "/income_products",
            post(handlers::income_product::create_income_products)
                .get(handlers::income_product::get_income_product_list)
                .put(handlers::income_product::update_income_products)
                .delete(handlers::income_product::delete_income_products),
        );

    let product_routes = Router::new()
        .route(
            "/product",
            post(handlers::product::create_product).put(handlers::product::update_product),
        )
        .route(
            "/product/{id}",
            get(handlers::product::get_product).delete(handlers::product::delete_product),
        )
        .route("/products", get(handlers::product::get_product_list));

    let branch_routes = Router::new()
        .route(
            "/branch",
            post(handlers::branch::create_branch).put(handlers::branch::update_branch),
        )
        .route(
            "/branch/{id}",
            get(handlers::branch::get_branch).delete(handlers::branch::delete_branch),
        )
        .route("/branches", get(handlers::branch::get_branch_list));

    let finance_routes = Router::new()
        .route("/store/profit", post(handlers::store::add_profit))
        .route(
            "/store/withdrawal",
            post(handlers::store::withdrawal_delivered_sum),
        )
        .route(
            "/store/budget/{branch_id}",
            get(handlers::store::get_store_budget),
        )
        .route("/dealer/sum", post(handlers::dealer::add_dealer_sum));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .merge(basket_routes)
        .merge(basket_product_routes)
        .merge(income_routes)
        .merge(product_routes)
        .merge(branch_routes)
        .merge(finance_routes)
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
