//! Shared application state
//!
//! Estado compartilhado da aplicação, passado pelo router do Axum.
//! Apenas recursos com ciclo de vida do processo: pool do banco e
//! configuração. O handle da varredura periódica fica no main.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
