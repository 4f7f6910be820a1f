pub mod connection;

use anyhow::Result;
use sqlx::PgPool;

/// Conexão com o banco, dona do pool compartilhado
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = connection::create_pool(Some(database_url)).await?;
        Ok(Self { pool })
    }

    /// Conectar usando DATABASE_URL do ambiente
    pub async fn new_default() -> Result<Self> {
        let pool = connection::create_pool(None).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
