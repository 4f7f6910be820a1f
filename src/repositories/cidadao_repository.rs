use crate::models::cidadao::Cidadao;
use crate::utils::errors::AppResult;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct CidadaoRepository {
    pool: PgPool,
}

impl CidadaoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        empresa_id: Uuid,
        nome: String,
        cpf: String,
        data_nascimento: Option<NaiveDate>,
    ) -> AppResult<Cidadao> {
        let cidadao = sqlx::query_as::<_, Cidadao>(
            r#"
            INSERT INTO cidadaos (id, empresa_id, nome, cpf, data_nascimento, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(empresa_id)
        .bind(nome)
        .bind(cpf)
        .bind(data_nascimento)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(cidadao)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Cidadao>> {
        let cidadao = sqlx::query_as::<_, Cidadao>("SELECT * FROM cidadaos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cidadao)
    }

    pub async fn find_by_empresa(&self, empresa_id: Uuid) -> AppResult<Vec<Cidadao>> {
        let cidadaos = sqlx::query_as::<_, Cidadao>(
            "SELECT * FROM cidadaos WHERE empresa_id = $1 ORDER BY nome ASC",
        )
        .bind(empresa_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cidadaos)
    }

    pub async fn update(
        &self,
        id: Uuid,
        nome: String,
        cpf: String,
        data_nascimento: Option<NaiveDate>,
    ) -> AppResult<Cidadao> {
        let cidadao = sqlx::query_as::<_, Cidadao>(
            r#"
            UPDATE cidadaos
            SET nome = $2, cpf = $3, data_nascimento = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome)
        .bind(cpf)
        .bind(data_nascimento)
        .fetch_one(&self.pool)
        .await?;

        Ok(cidadao)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM cidadaos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn cpf_exists(&self, cpf: &str, empresa_id: Uuid) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM cidadaos WHERE cpf = $1 AND empresa_id = $2)",
        )
        .bind(cpf)
        .bind(empresa_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }
}
