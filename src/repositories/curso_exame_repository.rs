use crate::models::curso_exame::CursoExame;
use crate::utils::errors::AppResult;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CursoExameRepository {
    pool: PgPool,
}

impl CursoExameRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, empresa_id: Uuid, nome: String, tipo: String) -> AppResult<CursoExame> {
        let item = sqlx::query_as::<_, CursoExame>(
            r#"
            INSERT INTO cursos_exames (id, empresa_id, nome, tipo, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(empresa_id)
        .bind(nome)
        .bind(tipo)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<CursoExame>> {
        let item = sqlx::query_as::<_, CursoExame>("SELECT * FROM cursos_exames WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    pub async fn update(&self, id: Uuid, nome: String, tipo: String) -> AppResult<CursoExame> {
        let item = sqlx::query_as::<_, CursoExame>(
            r#"
            UPDATE cursos_exames
            SET nome = $2, tipo = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome)
        .bind(tipo)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM cursos_exames WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn find_by_empresa(&self, empresa_id: Uuid) -> AppResult<Vec<CursoExame>> {
        let itens = sqlx::query_as::<_, CursoExame>(
            "SELECT * FROM cursos_exames WHERE empresa_id = $1 ORDER BY nome ASC",
        )
        .bind(empresa_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(itens)
    }
}
