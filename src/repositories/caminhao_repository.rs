use crate::models::caminhao::Caminhao;
use crate::utils::errors::AppResult;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CaminhaoRepository {
    pool: PgPool,
}

impl CaminhaoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        empresa_id: Uuid,
        placa: String,
        modelo: Option<String>,
    ) -> AppResult<Caminhao> {
        // Todo caminhão nasce 'available'; o status só muda via sincronizador
        let caminhao = sqlx::query_as::<_, Caminhao>(
            r#"
            INSERT INTO caminhoes (id, empresa_id, placa, modelo, status, created_at)
            VALUES ($1, $2, $3, $4, 'available', $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(empresa_id)
        .bind(placa)
        .bind(modelo)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(caminhao)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Caminhao>> {
        let caminhao = sqlx::query_as::<_, Caminhao>("SELECT * FROM caminhoes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(caminhao)
    }

    pub async fn find_by_empresa(&self, empresa_id: Uuid) -> AppResult<Vec<Caminhao>> {
        let caminhoes = sqlx::query_as::<_, Caminhao>(
            "SELECT * FROM caminhoes WHERE empresa_id = $1 ORDER BY created_at DESC",
        )
        .bind(empresa_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(caminhoes)
    }

    pub async fn placa_exists(&self, placa: &str, empresa_id: Uuid) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM caminhoes WHERE placa = $1 AND empresa_id = $2)",
        )
        .bind(placa)
        .bind(empresa_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Atualiza apenas campos cadastrais. O `status` é derivado e fica
    /// fora do UPDATE de propósito.
    pub async fn update(
        &self,
        id: Uuid,
        placa: String,
        modelo: Option<String>,
    ) -> AppResult<Caminhao> {
        let caminhao = sqlx::query_as::<_, Caminhao>(
            r#"
            UPDATE caminhoes
            SET placa = $2, modelo = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(placa)
        .bind(modelo)
        .fetch_one(&self.pool)
        .await?;

        Ok(caminhao)
    }

    /// Escrita do campo derivado. Chamada exclusiva do sincronizador.
    pub async fn update_status(&self, id: Uuid, status: &str) -> AppResult<()> {
        sqlx::query("UPDATE caminhoes SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM caminhoes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Manutenções que ainda seguram o caminhão em `in_maintenance`.
    pub async fn count_manutencoes_abertas(&self, caminhao_id: Uuid) -> AppResult<i64> {
        let result: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM manutencoes
            WHERE caminhao_id = $1 AND status IN ('scheduled', 'in_progress')
            "#,
        )
        .bind(caminhao_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Vínculos com ações atualmente ativas.
    pub async fn count_vinculos_ativos(&self, caminhao_id: Uuid) -> AppResult<i64> {
        let result: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM acao_caminhoes ac
            JOIN acoes a ON a.id = ac.acao_id
            WHERE ac.caminhao_id = $1 AND a.status = 'active'
            "#,
        )
        .bind(caminhao_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }
}
